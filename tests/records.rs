mod common;

use common::ScriptedGateway;
use futures::executor::block_on;
use quickcheck_macros::quickcheck;
use sp500_dashboard::application::{StockSource, load_series};
use sp500_dashboard::domain::stock::services::{DashboardSummary, group_by_sector};
use sp500_dashboard::domain::stock::{ChangeTone, Page, StockGateway, StockRecord, Ticker, format_change};
use sp500_dashboard::infrastructure::{HttpStockGateway, SyntheticGateway};
use sp500_dashboard::view_state::{FetchState, ViewStatus};
use time::macros::date;

#[quickcheck]
fn synthetic_pages_never_exceed_page_size(page: u8, size: u8) -> bool {
    let page_number = page as usize % 30 + 1;
    let page_size = size as usize % 60 + 1;
    let result = block_on(SyntheticGateway::default().list_records(page_number, page_size, None));
    matches!(result, Ok(p) if p.items.len() <= page_size && p.total_count == 100)
}

#[quickcheck]
fn page_truncates_oversized_responses(items: Vec<u8>, size: u8) -> bool {
    let page_size = size as usize % 25 + 1;
    let total = items.len();
    let page = Page::new(items, total, 0, page_size);
    page.len() <= page_size && page.total_count == total
}

#[test]
fn record_round_trips_through_wire_format() {
    let body = r#"{
        "asOfDate": "2024-03-28T00:00:00",
        "ticker": "msft",
        "security": "Microsoft Corp.",
        "gicsSector": "Information Technology",
        "gicsSubIndustry": "Systems Software",
        "headquartersLocation": "Redmond, Washington",
        "founded": "1975",
        "open": 420.1,
        "close": 421.9,
        "dtdChange": -0.17,
        "mtdChange": 1.7,
        "qtdChange": 12.1,
        "ytdChange": 12.1
    }"#;
    let record: StockRecord = serde_json::from_str(body).unwrap();
    assert_eq!(record.as_of_date, date!(2024 - 03 - 28));
    assert_eq!(record.ticker.value(), "MSFT");
    assert_eq!(record.founded, 1975);

    let wire = serde_json::to_value(&record).unwrap();
    assert_eq!(wire["asOfDate"], "2024-03-28");
    let back: StockRecord = serde_json::from_value(wire).unwrap();
    assert_eq!(back, record);
}

#[test]
fn change_tone_boundary_is_inclusive_at_zero() {
    assert_eq!(ChangeTone::of(0.0), ChangeTone::Positive);
    assert_eq!(ChangeTone::of(-0.01), ChangeTone::Negative);
    assert_eq!(ChangeTone::of(5.2), ChangeTone::Positive);

    assert_eq!(format_change(0.0), "+0.00%");
    assert_eq!(format_change(-0.01), "-0.01%");
    assert_eq!(format_change(5.2), "+5.20%");
}

#[test]
fn request_urls() {
    let gateway = HttpStockGateway::new("https://localhost:7241/api/SP500Analysis/");
    insta::assert_snapshot!(
        gateway.listing_url(2, 20, Some("2024-01-02")),
        @"https://localhost:7241/api/SP500Analysis?pageNumber=2&pageSize=20&date=2024-01-02"
    );
    insta::assert_snapshot!(
        gateway.series_url(&Ticker::new("BRK B").unwrap()),
        @"https://localhost:7241/api/SP500Analysis/ticker?ticker=BRK%20B"
    );
}

#[test]
fn demo_dashboard_summarises_latest_day() {
    let source = StockSource::demo();
    let ticker = Ticker::new("AAPL").unwrap();
    let mut state = FetchState::<Option<Ticker>, _>::new(Some(ticker.clone()));

    let ticket = state.begin_fetch();
    let result = block_on(load_series(&source, &ticker));
    state.complete(&ticket, result);

    let ViewStatus::Ready(series) = state.status() else {
        panic!("expected Ready");
    };
    assert!(series.records.windows(2).all(|w| w[0].as_of_date <= w[1].as_of_date));

    let summary = DashboardSummary::from_series(series).unwrap();
    let latest = series.latest().unwrap();
    assert_eq!(summary.metrics[0].title, "Latest Close");
    assert_eq!(summary.metrics[0].change, Some(latest.dtd_change));
}

#[test]
fn unknown_ticker_yields_empty_state() {
    let gateway = ScriptedGateway::new();
    let ticker = Ticker::new("ZZZZ").unwrap();
    let mut state = FetchState::<Option<Ticker>, _>::new(Some(ticker.clone()));

    let ticket = state.begin_fetch();
    let result = block_on(load_series(&gateway, &ticker));
    state.complete(&ticket, result);

    assert_eq!(state.status(), ViewStatus::Empty);
    assert_eq!(gateway.series_calls.borrow().as_slice(), &[ticker]);
}

#[quickcheck]
fn sector_counts_cover_every_record(count: u8) -> bool {
    let gateway = SyntheticGateway::new(count as usize);
    let records: Vec<StockRecord> = (0..gateway.total()).map(|i| gateway.record(i)).collect();
    let slices = group_by_sector(&records);
    slices.iter().map(|s| s.count).sum::<usize>() == records.len()
}
