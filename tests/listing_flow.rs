mod common;

use common::{AAPL_PAGE, ScriptedGateway};
use futures::executor::block_on;
use sp500_dashboard::application::load_page;
use sp500_dashboard::domain::errors::GatewayError;
use sp500_dashboard::domain::stock::services::filter_by_date_search;
use sp500_dashboard::domain::stock::{ChangeTone, Page, StockRecord};
use sp500_dashboard::presentation::table_model::{Cell, LISTING_COLUMNS, TableColumn, build_rows};
use sp500_dashboard::view_state::{Completion, FetchState, PageQuery, PaginationModel, ViewStatus};

type ListingState = FetchState<PageQuery, Page<StockRecord>>;

/// Issues the current query the way the page does and applies the result.
fn fetch(state: &mut ListingState, gateway: &ScriptedGateway) -> Completion {
    let ticket = state.begin_fetch();
    let result = block_on(load_page(gateway, ticket.query()));
    state.complete(&ticket, result)
}

#[test]
fn page_size_change_requests_first_page() {
    let gateway = ScriptedGateway::new();
    let mut state = ListingState::new(PageQuery::first(20));

    fetch(&mut state, &gateway);
    state.update_query(|q| q.go_to(3));
    fetch(&mut state, &gateway);
    state.update_query(|q| q.resize(50));
    fetch(&mut state, &gateway);

    assert_eq!(gateway.calls(), vec![(1, 20, None), (4, 20, None), (1, 50, None)]);
}

#[test]
fn late_response_for_old_page_never_wins() {
    let gateway = ScriptedGateway::new().then_body(AAPL_PAGE).then_body(
        r#"{"data":[{"asOfDate":"2024-01-03","ticker":"MSFT","open":368.0,"close":370.0,
            "dtdChange":0.5,"mtdChange":0.5,"qtdChange":0.5,"ytdChange":0.5}],"totalRecords":40}"#,
    );
    let mut state = ListingState::new(PageQuery::first(20));

    let page_a = state.begin_fetch();
    let response_a = block_on(load_page(&gateway, page_a.query()));
    state.update_query(|q| q.go_to(1));
    let page_b = state.begin_fetch();
    let response_b = block_on(load_page(&gateway, page_b.query()));

    assert_eq!(state.complete(&page_b, response_b), Completion::Applied);
    assert_eq!(state.complete(&page_a, response_a), Completion::Discarded);

    match state.status() {
        ViewStatus::Ready(page) => {
            assert_eq!(page.items[0].ticker.value(), "MSFT");
            assert_eq!(page.total_count, 40);
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[test]
fn listing_renders_single_positive_row() {
    let gateway = ScriptedGateway::new().then_body(AAPL_PAGE);
    let mut state = ListingState::new(PageQuery::first(20));
    fetch(&mut state, &gateway);

    assert_eq!(gateway.calls(), vec![(1, 20, None)]);
    let ViewStatus::Ready(page) = state.status() else {
        panic!("expected Ready");
    };

    let rows = build_rows(filter_by_date_search(&page.items, ""), LISTING_COLUMNS);
    assert_eq!(rows.len(), 1);
    let daily = LISTING_COLUMNS.iter().position(|c| *c == TableColumn::DailyChange).unwrap();
    assert_eq!(
        rows[0].cells[daily],
        Cell::Change { text: "+1.25%".into(), tone: ChangeTone::Positive }
    );

    let pagination = PaginationModel::new(state.query().page, state.query().page_size, page.total_count);
    assert_eq!(pagination.total, 1);
    assert_eq!(pagination.range_label(), "1–1 of 1");
}

#[test]
fn client_search_keeps_server_total() {
    let gateway = ScriptedGateway::new().then_body(AAPL_PAGE);
    let mut state = ListingState::new(PageQuery::first(20));
    fetch(&mut state, &gateway);
    let page = state.data().unwrap();

    assert!(filter_by_date_search(&page.items, "2023").is_empty());
    assert_eq!(filter_by_date_search(&page.items, "01-02").len(), 1);
    assert_eq!(page.total_count, 1);
}

#[test]
fn network_failure_then_retry_repeats_request() {
    let gateway = ScriptedGateway::new()
        .then_error(GatewayError::Network("connection refused".into()))
        .then_body(AAPL_PAGE);
    let mut state = ListingState::new(PageQuery::first(20).with_date_filter(Some("2024-01-02".into())));

    fetch(&mut state, &gateway);
    let ViewStatus::Failed(error) = state.status() else {
        panic!("expected Failed");
    };
    assert_eq!(error.to_string(), "Network Error: connection refused");
    assert!(state.data().is_none());

    let ticket = state.retry().expect("retry is offered from Error");
    let result = block_on(load_page(&gateway, ticket.query()));
    assert_eq!(state.complete(&ticket, result), Completion::Applied);

    let calls = gateway.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(calls[0], (1, 20, Some("2024-01-02".to_string())));
    assert!(matches!(state.status(), ViewStatus::Ready(_)));
}

#[test]
fn server_error_is_reported_and_empty_page_is_not() {
    let gateway = ScriptedGateway::new()
        .then_error(GatewayError::Server { status: 500, status_text: "Internal Server Error".into() })
        .then_body(r#"{"data":[],"totalRecords":0}"#);
    let mut state = ListingState::new(PageQuery::first(20));

    fetch(&mut state, &gateway);
    assert!(matches!(state.status(), ViewStatus::Failed(GatewayError::Server { status: 500, .. })));

    let ticket = state.retry().unwrap();
    let result = block_on(load_page(&gateway, ticket.query()));
    state.complete(&ticket, result);
    assert_eq!(state.status(), ViewStatus::Empty);
}

#[quickcheck_macros::quickcheck]
fn wire_page_number_is_one_based(page: u16, size: u8) -> bool {
    let mut query = PageQuery::first(size as usize);
    query.go_to(page as usize);
    query.wire_page_number() == page as usize + 1
}
