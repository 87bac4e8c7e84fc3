#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use sp500_dashboard::domain::errors::{GatewayError, GatewayResult};
use sp500_dashboard::domain::stock::{Page, Series, StockGateway, StockRecord, Ticker};
use sp500_dashboard::infrastructure::dto::decode_page;

/// `(page_number, page_size, date_filter)` as sent to the gateway
pub type ListCall = (usize, usize, Option<String>);

/// Gateway that records every call and answers from a script of raw JSON bodies or errors.
/// An exhausted script answers with an empty page.
#[derive(Default)]
pub struct ScriptedGateway {
    pub calls: RefCell<Vec<ListCall>>,
    pub series_calls: RefCell<Vec<Ticker>>,
    script: RefCell<VecDeque<GatewayResult<String>>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_body(self, body: &str) -> Self {
        self.script.borrow_mut().push_back(Ok(body.to_string()));
        self
    }

    pub fn then_error(self, error: GatewayError) -> Self {
        self.script.borrow_mut().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<ListCall> {
        self.calls.borrow().clone()
    }
}

impl StockGateway for ScriptedGateway {
    async fn list_records(
        &self,
        page_number: usize,
        page_size: usize,
        date_filter: Option<&str>,
    ) -> GatewayResult<Page<StockRecord>> {
        self.calls.borrow_mut().push((page_number, page_size, date_filter.map(str::to_string)));
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Ok(body)) => decode_page(&body, page_number, page_size),
            Some(Err(error)) => Err(error),
            None => Ok(Page::new(Vec::new(), 0, page_number - 1, page_size)),
        }
    }

    async fn series_for_ticker(&self, ticker: &Ticker) -> GatewayResult<Series> {
        self.series_calls.borrow_mut().push(ticker.clone());
        Ok(Series::new(ticker.clone(), Vec::new(), None))
    }
}

pub const AAPL_PAGE: &str = r#"{
    "data": [{
        "asOfDate": "2024-01-02",
        "ticker": "AAPL",
        "security": "Apple Inc.",
        "gicsSector": "Information Technology",
        "gicsSubIndustry": "Technology Hardware, Storage & Peripherals",
        "headquartersLocation": "Cupertino, California",
        "founded": 1977,
        "open": 183.2,
        "close": 185.5,
        "dtdChange": 1.25,
        "mtdChange": 2.0,
        "qtdChange": 2.0,
        "ytdChange": 10.0
    }],
    "totalRecords": 1
}"#;
