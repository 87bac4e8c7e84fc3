//! Per-screen fetch state: Loading / Error / Ready with request sequencing.
//!
//! Every fetch is issued through [`FetchState::begin_fetch`], which hands out a ticket tagged
//! with a monotonically increasing sequence number and the query it was issued for. A
//! completion is applied only when its ticket is still the latest one and the query has not
//! moved on; anything else is discarded, so a slow response for an old page can never
//! overwrite a newer one.

use std::fmt::Debug;

use crate::domain::errors::GatewayError;
use crate::domain::logging::LogComponent;
use crate::domain::stock::{Page, Series};
use crate::log_debug;

/// Payloads that can come back successfully yet hold nothing to show.
pub trait FetchedData {
    fn is_empty(&self) -> bool;
}

impl<T> FetchedData for Page<T> {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FetchedData for Series {
    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Handle for one in-flight request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket<Q> {
    seq: u64,
    query: Q,
}

impl<Q> FetchTicket<Q> {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &Q {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request superseded this one; its result was dropped
    Discarded,
}

/// What a screen should render. Error wins over everything else.
#[derive(Debug, PartialEq)]
pub enum ViewStatus<'a, T> {
    /// `stale` is the previous result, if any, kept on screen while refreshing
    Loading { stale: Option<&'a T> },
    Failed(&'a GatewayError),
    Empty,
    Ready(&'a T),
}

#[derive(Debug, Clone)]
pub struct FetchState<Q, T> {
    query: Q,
    data: Option<T>,
    error: Option<GatewayError>,
    in_flight: Option<u64>,
    last_seq: u64,
}

impl<Q, T> FetchState<Q, T>
where
    Q: Clone + PartialEq + Debug,
    T: FetchedData,
{
    pub fn new(query: Q) -> Self {
        Self { query, data: None, error: None, in_flight: None, last_seq: 0 }
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&GatewayError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Applies `change` to the query as one update. Returns whether the query changed.
    pub fn update_query(&mut self, change: impl FnOnce(&mut Q)) -> bool {
        let before = self.query.clone();
        change(&mut self.query);
        self.query != before
    }

    /// Enters Loading for the current query, superseding any request still in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket<Q> {
        self.last_seq += 1;
        self.in_flight = Some(self.last_seq);
        self.error = None;
        log_debug!(
            LogComponent::Presentation("FetchState"),
            "issued #{} for {:?}",
            self.last_seq,
            self.query
        );
        FetchTicket { seq: self.last_seq, query: self.query.clone() }
    }

    /// Re-issues the last query after a failure. `None` unless the view is in Error.
    pub fn retry(&mut self) -> Option<FetchTicket<Q>> {
        if self.error.is_none() || self.in_flight.is_some() {
            return None;
        }
        Some(self.begin_fetch())
    }

    /// Records the outcome of `ticket` unless a newer request has been issued since.
    pub fn complete(&mut self, ticket: &FetchTicket<Q>, result: Result<T, GatewayError>) -> Completion {
        if self.in_flight != Some(ticket.seq) || ticket.query != self.query {
            log_debug!(
                LogComponent::Presentation("FetchState"),
                "discarding stale #{} (latest #{})",
                ticket.seq,
                self.last_seq
            );
            return Completion::Discarded;
        }

        self.in_flight = None;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => {
                self.data = None;
                self.error = Some(error);
            }
        }
        Completion::Applied
    }

    pub fn status(&self) -> ViewStatus<'_, T> {
        if let Some(error) = &self.error {
            return ViewStatus::Failed(error);
        }
        match (&self.data, self.in_flight) {
            (stale, Some(_)) => ViewStatus::Loading { stale: stale.as_ref() },
            (None, None) => ViewStatus::Loading { stale: None },
            (Some(data), None) if data.is_empty() => ViewStatus::Empty,
            (Some(data), None) => ViewStatus::Ready(data),
        }
    }
}

/// Server-side paging parameters plus the route-supplied date filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Zero-based
    pub page: usize,
    pub page_size: usize,
    pub date_filter: Option<String>,
}

impl PageQuery {
    pub fn first(page_size: usize) -> Self {
        Self { page: 0, page_size: page_size.max(1), date_filter: None }
    }

    pub fn with_date_filter(mut self, date_filter: Option<String>) -> Self {
        self.date_filter = date_filter;
        self
    }

    /// One-based page number sent on the wire
    pub fn wire_page_number(&self) -> usize {
        self.page + 1
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    /// New page size and back to the first page, in one step.
    pub fn resize(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page = 0;
        }
    }

    /// A different filter selects a different result set, so paging restarts.
    pub fn filter_by(&mut self, date_filter: Option<String>) {
        let date_filter = date_filter.filter(|d| !d.trim().is_empty());
        if date_filter != self.date_filter {
            self.date_filter = date_filter;
            self.page = 0;
        }
    }
}

/// Numbers behind the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationModel {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl PaginationModel {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self { page, page_size: page_size.max(1), total }
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        (self.page + 1) * self.page_size < self.total
    }

    /// `1–20 of 503`
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0–0 of 0".to_string();
        }
        let from = (self.page * self.page_size + 1).min(self.total);
        let to = ((self.page + 1) * self.page_size).min(self.total);
        format!("{from}–{to} of {}", self.total)
    }
}
