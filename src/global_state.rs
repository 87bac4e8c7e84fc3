//! Process-wide reactive state.
//!
//! The only shared value is the ticker [`Selection`]. It has a single writer, the row click on
//! a listing, and readers see the latest value on their next render. The dashboard route
//! parameter stays authoritative; the selection is a fallback and feeds the navbar link.

use leptos::*;
use once_cell::sync::OnceCell;

use crate::domain::logging::LogComponent;
use crate::domain::stock::Ticker;
use crate::global_signals;
use crate::log_info;

/// Currently chosen ticker. Empty until the first row click.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ticker: Option<Ticker>,
}

impl Selection {
    pub fn current(&self) -> Option<&Ticker> {
        self.ticker.as_ref()
    }

    /// Replaces the selection. Returns `false` when `ticker` was already selected.
    pub fn select(&mut self, ticker: Ticker) -> bool {
        if self.ticker.as_ref() == Some(&ticker) {
            return false;
        }
        self.ticker = Some(ticker);
        true
    }
}

pub struct Globals {
    pub selection: RwSignal<Selection>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

/// The first call creates the signals under the current reactive owner, so it must happen in
/// the root `App` component where they live for the whole session.
pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals { selection: create_rw_signal(Selection::default()) })
}

global_signals! {
    pub selection => selection: Selection,
}

/// Publishes the ticker chosen on a listing row.
pub fn publish_selection(ticker: Ticker) {
    selection().update(|current| {
        if current.select(ticker.clone()) {
            log_info!(LogComponent::Presentation("Selection"), "selected {}", ticker);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_starts_empty_and_reports_real_changes() {
        let mut selection = Selection::default();
        assert!(selection.current().is_none());

        assert!(selection.select(Ticker::new("AAPL").unwrap()));
        assert!(!selection.select(Ticker::new("aapl").unwrap()));
        assert!(selection.select(Ticker::new("MSFT").unwrap()));

        assert_eq!(selection.current().map(Ticker::value), Some("MSFT"));
    }
}
