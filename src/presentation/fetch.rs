//! Reactive glue between a query signal, a [`FetchState`] signal and an async loader.

use std::fmt::Debug;
use std::future::Future;
use std::rc::Rc;

use leptos::*;

use crate::domain::errors::GatewayResult;
use crate::view_state::{FetchState, FetchTicket, FetchedData};

/// Fetches once per distinct value of `query` and returns the Retry action.
///
/// The query lives in its own signal; the effect only reads it and only writes `state`.
/// `load` returns `None` for a query that has nothing to fetch, in which case no request is
/// issued. Results land through [`FetchState::complete`], so responses that arrive after the
/// query moved on are dropped. Signals already disposed with their screen are ignored.
pub fn use_fetch<Q, T, F, Fut>(
    query: impl Into<Signal<Q>>,
    state: RwSignal<FetchState<Q, T>>,
    load: F,
) -> Callback<()>
where
    Q: Clone + PartialEq + Debug + 'static,
    T: FetchedData + 'static,
    F: Fn(&Q) -> Option<Fut> + 'static,
    Fut: Future<Output = GatewayResult<T>> + 'static,
{
    let query: Signal<Q> = query.into();
    let distinct = create_memo(move |_| query.get());
    let load = Rc::new(load);

    {
        let load = Rc::clone(&load);
        create_effect(move |_| {
            let next = distinct.get();
            let pending = load(&next);
            let ticket = state
                .try_update(|current| {
                    current.update_query(|q| *q = next);
                    pending.is_some().then(|| current.begin_fetch())
                })
                .flatten();
            if let (Some(ticket), Some(pending)) = (ticket, pending) {
                settle(state, ticket, pending);
            }
        });
    }

    Callback::new(move |_| {
        let Some(ticket) = state.try_update(|current| current.retry()).flatten() else {
            return;
        };
        if let Some(pending) = load(ticket.query()) {
            settle(state, ticket, pending);
        }
    })
}

fn settle<Q, T, Fut>(state: RwSignal<FetchState<Q, T>>, ticket: FetchTicket<Q>, pending: Fut)
where
    Q: Clone + PartialEq + Debug + 'static,
    T: FetchedData + 'static,
    Fut: Future<Output = GatewayResult<T>> + 'static,
{
    spawn_local(async move {
        let result = pending.await;
        let _ = state.try_update(|current| current.complete(&ticket, result));
    });
}
