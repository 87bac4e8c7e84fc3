use leptos::*;

use crate::domain::stock::Ticker;
use crate::presentation::table_model::{Cell, TableColumn, TableRowModel};
use crate::view_state::PaginationModel;

#[component]
pub fn StockTable(
    columns: &'static [TableColumn],
    rows: Vec<TableRowModel>,
    /// Called with the row's ticker; rows are not clickable without it
    #[prop(optional, into)]
    on_row_click: Option<Callback<Ticker>>,
) -> impl IntoView {
    let header = columns
        .iter()
        .map(|column| view! { <th class:numeric=column.is_numeric()>{column.to_string()}</th> })
        .collect_view();

    let body = rows
        .into_iter()
        .map(|row| {
            let ticker = row.ticker;
            let cells = row
                .cells
                .into_iter()
                .zip(columns.iter())
                .map(|(cell, column)| match cell {
                    Cell::Change { text, tone } => {
                        view! { <td class=format!("numeric {}", tone.css_class())>{text}</td> }
                    }
                    Cell::Number(text) | Cell::Text(text) => {
                        view! { <td class:numeric=column.is_numeric()>{text}</td> }
                    }
                })
                .collect_view();
            let clickable = on_row_click.is_some();
            view! {
                <tr
                    data-row-id=row.id
                    class:clickable=clickable
                    on:click=move |_| {
                        if let Some(on_row_click) = on_row_click {
                            on_row_click.call(ticker.clone());
                        }
                    }
                >
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="stock-table">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

/// Page size selector, range label and previous/next buttons.
#[component]
pub fn Pagination(
    #[prop(into)] model: Signal<PaginationModel>,
    options: Vec<usize>,
    #[prop(into)] on_page: Callback<usize>,
    #[prop(into)] on_page_size: Callback<usize>,
) -> impl IntoView {
    let choices = options
        .into_iter()
        .map(|size| {
            view! {
                <option value=size.to_string() selected=move || model.get().page_size == size>
                    {size}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="pagination">
            <label>
                "Rows per page "
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size.call(size);
                    }
                }>{choices}</select>
            </label>
            <span class="range-label">{move || model.get().range_label()}</span>
            <button
                class="page-btn"
                disabled=move || !model.get().has_previous()
                on:click=move |_| {
                    let current = model.get_untracked();
                    if current.has_previous() {
                        on_page.call(current.page - 1);
                    }
                }
            >
                "‹ Prev"
            </button>
            <button
                class="page-btn"
                disabled=move || !model.get().has_next()
                on:click=move |_| {
                    let current = model.get_untracked();
                    if current.has_next() {
                        on_page.call(current.page + 1);
                    }
                }
            >
                "Next ›"
            </button>
        </div>
    }
}
