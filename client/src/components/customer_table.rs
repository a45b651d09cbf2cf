//! Customers table with row selection and copyable ids.
//!
//! DESIGN
//! ======
//! The table never owns selection: it renders `selected` and reports the next
//! selection through `on_selection_change`. Cell text comes from
//! [`table_rows`], a pure function of the entries.

#[cfg(test)]
#[path = "customer_table_test.rs"]
mod customer_table_test;

use leptos::prelude::*;

use crate::state::customers::{CustomerEntry, toggle_all, toggle_key};
use crate::state::notice::NoticeState;
use crate::util::clipboard::copy_to_clipboard;
use crate::util::format::{format_date, format_deferral_days};

/// Column headers, left to right.
pub const COLUMNS: [&str; 6] = ["Имя", "ID", "Email", "Отсрочка оплаты", "Создан", "Изменен"];

/// Display-ready cells for one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub name: String,
    pub id: String,
    pub email: String,
    pub deferral: String,
    pub created: String,
    pub updated: String,
}

#[must_use]
pub fn table_rows(entries: &[CustomerEntry]) -> Vec<TableRow> {
    entries
        .iter()
        .map(|entry| {
            let row = entry.row();
            TableRow {
                key: entry.key.clone(),
                name: row.name,
                id: row.id,
                email: row.email,
                deferral: format_deferral_days(row.deferral_days),
                created: format_date(row.created_at.as_deref()),
                updated: format_date(row.updated_at.as_deref()),
            }
        })
        .collect()
}

/// Whether the row addressed by `key` is part of `selected`.
#[must_use]
pub fn is_row_selected(selected: &[String], key: &str) -> bool {
    selected.iter().any(|k| k == key)
}

#[component]
pub fn CustomerTable(
    #[prop(into)] entries: Signal<Vec<CustomerEntry>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_selection_change: Callback<Vec<String>>,
) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let rows = Memo::new(move |_| entries.with(|e| table_rows(e)));

    let all_keys = move || rows.with(|r| r.iter().map(|row| row.key.clone()).collect::<Vec<_>>());
    let all_selected = move || {
        let keys = all_keys();
        !keys.is_empty() && selected.with(|s| keys.iter().all(|k| s.contains(k)))
    };

    view! {
        <table class="customer-table">
            <thead>
                <tr>
                    <th class="customer-table__select">
                        <input
                            type="checkbox"
                            aria-label="Выбрать все"
                            prop:checked=all_selected
                            on:change=move |_| {
                                on_selection_change.run(toggle_all(&selected.get_untracked(), &all_keys()));
                            }
                        />
                    </th>
                    {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! {
                        <tr class="customer-table__empty">
                            <td colspan="7">"Нет данных"</td>
                        </tr>
                    }
                >
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let key = row.key.clone();
                                let check_key = key.clone();
                                let id = row.id.clone();
                                let row_key = key.clone();
                                let is_selected = move || selected.with(|s| is_row_selected(s, &check_key));
                                let row_selected = move || selected.with(|s| is_row_selected(s, &row_key));
                                view! {
                                    <tr class="customer-table__row" class:customer-table__row--selected=row_selected>
                                        <td class="customer-table__select">
                                            <input
                                                type="checkbox"
                                                prop:checked=is_selected
                                                on:change=move |_| {
                                                    on_selection_change.run(toggle_key(&selected.get_untracked(), &key));
                                                }
                                            />
                                        </td>
                                        <td>{row.name}</td>
                                        <td class="customer-table__id">
                                            {row.id}
                                            " "
                                            <button
                                                class="customer-table__copy"
                                                title="Копировать ID"
                                                on:click=move |_| copy_to_clipboard(&id, None, notices)
                                            >
                                                "⧉"
                                            </button>
                                        </td>
                                        <td>{row.email}</td>
                                        <td>{row.deferral}</td>
                                        <td>{row.created}</td>
                                        <td>{row.updated}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </tbody>
        </table>
    }
}
