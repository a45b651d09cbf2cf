//! Customers page: list, selection, and the create flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. The page owns its list, selection, draft, and
//! modal state for its own lifetime and talks to the backend exclusively
//! through the [`SharedRepository`] found in context.
//!
//! ERROR HANDLING
//! ==============
//! Fetch and create failures surface as error notices. A failed create keeps
//! the modal open with the draft intact; retrying is left to the user. A
//! create that completes after the modal was closed still lands in the list.

use leptos::prelude::*;

use crate::components::customer_form::{CustomerFormModal, focus_field};
use crate::components::customer_table::CustomerTable;
use crate::net::repository::SharedRepository;
use crate::state::customer_form::{CustomerDraft, FieldError};
use crate::state::customers::{CreateOutcome, CustomersState, submit_draft};
use crate::state::notice::{NoticeKind, NoticeState, notify};

#[component]
pub fn CustomersPage() -> impl IntoView {
    let repo = expect_context::<SharedRepository>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let customers = RwSignal::new(CustomersState::default());
    let draft = RwSignal::new(CustomerDraft::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    // Initial load, once per mount. No retry and no re-fetch.
    #[cfg(feature = "hydrate")]
    {
        let repo = repo.clone();
        leptos::task::spawn_local(async move {
            let result = repo.list().await;
            let mut loaded = Ok(0);
            customers.update(|s| loaded = s.apply_loaded(result));
            match loaded {
                Ok(count) => log::debug!("loaded {count} customers"),
                Err(e) => {
                    log::warn!("customer list fetch failed: {e}");
                    notify(notices, NoticeKind::Error, format!("Не удалось загрузить клиентов: {e}"));
                }
            }
        });
    }

    let reset_form = move || {
        draft.set(CustomerDraft::default());
        errors.set(Vec::new());
    };

    let on_open = move |_| customers.update(CustomersState::open_modal);

    let on_cancel = Callback::new(move |()| {
        customers.update(CustomersState::close_modal);
        reset_form();
    });

    let on_submit = Callback::new(move |()| {
        let current = draft.get_untracked();
        let repo = repo.clone();
        leptos::task::spawn_local(async move {
            match submit_draft(customers, &*repo, &current).await {
                Err(failed) => {
                    if let Some(first) = failed.first() {
                        focus_field(first.field);
                    }
                    errors.set(failed);
                }
                Ok(CreateOutcome::Created) => reset_form(),
                Ok(CreateOutcome::Rejected(err)) => {
                    notify(notices, NoticeKind::Error, format!("Клиент не создан: {err}"));
                }
                Ok(CreateOutcome::Failed(err)) => {
                    notify(notices, NoticeKind::Error, format!("Не удалось создать клиента: {err}"));
                }
                Ok(CreateOutcome::Appended | CreateOutcome::Ignored) => {}
            }
        });
    });

    let on_selection_change = Callback::new(move |keys: Vec<String>| customers.update(|s| s.set_selection(keys)));

    view! {
        <main class="customers-page">
            <header class="customers-page__header">
                <h1>"Клиенты"</h1>
                <button class="btn btn--primary" on:click=on_open>
                    "Добавить клиента"
                </button>
            </header>
            <CustomerTable
                entries=Signal::derive(move || customers.with(|s| s.entries.clone()))
                selected=Signal::derive(move || customers.with(|s| s.selected.clone()))
                on_selection_change=on_selection_change
            />
            <Show when=move || customers.with(CustomersState::is_modal_open)>
                <CustomerFormModal
                    draft=draft
                    errors=errors
                    submitting=Signal::derive(move || customers.with(CustomersState::is_submitting))
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            </Show>
        </main>
    }
}
