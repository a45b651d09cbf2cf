//! Modal form for creating a customer.
//!
//! DESIGN
//! ======
//! The modal renders a [`CustomerDraft`] owned by the page and turns every
//! input into a [`FormAction`]. Repeatable groups re-render only when their
//! length changes, so typing never rebuilds an input under the cursor.
//! After a failed submit, errors are recomputed on every change.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::state::customer_form::{AccountField, CustomerDraft, FieldError, FieldPath, FormAction, OrgField, error_for};

/// Apply `action`; once errors are showing, keep them in sync with the draft.
fn dispatch(draft: RwSignal<CustomerDraft>, errors: RwSignal<Vec<FieldError>>, action: FormAction) {
    draft.update(|d| *d = std::mem::take(d).reduce(action));
    if !errors.with_untracked(Vec::is_empty) {
        errors.set(draft.with_untracked(|d| d.validate().err().unwrap_or_default()));
    }
}

/// Expand the section holding `field` and move keyboard focus to its input.
pub fn focus_field(field: FieldPath) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        // A collapsed <details> swallows focus().
        if let Some(section) = document.get_element_by_id(field.section_id()) {
            let _ = section.set_attribute("open", "");
        }
        let element = document
            .get_element_by_id(&field.dom_id())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = field;
    }
}

#[component]
pub fn CustomerFormModal(
    draft: RwSignal<CustomerDraft>,
    errors: RwSignal<Vec<FieldError>>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    });

    let account_count = Memo::new(move |_| draft.with(|d| d.bank_accounts.len()));
    let email_count = Memo::new(move |_| draft.with(|d| d.invoice_emails.len()));
    let metadata_count = Memo::new(move |_| draft.with(|d| d.metadata.len()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--customer"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Создание клиента"</h2>
                    <button class="dialog__close" title="Закрыть" on:click=move |_| on_cancel.run(())>
                        "✕"
                    </button>
                </div>

                <form
                    class="customer-form"
                    novalidate=true
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <details id="section-customer" class="customer-form__section" open=true>
                        <summary>"Детали Клиента"</summary>
                        <TextField
                            label="Имя"
                            field=FieldPath::Name
                            value=Signal::derive(move || draft.with(|d| d.name.clone()))
                            on_input=Callback::new(move |v| dispatch(draft, errors, FormAction::SetName(v)))
                            errors=errors
                        />
                        <TextField
                            label="Email"
                            field=FieldPath::Email
                            value=Signal::derive(move || draft.with(|d| d.email.clone()))
                            on_input=Callback::new(move |v| dispatch(draft, errors, FormAction::SetEmail(v)))
                            errors=errors
                            input_type="email"
                        />
                        <TextField
                            label="Дней отсрочки"
                            field=FieldPath::DeferralDays
                            value=Signal::derive(move || draft.with(|d| d.deferral_days.clone()))
                            on_input=Callback::new(move |v| dispatch(draft, errors, FormAction::SetDeferralDays(v)))
                            errors=errors
                            input_type="number"
                        />
                        <TextField
                            label="Кредитный лимит"
                            field=FieldPath::CreditLimit
                            value=Signal::derive(move || draft.with(|d| d.credit_limit.clone()))
                            on_input=Callback::new(move |v| dispatch(draft, errors, FormAction::SetCreditLimit(v)))
                            errors=errors
                            input_type="number"
                        />
                    </details>

                    <details id="section-org" class="customer-form__section" open=true>
                        <summary>"Детали Организации"</summary>
                        {OrgField::ALL
                            .into_iter()
                            .map(|field| {
                                view! {
                                    <TextField
                                        label=field.label()
                                        field=FieldPath::Org(field)
                                        value=Signal::derive(move || draft.with(|d| d.org.get(field).to_owned()))
                                        on_input=Callback::new(move |v| dispatch(draft, errors, FormAction::SetOrg(field, v)))
                                        errors=errors
                                    />
                                }
                            })
                            .collect_view()}
                    </details>

                    <details id="section-accounts" class="customer-form__section" open=true>
                        <summary>"Банковские счета"</summary>
                        {move || {
                            (0..account_count.get())
                                .map(|index| view! { <BankAccountFields index=index draft=draft errors=errors/> })
                                .collect_view()
                        }}
                        <button
                            type="button"
                            class="btn btn--dashed"
                            on:click=move |_| dispatch(draft, errors, FormAction::AddAccount)
                        >
                            "+ Добавить ещё счет"
                        </button>
                    </details>

                    <details id="section-invoice-emails" class="customer-form__section" open=true>
                        <summary>"Emails для счетов"</summary>
                        {move || {
                            (0..email_count.get())
                                .map(|index| {
                                    view! {
                                        <div class="customer-form__group">
                                            <TextField
                                                label="Email"
                                                field=FieldPath::InvoiceEmail(index)
                                                value=Signal::derive(move || {
                                                    draft.with(|d| d.invoice_emails.get(index).cloned().unwrap_or_default())
                                                })
                                                on_input=Callback::new(move |v| {
                                                    dispatch(draft, errors, FormAction::SetInvoiceEmail(index, v));
                                                })
                                                errors=errors
                                                input_type="email"
                                            />
                                            <Show when=move || draft.with(|d| d.can_remove_invoice_email(index))>
                                                <button
                                                    type="button"
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        dispatch(draft, errors, FormAction::RemoveInvoiceEmail(index));
                                                    }
                                                >
                                                    "− Удалить email"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <button
                            type="button"
                            class="btn btn--dashed"
                            on:click=move |_| dispatch(draft, errors, FormAction::AddInvoiceEmail)
                        >
                            "+ Добавить ещё email"
                        </button>
                    </details>

                    <details id="section-metadata" class="customer-form__section" open=true>
                        <summary>"Meta"</summary>
                        {move || {
                            (0..metadata_count.get())
                                .map(|index| {
                                    view! {
                                        <div class="customer-form__group customer-form__group--inline">
                                            <TextField
                                                label="Ключ"
                                                field=FieldPath::MetadataKey(index)
                                                value=Signal::derive(move || {
                                                    draft.with(|d| d.metadata.get(index).map(|m| m.key.clone()).unwrap_or_default())
                                                })
                                                on_input=Callback::new(move |v| {
                                                    dispatch(draft, errors, FormAction::SetMetadataKey(index, v));
                                                })
                                                errors=errors
                                            />
                                            <TextField
                                                label="Значение"
                                                field=FieldPath::MetadataValue(index)
                                                value=Signal::derive(move || {
                                                    draft.with(|d| d.metadata.get(index).map(|m| m.value.clone()).unwrap_or_default())
                                                })
                                                on_input=Callback::new(move |v| {
                                                    dispatch(draft, errors, FormAction::SetMetadataValue(index, v));
                                                })
                                                errors=errors
                                            />
                                            <button
                                                type="button"
                                                class="btn btn--danger"
                                                title="Удалить"
                                                on:click=move |_| dispatch(draft, errors, FormAction::RemoveMetadata(index))
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <button
                            type="button"
                            class="btn btn--dashed"
                            on:click=move |_| dispatch(draft, errors, FormAction::AddMetadata)
                        >
                            "+ Добавить ещё ключ - значение"
                        </button>
                    </details>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Отмена"
                        </button>
                        <button type="submit" class="btn btn--primary" prop:disabled=move || submitting.get()>
                            {move || if submitting.get() { "Создание…" } else { "Создать" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Inputs, default switch, and remove control for one bank account.
#[component]
fn BankAccountFields(index: usize, draft: RwSignal<CustomerDraft>, errors: RwSignal<Vec<FieldError>>) -> impl IntoView {
    let is_default = move || draft.with(|d| d.bank_accounts.get(index).is_some_and(|a| a.is_default));
    let switch_locked = move || draft.with(|d| !d.can_toggle_default(index));
    let switch_id = format!("account-{index}-is-default");

    view! {
        <div class="customer-form__group">
            {AccountField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <TextField
                            label=field.label()
                            field=FieldPath::Account(index, field)
                            value=Signal::derive(move || {
                                draft.with(|d| d.bank_accounts.get(index).map(|a| a.get(field).to_owned()).unwrap_or_default())
                            })
                            on_input=Callback::new(move |v| dispatch(draft, errors, FormAction::SetAccount(index, field, v)))
                            errors=errors
                            placeholder=field.label()
                        />
                    }
                })
                .collect_view()}
            <div class="form-field form-field--switch">
                <label class="form-field__label" for=switch_id.clone()>"Дефолтный счет"</label>
                <input
                    id=switch_id
                    type="checkbox"
                    role="switch"
                    prop:checked=is_default
                    prop:disabled=switch_locked
                    on:change=move |_| dispatch(draft, errors, FormAction::SetDefault(index))
                />
            </div>
            <Show when=move || draft.with(|d| d.can_remove_account(index))>
                <button
                    type="button"
                    class="btn btn--danger"
                    on:click=move |_| dispatch(draft, errors, FormAction::RemoveAccount(index))
                >
                    "− Удалить счет"
                </button>
            </Show>
        </div>
    }
}

/// Labelled input with its inline validation message.
#[component]
fn TextField(
    label: &'static str,
    field: FieldPath,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    errors: RwSignal<Vec<FieldError>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let id = field.dom_id();
    let error = move || errors.with(|e| error_for(e, field));

    view! {
        <div class="form-field" class:form-field--invalid=move || error().is_some()>
            <label class="form-field__label" for=id.clone()>
                <span class="form-field__required" aria-hidden="true">"*"</span>
                {label}
            </label>
            <input
                id=id
                class="form-field__input"
                type=input_type
                min=(input_type == "number").then_some("0")
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error().map(|message| view! { <p class="form-field__error">{message}</p> })}
        </div>
    }
}
