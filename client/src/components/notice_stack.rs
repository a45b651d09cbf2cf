//! Stack of transient notices pinned to the top of the viewport.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let is_error = notice.kind == NoticeKind::Error;
                        view! {
                            <div class="notice" class:notice--error=is_error class:notice--success=!is_error>
                                <span class="notice__text">{notice.text}</span>
                                <button
                                    class="notice__close"
                                    title="Закрыть"
                                    on:click=move |_| notices.update(|n| n.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
