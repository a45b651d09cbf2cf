//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_stack::NoticeStack;
use crate::net::api::HttpCustomerRepository;
use crate::net::repository::SharedRepository;
use crate::pages::customers::CustomersPage;
use crate::state::notice::NoticeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the customer repository and the notice queue. Page state is
/// created by the page itself.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let repo: SharedRepository = Arc::new(HttpCustomerRepository);
    provide_context(repo);
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Title text="Клиенты"/>

        <Router>
            <NoticeStack/>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=StaticSegment("") view=CustomersPage/>
            </Routes>
        </Router>
    }
}
