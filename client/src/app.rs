//! Root application component with routing and context providers.

use accounts::ErrorSlot;
#[cfg(feature = "hydrate")]
use accounts::flow::resume_session;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Redirect, Route, Router, Routes},
};

use crate::components::{error_modal::ErrorModal, header::Header, spinner::Spinner};
#[cfg(feature = "hydrate")]
use crate::net::http::browser_api;
use crate::pages::{auth::AuthPage, user_list::UserListPage};
use crate::state::auth::AuthState;
use crate::state::config::{API_BASE_META, ClientConfig, EMPTY_LIST_META};
use crate::util::auth::LOGIN_PATH;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is written into `<meta>` tags so the hydrated client talks to the
/// same backend the server was configured with.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let api_base = config.api_base.clone();
    let empty_list = config.empty_list_meta_value();
    provide_context(config);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <meta name=EMPTY_LIST_META content=empty_list/>
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
/// Provides the session and error stores, resumes a stored session in the
/// browser, and holds the router back behind a spinner until that settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_document);
    let auth = RwSignal::new(AuthState::resolving());
    let errors = RwSignal::new(ErrorSlot::default());

    provide_context(config.clone());
    provide_context(auth);
    provide_context(errors);

    #[cfg(feature = "hydrate")]
    {
        let api = browser_api(&config);
        leptos::task::spawn_local(async move {
            let user = resume_session(&api).await;
            auth.update(|state| state.finish_check(user));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/userdesk.css"/>
        <Title text="User Desk"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Show
                    when=move || !auth.get().loading
                    fallback=|| view! { <div class="app-loading"><Spinner/></div> }
                >
                    <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                        <Route path=StaticSegment("login") view=AuthPage/>
                        <Route path=StaticSegment("registration") view=AuthPage/>
                        <ProtectedRoute
                            path=StaticSegment("users")
                            condition=move || auth.get().route_allowed()
                            redirect_path=|| LOGIN_PATH
                            view=UserListPage
                        />
                    </Routes>
                </Show>
            </main>
            <ErrorModal/>
        </Router>
    }
}
