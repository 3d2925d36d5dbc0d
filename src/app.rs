//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, login::LoginPage, register::RegisterPage,
};
use crate::state::session::SessionState;
use crate::util::guard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the session context and sets up client-side routing. The
/// stored session is restored in an effect so it only happens in the
/// browser, after hydration; until then the state reads as loading and
/// both server and client render the same thing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    Effect::new(move || {
        if session.get_untracked().loading {
            session.set(SessionState::restored());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sweetshop-client.css"/>
        <Title text="Sweet Shop"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("") view=HomeRedirect/>
            </Routes>
        </Router>
    }
}

/// Index route: forward to the role-appropriate landing view, or login.
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let target = state.session.map_or("/login", |s| guard::landing_route(s.role));
        navigate(target, NavigateOptions::default());
    });

    view! { <p>"Redirecting..."</p> }
}
