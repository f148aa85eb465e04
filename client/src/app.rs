//! Root application component with routing and the auth provider.
//!
//! ROUTE TREE
//! ==========
//! ```text
//! GatedRoutes (loading gate)
//! ├── /login, /register
//! └── ProtectedRoute
//!     └── Layout
//!         ├── /            -> /dashboard
//!         ├── /dashboard, /sweets, /sweets/:id, /history
//!         └── AdminRoute
//!             └── /admin, /admin/sweets/new, /admin/sweets/:id/edit
//! fallback: not-found (gated, unguarded)
//! ```
//! `routing::table::app_routes` describes the same paths; the host's route
//! tests compare the two.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::guards::{AdminRoute, GatedRoutes, LoadingGate, ProtectedRoute, replace};
use crate::components::layout::Layout;
use crate::pages::admin::{AddSweetPage, AdminDashboardPage, EditSweetPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::history::PurchaseHistoryPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::sweets::{SweetDetailPage, SweetsListPage};
use crate::routing::paths;
use crate::util::auth::provide_auth;

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

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
/// Provides the auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/sweetshop.css"/>
        <Title text="Sweet Shop"/>

        <Router>
            <ErrorBoundary fallback=|errors| {
                view! {
                    <div class="error-screen" role="alert">
                        <h1>"Something went wrong"</h1>
                        <ul>
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                }
            }>
                <AppRoutes/>
            </ErrorBoundary>
        </Router>
    }
}

/// The guarded route tree. Must sit inside a `<Router>` with the auth
/// context provided.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <LoadingGate><NotFoundPage/></LoadingGate> }>
            <ParentRoute path=StaticSegment("") view=GatedRoutes>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>

                <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                    <ParentRoute path=StaticSegment("") view=Layout>
                        <Route
                            path=path!("/")
                            view=|| view! { <Redirect path=paths::DASHBOARD options=replace()/> }
                        />
                        <Route path=path!("/dashboard") view=DashboardPage/>
                        <Route path=path!("/sweets") view=SweetsListPage/>
                        <Route path=path!("/sweets/:id") view=SweetDetailPage/>
                        <Route path=path!("/history") view=PurchaseHistoryPage/>

                        <ParentRoute path=StaticSegment("") view=AdminRoute>
                            <Route path=path!("/admin") view=AdminDashboardPage/>
                            <Route path=path!("/admin/sweets/new") view=AddSweetPage/>
                            <Route path=path!("/admin/sweets/:id/edit") view=EditSweetPage/>
                        </ParentRoute>
                    </ParentRoute>
                </ParentRoute>
            </ParentRoute>
        </Routes>
    }
}
