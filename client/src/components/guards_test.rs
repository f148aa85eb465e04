use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::{StaticSegment, path};

use super::*;
use crate::net::types::Role;
use crate::routing::paths;
use crate::state::auth::AuthSnapshot;
use crate::util::ssr_render::{render_at, settled};

const ADMIN_CONTENT: &str = "admin-only content";
const MEMBER_CONTENT: &str = "members-only content";

/// Admin guard alone around `/admin`, with a plain dashboard beside it.
#[component]
fn AdminOnlyRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| "no route">
            <ParentRoute path=StaticSegment("") view=AdminRoute>
                <Route path=path!("/admin") view=|| view! { <p>{ADMIN_CONTENT}</p> }/>
            </ParentRoute>
            <Route path=path!("/dashboard") view=|| view! { <p>"dashboard"</p> }/>
        </Routes>
    }
}

#[component]
fn ProtectedOnlyRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| "no route">
            <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                <Route path=path!("/dashboard") view=|| view! { <p>{MEMBER_CONTENT}</p> }/>
            </ParentRoute>
            <Route path=path!("/login") view=|| view! { <p>"login"</p> }/>
        </Routes>
    }
}

// =============================================================================
// LoadingGate
// =============================================================================

#[test]
fn loading_gate_hides_children_while_loading() {
    let out = render_at("/", AuthSnapshot::initial(), || {
        view! { <LoadingGate><p>{MEMBER_CONTENT}</p></LoadingGate> }
    });
    assert!(!out.html.contains(MEMBER_CONTENT), "{}", out.html);
    assert!(out.html.contains("loading-spinner"), "{}", out.html);
    assert_eq!(out.redirect, None);
}

#[test]
fn loading_gate_renders_children_once_resolved() {
    let out = render_at("/", AuthSnapshot::signed_out(), || {
        view! { <LoadingGate><p>{MEMBER_CONTENT}</p></LoadingGate> }
    });
    assert!(out.html.contains(MEMBER_CONTENT), "{}", out.html);
    assert!(!out.html.contains("loading-spinner"), "{}", out.html);
}

// =============================================================================
// AdminRoute
// =============================================================================

#[test]
fn admin_route_renders_for_flag_even_with_user_role() {
    let out = render_at("/admin", settled(true, true, Some(Role::User)), || {
        view! { <Router><AdminOnlyRoutes/></Router> }
    });
    assert!(out.html.contains(ADMIN_CONTENT), "{}", out.html);
    assert_eq!(out.redirect, None);
}

#[test]
fn admin_route_redirects_without_flag_even_with_admin_role() {
    let out = render_at("/admin", settled(true, false, Some(Role::Admin)), || {
        view! { <Router><AdminOnlyRoutes/></Router> }
    });
    assert!(!out.html.contains(ADMIN_CONTENT), "{}", out.html);
    assert_eq!(out.redirect.as_deref(), Some(paths::DASHBOARD));
}

#[test]
fn admin_route_redirects_anonymous_to_dashboard() {
    let out = render_at("/admin", settled(false, false, None), || {
        view! { <Router><AdminOnlyRoutes/></Router> }
    });
    assert!(!out.html.contains(ADMIN_CONTENT), "{}", out.html);
    assert_eq!(out.redirect.as_deref(), Some(paths::DASHBOARD));
}

// =============================================================================
// ProtectedRoute
// =============================================================================

#[test]
fn protected_route_renders_for_session() {
    let out = render_at("/dashboard", settled(true, false, Some(Role::User)), || {
        view! { <Router><ProtectedOnlyRoutes/></Router> }
    });
    assert!(out.html.contains(MEMBER_CONTENT), "{}", out.html);
    assert_eq!(out.redirect, None);
}

#[test]
fn protected_route_redirects_anonymous_to_login() {
    let out = render_at("/dashboard", settled(false, true, Some(Role::Admin)), || {
        view! { <Router><ProtectedOnlyRoutes/></Router> }
    });
    assert!(!out.html.contains(MEMBER_CONTENT), "{}", out.html);
    assert_eq!(out.redirect.as_deref(), Some(paths::LOGIN));
}
