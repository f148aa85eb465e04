//! Declarative route tree and navigation resolver.
//!
//! DESIGN
//! ======
//! The tree is a static list of nodes: pages and redirects keyed by a path
//! pattern, and groups that attach a [`Guard`] (and optionally the layout
//! shell) to their children. Resolution walks the tree top-down, picks the
//! first node whose pattern matches, then checks the guards on the path from
//! the root to that node, outermost first. A failing guard or a redirect node
//! restarts resolution at the new path.
//!
//! The tree mirrors the `leptos_router` tree in `app.rs`, built from the same
//! `paths` constants. It backs the layout's navigation links; test builds add
//! a resolver so the whole composition can be exercised without a browser.
//! The host's route tests check both trees expose the same paths.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::sync::LazyLock;

use super::guard::{Guard, GuardDecision};
#[cfg(test)]
use super::guard::{Gate, loading_gate};
use super::paths;
use crate::state::auth::AuthSnapshot;

/// Resolution gives up after this many redirects.
#[cfg(test)]
pub(crate) const MAX_REDIRECTS: usize = 8;

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RouteError {
    #[error("redirect loop at {path} after {hops} hops")]
    RedirectLoop { path: String, hops: usize },
}

/// Pages of the shop front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Sweets,
    SweetDetail,
    PurchaseHistory,
    AdminDashboard,
    AddSweet,
    EditSweet,
    NotFound,
}

impl Page {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Dashboard => "Dashboard",
            Self::Sweets => "Sweets",
            Self::SweetDetail => "Sweet",
            Self::PurchaseHistory => "Purchase history",
            Self::AdminDashboard => "Admin",
            Self::AddSweet => "Add sweet",
            Self::EditSweet => "Edit sweet",
            Self::NotFound => "Not found",
        }
    }
}

/// One node of the route tree.
#[derive(Clone, Debug)]
pub enum RouteNode<P> {
    Page {
        pattern: &'static str,
        page: P,
        nav_label: Option<&'static str>,
    },
    Redirect {
        pattern: &'static str,
        to: &'static str,
    },
    Group {
        guard: Option<Guard>,
        layout: bool,
        children: Vec<RouteNode<P>>,
    },
}

pub fn page<P>(pattern: &'static str, page: P) -> RouteNode<P> {
    RouteNode::Page { pattern, page, nav_label: None }
}

/// A page that also appears in the layout navigation.
pub fn nav_page<P>(pattern: &'static str, page: P, label: &'static str) -> RouteNode<P> {
    RouteNode::Page { pattern, page, nav_label: Some(label) }
}

pub fn redirect<P>(pattern: &'static str, to: &'static str) -> RouteNode<P> {
    RouteNode::Redirect { pattern, to }
}

pub fn guarded<P>(guard: Guard, children: Vec<RouteNode<P>>) -> RouteNode<P> {
    RouteNode::Group { guard: Some(guard), layout: false, children }
}

pub fn with_layout<P>(children: Vec<RouteNode<P>>) -> RouteNode<P> {
    RouteNode::Group { guard: None, layout: true, children }
}

/// Named path parameters captured from `:name` segments.
#[cfg(test)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Params(Vec<(&'static str, String)>);

#[cfg(test)]
impl Params {
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a resolved navigation renders.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Rendered<P> {
    pub page: P,
    /// Path finally displayed, after any redirects.
    pub path: String,
    pub params: Params,
    /// Whether the page sits inside the layout shell.
    pub layout: bool,
    /// Redirect targets followed, in order.
    pub redirects: Vec<&'static str>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Outcome<P> {
    /// Auth state is still resolving; nothing was evaluated.
    Loading,
    Render(Rendered<P>),
}

/// A link shown in the layout navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[cfg(test)]
#[derive(Clone, Copy)]
enum Target<P> {
    Page(P),
    Redirect(&'static str),
}

#[cfg(test)]
struct Match<P> {
    guards: Vec<Guard>,
    layout: bool,
    target: Target<P>,
    params: Params,
}

#[cfg(test)]
enum Step<P> {
    Done(Rendered<P>),
    Follow(&'static str),
}

#[derive(Clone, Debug)]
pub struct RouteTree<P> {
    nodes: Vec<RouteNode<P>>,
    #[cfg_attr(not(test), allow(dead_code))]
    not_found: P,
}

impl<P: Copy> RouteTree<P> {
    /// `not_found` renders, unguarded, for any path no node matches.
    pub fn new(nodes: Vec<RouteNode<P>>, not_found: P) -> Self {
        Self { nodes, not_found }
    }

    /// Resolve a navigation to `path` under `snapshot`.
    ///
    /// Returns [`Outcome::Loading`] without evaluating any node while the
    /// snapshot is still loading.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::RedirectLoop`] when more than
    /// [`MAX_REDIRECTS`] redirects are chained.
    #[cfg(test)]
    pub(crate) fn resolve(&self, path: &str, snapshot: &AuthSnapshot) -> Result<Outcome<P>, RouteError> {
        if loading_gate(snapshot) == Gate::Loading {
            return Ok(Outcome::Loading);
        }

        let mut current = normalize_path(path);
        let mut redirects = Vec::new();
        loop {
            match self.step(&current, snapshot) {
                Step::Done(mut rendered) => {
                    rendered.redirects = redirects;
                    return Ok(Outcome::Render(rendered));
                }
                Step::Follow(to) => {
                    if redirects.len() == MAX_REDIRECTS {
                        return Err(RouteError::RedirectLoop { path: current, hops: redirects.len() });
                    }
                    redirects.push(to);
                    current = normalize_path(to);
                }
            }
        }
    }

    /// Links whose page is reachable under `snapshot`, in declaration order.
    #[must_use]
    pub fn nav_links(&self, snapshot: &AuthSnapshot) -> Vec<NavLink> {
        let mut out = Vec::new();
        collect_nav(&self.nodes, snapshot, &mut out);
        out
    }

    /// Path patterns of every page and redirect, in declaration order.
    #[must_use]
    pub fn patterns(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        collect_patterns(&self.nodes, &mut out);
        out
    }

    #[cfg(test)]
    fn step(&self, path: &str, snapshot: &AuthSnapshot) -> Step<P> {
        let Some(found) = find(&self.nodes, path, &mut Vec::new(), false) else {
            return Step::Done(Rendered {
                page: self.not_found,
                path: path.to_owned(),
                params: Params::default(),
                layout: false,
                redirects: Vec::new(),
            });
        };

        for guard in &found.guards {
            if let GuardDecision::Redirect(to) = guard.check(snapshot) {
                return Step::Follow(to);
            }
        }

        match found.target {
            Target::Page(page) => Step::Done(Rendered {
                page,
                path: path.to_owned(),
                params: found.params,
                layout: found.layout,
                redirects: Vec::new(),
            }),
            Target::Redirect(to) => Step::Follow(to),
        }
    }
}

#[cfg(test)]
fn find<P: Copy>(nodes: &[RouteNode<P>], path: &str, guards: &mut Vec<Guard>, layout: bool) -> Option<Match<P>> {
    for node in nodes {
        match node {
            RouteNode::Page { pattern, page, .. } => {
                if let Some(params) = match_pattern(*pattern, path) {
                    return Some(Match { guards: guards.clone(), layout, target: Target::Page(*page), params });
                }
            }
            RouteNode::Redirect { pattern, to } => {
                if let Some(params) = match_pattern(*pattern, path) {
                    return Some(Match { guards: guards.clone(), layout, target: Target::Redirect(*to), params });
                }
            }
            RouteNode::Group { guard, layout: shell, children } => {
                if let Some(g) = guard {
                    guards.push(*g);
                }
                let found = find(children, path, guards, layout || *shell);
                if guard.is_some() {
                    guards.pop();
                }
                if found.is_some() {
                    return found;
                }
            }
        }
    }
    None
}

fn collect_patterns<P>(nodes: &[RouteNode<P>], out: &mut Vec<&'static str>) {
    for node in nodes {
        match node {
            RouteNode::Page { pattern, .. } | RouteNode::Redirect { pattern, .. } => out.push(*pattern),
            RouteNode::Group { children, .. } => collect_patterns(children, out),
        }
    }
}

fn collect_nav<P>(nodes: &[RouteNode<P>], snapshot: &AuthSnapshot, out: &mut Vec<NavLink>) {
    for node in nodes {
        match node {
            RouteNode::Page { pattern, nav_label: Some(label), .. } => {
                out.push(NavLink { label: *label, href: *pattern });
            }
            RouteNode::Group { guard, children, .. } => {
                let allowed = guard.map_or(true, |g| g.check(snapshot) == GuardDecision::Render);
                if allowed {
                    collect_nav(children, snapshot, out);
                }
            }
            RouteNode::Page { .. } | RouteNode::Redirect { .. } => {}
        }
    }
}

/// Strip query and fragment, collapse empty segments, and drop any trailing
/// slash. The root stays `/`.
#[cfg(test)]
pub(crate) fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Match `path` against a pattern such as `/sweets/:id`. Segment counts must
/// be equal; `:name` segments capture any non-empty value.
#[cfg(test)]
pub(crate) fn match_pattern(pattern: &'static str, path: &str) -> Option<Params> {
    let pat: Vec<&'static str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if pat.len() != segs.len() {
        return None;
    }

    let mut params = Vec::new();
    for (p, s) in pat.iter().copied().zip(segs.iter().copied()) {
        if let Some(name) = p.strip_prefix(':') {
            params.push((name, s.to_owned()));
        } else if p != s {
            return None;
        }
    }
    Some(Params(params))
}

static APP_ROUTES: LazyLock<RouteTree<Page>> = LazyLock::new(|| {
    RouteTree::new(
        vec![
            page(paths::LOGIN, Page::Login),
            page(paths::REGISTER, Page::Register),
            guarded(
                Guard::Authenticated,
                vec![with_layout(vec![
                    redirect(paths::ROOT, paths::DASHBOARD),
                    nav_page(paths::DASHBOARD, Page::Dashboard, "Dashboard"),
                    nav_page(paths::SWEETS, Page::Sweets, "Sweets"),
                    page(paths::SWEET_DETAIL, Page::SweetDetail),
                    nav_page(paths::HISTORY, Page::PurchaseHistory, "History"),
                    guarded(
                        Guard::Admin,
                        vec![
                            nav_page(paths::ADMIN, Page::AdminDashboard, "Admin"),
                            page(paths::ADMIN_SWEET_NEW, Page::AddSweet),
                            page(paths::ADMIN_SWEET_EDIT, Page::EditSweet),
                        ],
                    ),
                ])],
            ),
        ],
        Page::NotFound,
    )
});

/// The application's route tree.
#[must_use]
pub fn app_routes() -> &'static RouteTree<Page> {
    &APP_ROUTES
}
