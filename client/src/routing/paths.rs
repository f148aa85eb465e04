//! Navigation targets and route patterns.

/// Where unauthenticated navigations land.
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
/// Default authenticated landing page; also the non-admin redirect target.
pub const DASHBOARD: &str = "/dashboard";
pub const ROOT: &str = "/";

pub const SWEETS: &str = "/sweets";
pub const SWEET_DETAIL: &str = "/sweets/:id";
pub const HISTORY: &str = "/history";

pub const ADMIN: &str = "/admin";
pub const ADMIN_SWEET_NEW: &str = "/admin/sweets/new";
pub const ADMIN_SWEET_EDIT: &str = "/admin/sweets/:id/edit";

/// Concrete link to one sweet's detail page.
#[must_use]
pub fn sweet_detail(id: &str) -> String {
    format!("/sweets/{id}")
}

/// Concrete link to the admin edit form for one sweet.
#[must_use]
pub fn admin_sweet_edit(id: &str) -> String {
    format!("/admin/sweets/{id}/edit")
}
