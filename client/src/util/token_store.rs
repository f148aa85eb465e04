//! Browser `localStorage` persistence for the session bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth provider reads the token once at start-up to restore a session
//! and writes/clears it on login and logout. Outside the browser every read
//! yields `None` and writes are no-ops.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "sweetshop_token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Trim a raw stored value; blank values count as no token.
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Log a failed storage write; returns whether it succeeded.
#[cfg(any(test, feature = "hydrate"))]
fn check_write<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("could not {action} session token: {e:?}");
            false
        }
    }
}

/// Read the stored token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        normalize(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token`. Blank tokens clear the entry instead.
pub fn save(token: &str) {
    let Some(token) = normalize(token) else {
        clear();
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            check_write("persist", storage.set_item(STORAGE_KEY, &token));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            check_write("clear", storage.remove_item(STORAGE_KEY));
        }
    }
}
