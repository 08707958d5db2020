//! Permission checks for gating views and actions.
//!
//! The computation core never consults these; the view layer is handed a
//! [`Capability`] and asks it before rendering an action.

use std::collections::BTreeSet;

/// Answers whether the current user holds a permission.
pub trait Capability {
    fn has_permission(&self, key: &str) -> bool;

    /// True when every key is granted.
    fn has_all(&self, keys: &[&str]) -> bool {
        keys.iter().all(|k| self.has_permission(k))
    }

    /// True when at least one key is granted.
    fn has_any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.has_permission(k))
    }
}

/// Wildcard key granting every permission.
pub const ALL_PERMISSIONS: &str = "*";

/// Set of granted permission keys, e.g. decoded from a session token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    granted: BTreeSet<String>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, key: impl Into<String>) -> Self {
        self.granted.insert(key.into());
        self
    }

    pub fn revoke(&mut self, key: &str) -> bool {
        self.granted.remove(key)
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Capability for PermissionSet {
    fn has_permission(&self, key: &str) -> bool {
        self.granted.contains(ALL_PERMISSIONS) || self.granted.contains(key)
    }
}

/// `true` grants everything, `false` nothing.
impl Capability for bool {
    fn has_permission(&self, _key: &str) -> bool {
        *self
    }
}

impl<F: Fn(&str) -> bool> Capability for F {
    fn has_permission(&self, key: &str) -> bool {
        self(key)
    }
}
