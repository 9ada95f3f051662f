//! Exclusion configuration.
//!
//! The names the classifier reacts to live here and nowhere else. The
//! defaults reproduce the SwiftUI behaviour; hosts build their own value
//! when they need different names (the Rust host, `--wrapper=NAME`).

use rustc_hash::FxHashSet;

/// Property wrappers whose state is injected and managed by the UI
/// framework rather than being part of the value.
pub const DEFAULT_WRAPPER_ATTRIBUTES: &[&str] = &[
    "State",
    "Environment",
    "ObservedObject",
    "EnvironmentObject",
    "Binding",
    "FocusState",
];

/// Attribute that opts a single member out of comparison.
pub const DEFAULT_SKIP_MARKER: &str = "SkipEquatable";

/// Inherited type that gives a record the view role.
pub const DEFAULT_VIEW_MARKER: &str = "View";

/// Member excluded from records with the view role.
pub const DEFAULT_ROLE_MEMBER: &str = "body";

/// Names that trigger the classifier's exclusion rules.
///
/// Matching is by exact name text: `SwiftUI.State` is not `State`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionConfig {
    wrapper_attributes: FxHashSet<String>,
    skip_marker: String,
    /// `None` disables the role rule entirely.
    view_marker: Option<String>,
    role_member: String,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        ExclusionConfig {
            wrapper_attributes: DEFAULT_WRAPPER_ATTRIBUTES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            skip_marker: DEFAULT_SKIP_MARKER.to_string(),
            view_marker: Some(DEFAULT_VIEW_MARKER.to_string()),
            role_member: DEFAULT_ROLE_MEMBER.to_string(),
        }
    }
}

impl ExclusionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wrapper attribute name to the closed set.
    #[must_use]
    pub fn with_wrapper_attribute(mut self, name: impl Into<String>) -> Self {
        self.wrapper_attributes.insert(name.into());
        self
    }

    /// Drop every wrapper attribute, including the defaults.
    #[must_use]
    pub fn without_wrapper_attributes(mut self) -> Self {
        self.wrapper_attributes.clear();
        self
    }

    #[must_use]
    pub fn with_skip_marker(mut self, name: impl Into<String>) -> Self {
        self.skip_marker = name.into();
        self
    }

    #[must_use]
    pub fn with_view_marker(mut self, name: impl Into<String>) -> Self {
        self.view_marker = Some(name.into());
        self
    }

    /// Disable the role rule: `body` is always an ordinary member.
    #[must_use]
    pub fn without_view_marker(mut self) -> Self {
        self.view_marker = None;
        self
    }

    #[must_use]
    pub fn with_role_member(mut self, name: impl Into<String>) -> Self {
        self.role_member = name.into();
        self
    }

    pub fn is_wrapper_attribute(&self, name: &str) -> bool {
        self.wrapper_attributes.contains(name)
    }

    /// Wrapper attribute names, sorted.
    pub fn wrapper_attributes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.wrapper_attributes.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn skip_marker(&self) -> &str {
        &self.skip_marker
    }

    pub fn view_marker(&self) -> Option<&str> {
        self.view_marker.as_deref()
    }

    pub fn role_member(&self) -> &str {
        &self.role_member
    }
}
