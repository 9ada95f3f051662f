//! Member classification.
//!
//! Rules run in a fixed order and the first match excludes the member:
//!
//! 1. type-scoped (`static`/`class`) members
//! 2. members carrying a wrapper attribute
//! 3. members carrying the skip marker
//! 4. bindings without a simple name (reported as a warning)
//! 5. the role member (`body`) of a type inheriting the view marker
//!
//! Everything else is included, in source order.

use std::fmt;

use equate_diagnostic::DiagnosticSink;
use equate_ir::{Member, TypeDeclaration};

use crate::{ExclusionConfig, ExpandError};

/// Why a member was left out of the comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExclusionReason {
    Static,
    /// Carries the named wrapper attribute.
    Wrapper(String),
    SkipMarker,
    ViewBody,
    MalformedBinding,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::Static => f.write_str("type-scoped member"),
            ExclusionReason::Wrapper(name) => write!(f, "`@{name}` wrapper"),
            ExclusionReason::SkipMarker => f.write_str("explicit skip marker"),
            ExclusionReason::ViewBody => f.write_str("view body"),
            ExclusionReason::MalformedBinding => f.write_str("binding has no simple name"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Exclusion {
    pub member: Member,
    pub reason: ExclusionReason,
}

/// Partition of a record's members.
///
/// Every member of the record appears exactly once across `included` and
/// `excluded`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassificationResult {
    /// Compared members, in source order.
    pub included: Vec<Member>,
    pub excluded: Vec<Exclusion>,
}

impl ClassificationResult {
    pub fn included_names(&self) -> Vec<&str> {
        self.included.iter().filter_map(Member::name).collect()
    }

    /// The reason `name` was excluded, if it was.
    pub fn exclusion_of(&self, name: &str) -> Option<&ExclusionReason> {
        self.excluded
            .iter()
            .find(|exclusion| exclusion.member.name() == Some(name))
            .map(|exclusion| &exclusion.reason)
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }
}

/// Partition `record`'s members into compared and excluded ones.
///
/// Malformed bindings are reported to `sink` as warnings; nothing else is.
pub fn classify(
    record: &TypeDeclaration,
    config: &ExclusionConfig,
    sink: &mut dyn DiagnosticSink,
) -> ClassificationResult {
    let has_view_role = config
        .view_marker()
        .is_some_and(|marker| record.inherits(marker));

    let mut result = ClassificationResult::default();
    for member in &record.members {
        match exclusion_reason(member, config, has_view_role) {
            None => result.included.push(member.clone()),
            Some(reason) => {
                if reason == ExclusionReason::MalformedBinding {
                    let error = ExpandError::MalformedMemberBinding {
                        binding: member.binding.to_string(),
                        span: member.span,
                    };
                    sink.report(error.to_diagnostic());
                }
                tracing::trace!(
                    record = %record.name,
                    member = %member.binding,
                    %reason,
                    "member excluded"
                );
                result.excluded.push(Exclusion {
                    member: member.clone(),
                    reason,
                });
            }
        }
    }
    result
}

fn exclusion_reason(
    member: &Member,
    config: &ExclusionConfig,
    has_view_role: bool,
) -> Option<ExclusionReason> {
    if member.is_static {
        return Some(ExclusionReason::Static);
    }
    if let Some(wrapper) = member
        .attributes
        .iter()
        .find(|name| config.is_wrapper_attribute(name))
    {
        return Some(ExclusionReason::Wrapper(wrapper.clone()));
    }
    if member.has_attribute(config.skip_marker()) {
        return Some(ExclusionReason::SkipMarker);
    }
    let Some(name) = member.name() else {
        return Some(ExclusionReason::MalformedBinding);
    };
    if has_view_role && name == config.role_member() {
        return Some(ExclusionReason::ViewBody);
    }
    None
}
