//! Validated record model.
//!
//! A `TypeDeclaration` is what the validator hands the classifier: a struct
//! reduced to its name, access level, inheritance list, and the flat list of
//! property bindings in source order.

use smallvec::SmallVec;

use crate::{BindingPattern, Span, Visibility};

/// One stored or computed property binding of a record type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Member {
    pub binding: BindingPattern,
    /// Declared with `static` or `class`.
    pub is_static: bool,
    /// Attribute names in source order.
    pub attributes: SmallVec<[String; 2]>,
    /// Type annotation text, when written.
    pub ty: Option<String>,
    pub span: Span,
}

impl Member {
    /// Instance property with a simple name and no attributes.
    pub fn named(name: impl Into<String>, span: Span) -> Self {
        Member {
            binding: BindingPattern::Identifier(name.into()),
            is_static: false,
            attributes: SmallVec::new(),
            ty: None,
            span,
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    #[must_use]
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// The member's name, `None` when the binding is not a simple identifier.
    pub fn name(&self) -> Option<&str> {
        self.binding.identifier()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }
}

/// A record type accepted by the validator.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDeclaration {
    /// Non-empty identifier.
    pub name: String,
    /// Explicit access level; `None` means the language default.
    pub visibility: Option<Visibility>,
    /// Inheritance clause entries in source order.
    pub inherited: Vec<String>,
    /// Property bindings in source order. Order decides comparison order.
    pub members: Vec<Member>,
    pub span: Span,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        TypeDeclaration {
            name: name.into(),
            visibility: None,
            inherited: Vec::new(),
            members: Vec::new(),
            span,
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    #[must_use]
    pub fn with_inherited(mut self, ty: impl Into<String>) -> Self {
        self.inherited.push(ty.into());
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Whether the inheritance clause names `ty` exactly.
    pub fn inherits(&self, ty: &str) -> bool {
        self.inherited.iter().any(|t| t == ty)
    }
}
