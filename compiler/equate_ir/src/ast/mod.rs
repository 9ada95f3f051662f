//! Host-neutral declaration model.
//!
//! Both hosts build these values: the source parser from declaration text,
//! and the proc-macro host from `syn` items. The expansion engine only ever
//! sees this model, never host syntax.

use std::fmt;

use crate::Span;

/// Explicit access level written on a declaration.
///
/// The absence of a modifier is `Option::None` at use sites, never a
/// variant here, so "default" can't be confused with an explicit level.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Visibility {
    Public,
    Package,
    Internal,
    FilePrivate,
    Private,
}

impl Visibility {
    /// Access levels in the order they are checked when more than one is
    /// written on the same declaration.
    pub const PRECEDENCE: [Visibility; 5] = [
        Visibility::Public,
        Visibility::Package,
        Visibility::Internal,
        Visibility::FilePrivate,
        Visibility::Private,
    ];

    /// Parse an access-level keyword.
    pub fn from_keyword(s: &str) -> Option<Visibility> {
        match s {
            "public" => Some(Visibility::Public),
            "package" => Some(Visibility::Package),
            "internal" => Some(Visibility::Internal),
            "fileprivate" => Some(Visibility::FilePrivate),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// The keyword as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Package => "package",
            Visibility::Internal => "internal",
            Visibility::FilePrivate => "fileprivate",
            Visibility::Private => "private",
        }
    }

    /// Pick the highest-precedence level among `levels`.
    pub fn strongest(levels: impl IntoIterator<Item = Visibility>) -> Option<Visibility> {
        levels.into_iter().min()
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute attached to a declaration: `@State`, `@Environment(\.x)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    /// Attribute name exactly as written, dotted paths included (`SwiftUI.State`).
    pub name: String,
    /// Raw argument text between the parentheses, if any.
    pub arguments: Option<String>,
    /// Span of the whole attribute, `@` through the closing parenthesis.
    pub span: Span,
}

impl Attribute {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Attribute {
            name: name.into(),
            arguments: None,
            span,
        }
    }

    #[must_use]
    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }
}

/// Declaration modifier kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ModifierKind {
    /// `public`, `private`, ...
    Access(Visibility),
    /// Setter-only access such as `private(set)`; does not change the
    /// declaration's own access level.
    SetterAccess(Visibility),
    /// `static`
    Static,
    /// `class` used as a modifier (`class var`, `class func`).
    Class,
    /// Any other contextual modifier (`final`, `lazy`, `mutating`, ...).
    Other(String),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub span: Span,
}

impl Modifier {
    pub fn new(kind: ModifierKind, span: Span) -> Self {
        Modifier { kind, span }
    }

    /// Whether this modifier places a member at type scope.
    pub fn is_type_scope(&self) -> bool {
        matches!(self.kind, ModifierKind::Static | ModifierKind::Class)
    }

    /// The declaration's own access level, if this modifier sets one.
    pub fn access(&self) -> Option<Visibility> {
        match self.kind {
            ModifierKind::Access(vis) => Some(vis),
            _ => None,
        }
    }
}

/// `let` or `var`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Introducer {
    Let,
    Var,
}

impl Introducer {
    pub fn as_str(self) -> &'static str {
        match self {
            Introducer::Let => "let",
            Introducer::Var => "var",
        }
    }
}

/// The pattern on the left of a property binding.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindingPattern {
    /// A plain name: `let title`.
    Identifier(String),
    /// `let _ = ...`
    Wildcard,
    /// `let (x, y) = ...`
    Tuple(Vec<BindingPattern>),
    /// An unnamed positional field (Rust tuple structs).
    Positional(usize),
}

impl BindingPattern {
    /// The simple identifier, if the pattern is one.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            BindingPattern::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for BindingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingPattern::Identifier(name) => f.write_str(name),
            BindingPattern::Wildcard => f.write_str("_"),
            BindingPattern::Positional(index) => write!(f, "{index}"),
            BindingPattern::Tuple(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// One `pattern: Type = initializer { accessors }` entry of a property declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PatternBinding {
    pub pattern: BindingPattern,
    /// Type annotation text, trimmed.
    pub ty: Option<String>,
    pub has_initializer: bool,
    /// Whether an accessor block (computed body or observers) follows.
    pub has_accessors: bool,
    pub span: Span,
}

impl PatternBinding {
    pub fn new(pattern: BindingPattern, span: Span) -> Self {
        PatternBinding {
            pattern,
            ty: None,
            has_initializer: false,
            has_accessors: false,
            span,
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }
}

/// A property declaration: `let a: Int`, `var x = 1, y = 2`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VariableDecl {
    pub introducer: Introducer,
    pub bindings: Vec<PatternBinding>,
}

/// What kind of declaration a `Declaration` is.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    Struct,
    Class,
    Enum,
    Protocol,
    Actor,
    Extension,
    Function,
    Initializer,
    Deinitializer,
    Subscript,
    Variable(VariableDecl),
    EnumCase,
    TypeAlias,
    AssociatedType,
    Import,
    Operator,
    /// A declaration kind the host recognises but this model doesn't
    /// distinguish (Rust unions, macros, ...).
    Other(String),
}

impl DeclKind {
    /// Short keyword-like description used in diagnostics.
    pub fn describe(&self) -> &str {
        match self {
            DeclKind::Struct => "struct",
            DeclKind::Class => "class",
            DeclKind::Enum => "enum",
            DeclKind::Protocol => "protocol",
            DeclKind::Actor => "actor",
            DeclKind::Extension => "extension",
            DeclKind::Function => "function",
            DeclKind::Initializer => "initializer",
            DeclKind::Deinitializer => "deinitializer",
            DeclKind::Subscript => "subscript",
            DeclKind::Variable(_) => "variable",
            DeclKind::EnumCase => "enum case",
            DeclKind::TypeAlias => "typealias",
            DeclKind::AssociatedType => "associatedtype",
            DeclKind::Import => "import",
            DeclKind::Operator => "operator",
            DeclKind::Other(name) => name,
        }
    }
}

/// One declaration with everything attached to it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Declaration {
    pub kind: DeclKind,
    /// Declared name. `None` for properties (names live in the bindings);
    /// the extended type for extensions; `==` for operator functions.
    pub name: Option<String>,
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<Modifier>,
    /// Inheritance clause entries, trimmed (`View`, `Sendable`, `Foo<Bar>`).
    pub inherited: Vec<String>,
    /// Member block, `None` when the declaration has none.
    pub members: Option<Vec<Declaration>>,
    /// Span from the first attribute to the end of the declaration.
    pub span: Span,
}

impl Declaration {
    pub fn new(kind: DeclKind, span: Span) -> Self {
        Declaration {
            kind,
            name: None,
            attributes: Vec::new(),
            modifiers: Vec::new(),
            inherited: Vec::new(),
            members: None,
            span,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn with_inherited(mut self, ty: impl Into<String>) -> Self {
        self.inherited.push(ty.into());
        self
    }

    #[must_use]
    pub fn with_members(mut self, members: Vec<Declaration>) -> Self {
        self.members = Some(members);
        self
    }

    /// Whether any attribute has exactly this name.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Whether the declaration is `static` or `class`-scoped.
    pub fn is_type_scope(&self) -> bool {
        self.modifiers.iter().any(Modifier::is_type_scope)
    }

    /// The declaration's explicit access level, highest precedence first.
    pub fn visibility(&self) -> Option<Visibility> {
        Visibility::strongest(self.modifiers.iter().filter_map(Modifier::access))
    }

    /// The property payload, if this is a property declaration.
    pub fn as_variable(&self) -> Option<&VariableDecl> {
        match &self.kind {
            DeclKind::Variable(var) => Some(var),
            _ => None,
        }
    }
}

/// A parsed source file: its top-level declarations in order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceFile {
    pub declarations: Vec<Declaration>,
}
