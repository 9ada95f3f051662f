//! Macro registry for looking up expanders by attribute name.

use equate_diagnostic::DiagnosticSink;
use equate_ir::{Declaration, GeneratedDeclaration};
use rustc_hash::FxHashMap;

use crate::{expand_equatable, ExclusionConfig};

/// Where a macro's output goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MacroRole {
    /// Output is placed after the attached top-level declaration.
    Extension,
    /// Attached to a member; output would sit next to it.
    Peer,
}

/// An attribute macro the expansion host can invoke.
///
/// Implementations are stateless; the registry hands out `'static`
/// references so one instance serves every thread.
pub trait MacroDefinition: Send + Sync {
    /// The canonical attribute name.
    fn name(&self) -> &'static str;

    fn role(&self) -> MacroRole;

    fn expand(
        &self,
        decl: &Declaration,
        config: &ExclusionConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<GeneratedDeclaration>;
}

/// `@Equatable`: synthesizes the conformance extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct EquatableMacro;

impl MacroDefinition for EquatableMacro {
    fn name(&self) -> &'static str {
        "Equatable"
    }

    fn role(&self) -> MacroRole {
        MacroRole::Extension
    }

    fn expand(
        &self,
        decl: &Declaration,
        config: &ExclusionConfig,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<GeneratedDeclaration> {
        expand_equatable(decl, config, sink).into_iter().collect()
    }
}

/// `@SkipEquatable`: a pure marker read by the classifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipEquatableMacro;

impl MacroDefinition for SkipEquatableMacro {
    fn name(&self) -> &'static str {
        "SkipEquatable"
    }

    fn role(&self) -> MacroRole {
        MacroRole::Peer
    }

    fn expand(
        &self,
        _decl: &Declaration,
        _config: &ExclusionConfig,
        _sink: &mut dyn DiagnosticSink,
    ) -> Vec<GeneratedDeclaration> {
        Vec::new()
    }
}

// Static instances for 'static lifetime references
static EQUATABLE: EquatableMacro = EquatableMacro;
static SKIP_EQUATABLE: SkipEquatableMacro = SkipEquatableMacro;

/// Registry mapping attribute names to macro definitions.
///
/// Names are matched by exact text. Aliases point at the same static
/// definition as their target.
#[derive(Clone)]
pub struct MacroRegistry {
    macros: FxHashMap<String, &'static dyn MacroDefinition>,
}

impl MacroRegistry {
    /// Create a registry with `Equatable` and `SkipEquatable` registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(&EQUATABLE);
        registry.register(&SKIP_EQUATABLE);
        registry
    }

    /// Create a registry with nothing registered.
    pub fn empty() -> Self {
        MacroRegistry {
            macros: FxHashMap::default(),
        }
    }

    /// Register `definition` under its canonical name.
    pub fn register(&mut self, definition: &'static dyn MacroDefinition) {
        self.macros.insert(definition.name().to_string(), definition);
    }

    /// Make `alias` expand like the built-in macro named `target`.
    ///
    /// Returns `false` if `target` is not a built-in macro name.
    pub fn alias(&mut self, alias: impl Into<String>, target: &str) -> bool {
        let Some(definition) = builtin(target) else {
            return false;
        };
        self.macros.insert(alias.into(), definition);
        true
    }

    pub fn get(&self, name: &str) -> Option<&'static dyn MacroDefinition> {
        self.macros.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.macros.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }
}

impl Default for MacroRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MacroRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroRegistry")
            .field("names", &self.names())
            .finish()
    }
}

fn builtin(name: &str) -> Option<&'static dyn MacroDefinition> {
    match name {
        "Equatable" => Some(&EQUATABLE),
        "SkipEquatable" => Some(&SKIP_EQUATABLE),
        _ => None,
    }
}
