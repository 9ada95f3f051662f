//! File-level expansion host.
//!
//! Walks a parsed file and dispatches registered attribute macros:
//! extension-role macros on top-level declarations produce generated
//! declarations anchored after them; peer-role markers anywhere are invoked
//! and produce nothing. Every expanded attribute is recorded as consumed so
//! a printer can drop it from the output.

use equate_diagnostic::DiagnosticSink;
use equate_ir::{Declaration, GeneratedDeclaration, SourceFile, Span};

use crate::{ExclusionConfig, MacroRegistry, MacroRole};

/// Generated output for one top-level declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationExpansion {
    /// Span of the declaration the output follows.
    pub anchor: Span,
    pub generated: Vec<GeneratedDeclaration>,
}

/// Everything expansion produced for one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileExpansion {
    /// In source order of their anchors.
    pub expansions: Vec<DeclarationExpansion>,
    /// Spans of the macro attributes that were expanded, in source order.
    pub consumed_attributes: Vec<Span>,
}

impl FileExpansion {
    /// All generated declarations in output order.
    pub fn generated(&self) -> impl Iterator<Item = &GeneratedDeclaration> {
        self.expansions.iter().flat_map(|e| e.generated.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty() && self.consumed_attributes.is_empty()
    }
}

/// Expand every registered macro attribute in `file`.
#[tracing::instrument(level = "debug", skip_all, fields(decls = file.declarations.len()))]
pub fn expand_file(
    file: &SourceFile,
    registry: &MacroRegistry,
    config: &ExclusionConfig,
    sink: &mut dyn DiagnosticSink,
) -> FileExpansion {
    let mut out = FileExpansion::default();
    for decl in &file.declarations {
        expand_declaration(decl, true, registry, config, sink, &mut out);
    }
    out.consumed_attributes.sort_by_key(|span| span.start);
    out
}

fn expand_declaration(
    decl: &Declaration,
    top_level: bool,
    registry: &MacroRegistry,
    config: &ExclusionConfig,
    sink: &mut dyn DiagnosticSink,
    out: &mut FileExpansion,
) {
    let mut generated = Vec::new();
    for attribute in &decl.attributes {
        let Some(definition) = registry.get(&attribute.name) else {
            continue;
        };
        match definition.role() {
            MacroRole::Extension if !top_level => {
                tracing::debug!(
                    attribute = %attribute.name,
                    decl = decl.name.as_deref().unwrap_or("<unnamed>"),
                    "extension macro on a nested declaration is not expanded"
                );
                continue;
            }
            MacroRole::Extension | MacroRole::Peer => {
                generated.extend(definition.expand(decl, config, sink));
            }
        }
        out.consumed_attributes.push(attribute.span);
    }
    if !generated.is_empty() {
        out.expansions.push(DeclarationExpansion {
            anchor: decl.span,
            generated,
        });
    }

    for member in decl.members.iter().flatten() {
        expand_declaration(member, false, registry, config, sink, out);
    }
}

#[cfg(test)]
mod tests;
