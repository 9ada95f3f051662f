//! Source-to-source expansion pipeline.

use equate_diagnostic::{Diagnostic, DiagnosticSink};
use equate_expand::{expand_file, ExclusionConfig, ExpandError, FileExpansion, MacroRegistry};
use equate_fmt::{print_extensions, print_generated, splice};
use equate_ir::{DeclKind, GeneratedDeclaration, Span};
use rayon::prelude::*;

use crate::ExpandOptions;

/// The result of expanding one source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceExpansion {
    /// The expanded source. The original text when nothing was expanded.
    pub output: String,
    /// Only the generated extensions, blank-line separated.
    pub extensions: String,
    /// Lexer, parser, and expansion diagnostics, in that order.
    pub diagnostics: Vec<Diagnostic>,
    pub expansion: FileExpansion,
}

impl SourceExpansion {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Whether lexer or parser errors kept the file from being expanded.
    pub fn failed_to_parse(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.code.is_lexer_error() || d.code.is_parser_error())
    }

    pub fn generated_count(&self) -> usize {
        self.expansion.generated().count()
    }
}

/// Lex, parse, expand, and splice one source text.
///
/// Lexer or parser errors stop the pipeline before expansion: the output is
/// the unchanged source. Generated declarations that don't survive the
/// round-trip check are dropped with an E9001 error.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn expand_source(
    source: &str,
    registry: &MacroRegistry,
    config: &ExclusionConfig,
) -> SourceExpansion {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let lexed = equate_lexer::lex(source);
    diagnostics.extend(lexed.errors.iter().map(|e| e.to_diagnostic()));
    let parsed = equate_parse::parse(source, &lexed.tokens);
    diagnostics.extend(parsed.errors.iter().map(|e| e.to_diagnostic()));
    if !diagnostics.is_empty() {
        tracing::debug!(errors = diagnostics.len(), "front-end errors; not expanding");
        return SourceExpansion {
            output: source.to_string(),
            diagnostics,
            ..SourceExpansion::default()
        };
    }

    let mut expansion = expand_file(&parsed.file, registry, config, &mut diagnostics);
    for expanded in &mut expansion.expansions {
        let anchor = expanded.anchor;
        expanded
            .generated
            .retain(|generated| round_trips(generated, anchor, &mut diagnostics));
    }
    expansion.expansions.retain(|e| !e.generated.is_empty());

    SourceExpansion {
        output: splice(source, &expansion),
        extensions: print_extensions(&expansion),
        diagnostics,
        expansion,
    }
}

/// Re-lex and re-parse the printed declaration; it must come back as one
/// extension of the same type holding one function.
fn round_trips(
    generated: &GeneratedDeclaration,
    anchor: Span,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    let printed = print_generated(generated);
    let lexed = equate_lexer::lex(&printed);
    let parsed = equate_parse::parse(&printed, &lexed.tokens);

    let reason = if let Some(error) = lexed.errors.first() {
        Some(format!(
            "printed extension does not lex: {}",
            error.to_diagnostic().message
        ))
    } else if let Some(error) = parsed.errors.first() {
        Some(format!("printed extension does not parse: {}", error.message))
    } else {
        match parsed.file.declarations.as_slice() {
            [decl]
                if decl.kind == DeclKind::Extension
                    && decl.name.as_deref() == Some(generated.extended_type.as_str())
                    && decl.members.as_ref().is_some_and(|members| {
                        matches!(members.as_slice(), [member] if member.kind == DeclKind::Function)
                    }) =>
            {
                None
            }
            _ => Some("printed extension has an unexpected shape".to_string()),
        }
    };

    match reason {
        None => true,
        Some(reason) => {
            tracing::debug!(%reason, ty = %generated.extended_type, "round-trip failed");
            let failure = ExpandError::SynthesisAssemblyFailure {
                reason,
                span: anchor,
            };
            sink.report(failure.to_diagnostic());
            false
        }
    }
}

/// Expand each `(path, source)` pair, in parallel when `options.parallel`.
///
/// Results come back in input order.
pub fn expand_sources(sources: &[(String, String)], options: &ExpandOptions) -> Vec<SourceExpansion> {
    let expand_one = |(path, source): &(String, String)| {
        let _span = tracing::debug_span!("file", %path).entered();
        expand_source(source, &options.registry, &options.config)
    };
    if options.parallel {
        sources.par_iter().map(expand_one).collect()
    } else {
        sources.iter().map(expand_one).collect()
    }
}

#[cfg(test)]
mod tests;
