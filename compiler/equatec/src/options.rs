//! `expand`/`check` options.
//!
//! Parsed by hand from `--flag=value` arguments, like the rest of the
//! driver's command line.

use equate_diagnostic::emitter::ColorMode;
use equate_expand::{ExclusionConfig, MacroRegistry};

/// What `expand` prints for each file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmitMode {
    /// The whole file with extensions inserted.
    #[default]
    Source,
    /// Only the generated extensions.
    Extensions,
}

impl EmitMode {
    pub fn parse(s: &str) -> Option<EmitMode> {
        match s {
            "source" => Some(EmitMode::Source),
            "extensions" => Some(EmitMode::Extensions),
            _ => None,
        }
    }
}

/// Everything an expansion run needs besides the files.
#[derive(Clone, Debug)]
pub struct ExpandOptions {
    pub emit: EmitMode,
    pub color: ColorMode,
    /// Expand files on the rayon pool.
    pub parallel: bool,
    pub config: ExclusionConfig,
    pub registry: MacroRegistry,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        ExpandOptions {
            emit: EmitMode::default(),
            color: ColorMode::default(),
            parallel: true,
            config: ExclusionConfig::default(),
            registry: MacroRegistry::new(),
        }
    }
}

/// Split `args` into options and file paths.
///
/// # Errors
///
/// A message naming the first unknown flag or invalid value.
pub fn parse_expand_options(args: &[String]) -> Result<(ExpandOptions, Vec<String>), String> {
    let mut options = ExpandOptions::default();
    let mut files = Vec::new();

    for arg in args {
        if let Some(mode) = arg.strip_prefix("--emit=") {
            options.emit = EmitMode::parse(mode)
                .ok_or_else(|| format!("invalid --emit value '{mode}' (expected source or extensions)"))?;
        } else if let Some(color) = arg.strip_prefix("--color=") {
            options.color = match color {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => return Err(format!("invalid --color value '{color}' (expected auto, always, or never)")),
            };
        } else if let Some(name) = arg.strip_prefix("--wrapper=") {
            options.config = options.config.with_wrapper_attribute(non_empty("--wrapper", name)?);
        } else if arg == "--no-default-wrappers" {
            options.config = options.config.without_wrapper_attributes();
        } else if let Some(name) = arg.strip_prefix("--skip-marker=") {
            options.config = options.config.with_skip_marker(non_empty("--skip-marker", name)?);
        } else if let Some(name) = arg.strip_prefix("--view-marker=") {
            options.config = options.config.with_view_marker(non_empty("--view-marker", name)?);
        } else if arg == "--no-view-marker" {
            options.config = options.config.without_view_marker();
        } else if let Some(name) = arg.strip_prefix("--alias=") {
            options.registry.alias(non_empty("--alias", name)?, "Equatable");
        } else if arg == "--no-parallel" {
            options.parallel = false;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            files.push(arg.clone());
        }
    }
    Ok((options, files))
}

fn non_empty<'a>(flag: &str, value: &'a str) -> Result<&'a str, String> {
    if value.is_empty() {
        Err(format!("{flag} needs a name"))
    } else {
        Ok(value)
    }
}
