//! JavaScript Minifier Service
//!
//! Compresses a bundle with oxc: parse, compress + mangle, then print with
//! whitespace stripped. Top-level exports keep their names, so the public
//! surface of an ES module bundle is unchanged.

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_minifier::{Minifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Error type for minification failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyError {
    pub message: String,
}

impl std::fmt::Display for MinifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for MinifyError {}

/// How the bundle source is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// ECMAScript module (`import`/`export`, strict mode)
    Module,
    /// Classic script, as UMD bundles are
    Script,
}

impl SourceKind {
    fn source_type(self) -> SourceType {
        match self {
            SourceKind::Module => SourceType::mjs(),
            SourceKind::Script => SourceType::cjs(),
        }
    }
}

/// Minify JavaScript source.
///
/// Any syntax error fails the whole file; nothing is emitted for a bundle
/// that does not parse cleanly.
pub fn minify_js(source: &str, kind: SourceKind) -> Result<String, MinifyError> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, kind.source_type()).parse();

    if let Some(first) = parsed.errors.first() {
        return Err(MinifyError {
            message: if parsed.errors.len() > 1 {
                format!("{} (and {} more errors)", first, parsed.errors.len() - 1)
            } else {
                first.to_string()
            },
        });
    }
    if parsed.panicked {
        return Err(MinifyError {
            message: "parser aborted".to_string(),
        });
    }

    let mut program = parsed.program;
    let minified = Minifier::new(MinifierOptions::default()).build(&allocator, &mut program);

    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            ..CodegenOptions::default()
        })
        .with_symbol_table(minified.symbol_table)
        .build(&program)
        .code;

    Ok(code)
}
