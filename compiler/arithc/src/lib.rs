//! Parse-and-evaluate entry points.
//!
//! Composes the pipeline stages:
//!
//! ```text
//! &str --arith_lexer--> Vec<Token> --arith_parse--> ExprTree --arith_eval--> f64
//! ```
//!
//! Use [`evaluate`] for a one-shot numeric expression. Use [`compile`] to
//! keep the tree, bind variables with [`ExprTree::substitute`], and
//! evaluate later.
//!
//! Set `RUST_LOG=arith_parse=trace` (or any other crate of the pipeline)
//! after calling [`init_tracing`] to watch tokens and reductions.

mod error;

use std::sync::Once;

use tracing::instrument;

pub use arith_eval::{EvalError, Evaluate};
pub use arith_ir::{ExprTree, Node, Span, Token, TokenKind};
pub use arith_lexer::{classify_term, LexError, LexerConfig};
pub use arith_parse::ParseError;
pub use error::{Error, ErrorCode};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Only installs a subscriber when `RUST_LOG` is set. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

/// Tokenize and build a tree, with variables enabled.
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile(source: &str) -> Result<ExprTree, Error> {
    compile_with(source, LexerConfig::default())
}

/// Tokenize with `config` and build a tree.
pub fn compile_with(source: &str, config: LexerConfig) -> Result<ExprTree, Error> {
    let tokens = arith_lexer::tokenize_with(source, config)?;
    arith_parse::build(tokens).map_err(Error::from)
}

/// Tokenize, build and evaluate `source` in one go.
///
/// Any variable in `source` makes this fail with
/// [`EvalError::UnresolvedVariable`].
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let tree = compile(source)?;
    tree.evaluate().map_err(Error::from)
}
