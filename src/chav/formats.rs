//! Output formats for token streams and program trees
//!
//!     Every tree format goes through [`AstSnapshot`](crate::chav::ast::AstSnapshot), so
//!     the formats differ only in presentation. Token formats work on the raw lexer
//!     output and never need a successful parse.
//!
//!     - `tokens-simple`: `Kind(text)` per token, one line per source line
//!     - `tokens-json`: the token list as JSON
//!     - `ast-treeviz`: one line per node with box-drawing connectors
//!     - `ast-json` / `ast-yaml`: the snapshot serialized with serde

pub mod registry;
pub mod serialized;
pub mod tokens;
pub mod treeviz;

pub use registry::{FormatError, FormatOptions, OutputFormat, Stage};
pub use serialized::{to_json, to_yaml};
pub use tokens::{tokens_to_json, tokens_to_simple_str};
pub use treeviz::{to_treeviz_str, TreevizOptions};
