//! # chav
//!
//! Lexer and parser for chav, a small C-like teaching language.
//!
//! File Layout
//!
//!     The pipeline runs in two stages, each living in its own module:
//!
//!     src/chav
//!       ├── token      Token kinds and the token value type
//!       ├── lexing     Source text to token stream (ordered pattern table)
//!       ├── parsing    Token stream to AST (location stack + grammar productions)
//!       ├── ast        Arena-backed syntax tree, integrity check and snapshots
//!       ├── formats    Renderers for token streams and trees
//!       └── testing    Fluent assertions over parsed programs
//!
//!     The lexer knows nothing about the grammar, and the parser never looks at
//!     characters: it only sees sequences of token kinds.
//!
//! For testing guidelines, see the [testing module](chav::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod chav;

pub use chav::{process, ChavError};
