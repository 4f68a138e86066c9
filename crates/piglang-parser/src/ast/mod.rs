//! Abstract syntax tree for piglang.
//!
//! The tree is a forest of value-typed nodes, built once by the parser and
//! never mutated afterward: a `Program` owns its top-level statements, and
//! every composite node exclusively owns its children. There are no cycles
//! and no shared sub-trees.
//!
//! Every node keeps the [`Token`] that introduced it, for `token_literal()`
//! and for the canonical re-printing every node implements via `Display`
//! (see each module's `to_string()`-compatible contract).

pub(crate) mod expr;
mod program;
pub(crate) mod stmt;

pub use expr::Expr;
pub use program::Program;
pub use stmt::{Block, Stmt};

use piglang_lex::Token;

/// Anything that carries the token which introduced it.
pub trait Node {
    /// The literal text of the token that introduced this node.
    fn token_literal(&self) -> &str;
}

impl Node for Token {
    fn token_literal(&self) -> &str {
        &self.literal
    }
}
