//! The root AST node.

use std::fmt;

use super::stmt::Stmt;
use super::Node;

/// The root of the tree: an ordered sequence of top-level statements. May
/// be empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements.first().map(Node::token_literal).unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
