//! AST definitions and utilities
//!
//! ## Modules
//!
//! - `expr` - The expression tree built by the parser
//! - `traits` - Uniform node access used by the serializers
//! - `position` - Source positions and byte offset conversion

pub mod expr;
pub mod position;
pub mod traits;

pub use expr::{BinaryOp, Expr};
pub use position::{Position, SourceLocation};
pub use traits::AstNode;
