//! Serializers for expression trees
//!
//! Both serializers walk the tree through the [AstNode] trait, so they only see node types,
//! labels and children.
//!
//! [AstNode]: crate::munch::ast::AstNode

pub mod tag;
pub mod treeviz;

pub use tag::serialize_expr;
pub use treeviz::to_treeviz_str;
