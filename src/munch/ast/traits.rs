//! AST traits - Common interfaces for uniform node access

/// Common interface for all AST nodes
pub trait AstNode {
    /// Tag-style name of the node ("literal", "add", ...)
    fn node_type(&self) -> &'static str;
    /// One-line label shown by tree views
    fn display_label(&self) -> String;
    /// Child nodes in source order
    fn children(&self) -> Vec<&Self>;
}
