//! XML-like tag serialization
//!
//! Serializes an expression tree to an XML-like format that mirrors its structure.
//!
//! ## Format
//!
//! - Node type → tag name
//! - Label (value or operator symbol) → text content
//! - Operands → nested in a `<children>` tag
//!
//! ## Example
//!
//! ```text
//! <expression>
//!   <add>+<children>
//!     <literal>3</literal>
//!     <mul>*<children>
//!       <literal>2</literal>
//!       <literal>4</literal>
//!     </children></mul>
//!   </children></add>
//! </expression>
//! ```

use crate::munch::ast::{AstNode, Expr};

/// Serialize an expression to tag format
pub fn serialize_expr(expr: &Expr) -> String {
    let mut result = String::new();
    result.push_str("<expression>\n");
    serialize_node(expr, 1, &mut result);
    result.push_str("</expression>");
    result
}

fn serialize_node(node: &Expr, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    let tag = node.node_type();
    let label = escape_xml(&node.display_label());
    let children = node.children();

    if children.is_empty() {
        output.push_str(&format!("{}<{}>{}</{}>\n", indent, tag, label, tag));
        return;
    }

    output.push_str(&format!("{}<{}>{}<children>\n", indent, tag, label));
    for child in children {
        serialize_node(child, indent_level + 1, output);
    }
    output.push_str(&format!("{}</children></{}>\n", indent, tag));
}

/// Escape XML special characters
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
