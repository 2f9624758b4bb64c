//! Treeviz formatter for expression trees
//!
//! One line per node, connected with box-drawing characters:
//!
//! ```text
//! └─ add: +
//!   ├─ literal: 3
//!   └─ mul: *
//!     ├─ literal: 2
//!     └─ literal: 4
//! ```

use crate::munch::ast::{AstNode, Expr};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Render `expr`, cutting labels longer than `max_label_chars`
pub fn to_treeviz_str(expr: &Expr, max_label_chars: usize) -> String {
    let mut result = String::new();
    append_node(&mut result, expr, "", true, max_label_chars);
    result
}

fn append_node(result: &mut String, node: &Expr, prefix: &str, is_last: bool, max_chars: usize) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), max_chars);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        display_label
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, &new_prefix, is_last, max_chars);
    }
}
