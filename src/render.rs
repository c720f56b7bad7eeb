//! Outline rendering
//!
//! This module converts the scanned tree into the final `toc.md` text.
//! Heading marker runs mirror directory depth; each document's extracted
//! headers follow as indented bullets. Output depends only on the tree, so
//! reruns over an unchanged tree are byte-identical.

use crate::scan::TreeNode;

/// Render the ordered top-level nodes into a single outline document.
pub fn render_outline(nodes: &[TreeNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, &mut out);
    }
    out
}

fn render_node(node: &TreeNode, out: &mut String) {
    match node {
        TreeNode::Dir {
            name,
            depth,
            children,
            ..
        } => {
            out.push_str(&"#".repeat(depth + 1));
            out.push_str(" 📁 ");
            out.push_str(name);
            out.push('\n');
            for child in children {
                render_node(child, out);
            }
        }
        TreeNode::Doc {
            name,
            rel_path,
            depth,
            headers,
        } => {
            out.push_str(&"#".repeat(depth + 1));
            out.push_str(" 📄 [");
            out.push_str(name);
            out.push_str("](");
            out.push_str(rel_path);
            out.push_str(")\n");

            // Indentation follows the header's own level only; directory
            // depth does not contribute
            for header in headers {
                out.push_str(&"  ".repeat(header.level));
                out.push_str("- ");
                out.push_str(&header.title);
                out.push('\n');
            }
        }
    }
}
