//! Mermaid flowchart export.
//!
//! Node ids encode the path from the root: the root is `t`, a left child appends `l`
//! and a right child appends `r`. When a node has exactly one child, an invisible
//! sibling is emitted with a `~~~` link so the renderer keeps the child on its side.

use std::fmt::Display;

use keysort::KeyFn;

use crate::tree::{KeyedTree, Node};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DiagramStyle {
    /// Flowchart direction, e.g. `TD` or `LR`.
    pub direction: &'static str,
    /// Style applied to the blank stand-in siblings.
    pub blank_style: &'static str,
}

pub const DEFAULT_DIAGRAM_STYLE: DiagramStyle = DiagramStyle {
    direction: "TD",
    blank_style: "fill:#fff,stroke-width:0px",
};

impl Default for DiagramStyle {
    fn default() -> Self {
        DEFAULT_DIAGRAM_STYLE
    }
}

enum Step<'a, T> {
    /// Emit the left side of the node, then walk its left subtree.
    Enter(&'a Node<T>, String),
    /// Left subtree done: emit the right side and walk the right subtree.
    Leave(&'a Node<T>, String),
}

impl<T: Display, F: KeyFn<T>> KeyedTree<T, F> {
    pub fn to_mermaid(&self) -> String {
        self.to_mermaid_with(&DEFAULT_DIAGRAM_STYLE)
    }

    pub fn to_mermaid_with(&self, style: &DiagramStyle) -> String {
        let mut lines = vec![format!("graph {}", style.direction)];
        let Some(root) = self.root.as_deref() else {
            lines.push("    empty[Empty Tree]".to_owned());
            return lines.join("\n");
        };

        lines.push(format!("    t(({}))", root.value));
        let mut stack = vec![Step::Enter(root, "t".to_owned())];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(node, id) => {
                    let child_id = format!("{id}l");
                    match node.left.as_deref() {
                        Some(left) => {
                            lines.push(format!("    {id} --> {child_id}(({}))", left.value));
                            stack.push(Step::Leave(node, id));
                            stack.push(Step::Enter(left, child_id));
                        }
                        None => {
                            if node.right.is_some() {
                                push_blank(&mut lines, &id, &child_id, style);
                            }
                            stack.push(Step::Leave(node, id));
                        }
                    }
                }
                Step::Leave(node, id) => {
                    let child_id = format!("{id}r");
                    match node.right.as_deref() {
                        Some(right) => {
                            lines.push(format!("    {id} --> {child_id}(({}))", right.value));
                            stack.push(Step::Enter(right, child_id));
                        }
                        None => {
                            if node.left.is_some() {
                                push_blank(&mut lines, &id, &child_id, style);
                            }
                        }
                    }
                }
            }
        }

        lines.join("\n")
    }
}

fn push_blank(lines: &mut Vec<String>, parent: &str, id: &str, style: &DiagramStyle) {
    lines.push(format!("    {parent} ~~~ {id}(( ))"));
    lines.push(format!("    style {id} {}", style.blank_style));
}
