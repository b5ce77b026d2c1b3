//! Level-by-level rendering of the tree shape for visual inspection.

use std::fmt::Display;

use crate::node::Node;
use crate::tree::AvlMap;

impl<K: Ord + Display, V> AvlMap<K, V> {
    /// Renders the tree shape as a text block, one line per level, with
    /// each key centered above the slots of its children.
    ///
    /// An empty map renders as the empty string. The output width grows
    /// exponentially with the tree height, so this is only meant for
    /// inspecting small trees.
    pub fn render(&self) -> String {
        let Some(root) = self.root.as_deref() else {
            return String::new();
        };

        // Fixed cell width, wide enough for every rendered key.
        let mut cell = 0;
        self.traverse_in_order(|key, _| cell = cell.max(key.to_string().len()));

        let levels = root.height;
        let mut row: Vec<Option<&Node<K, V>>> = vec![Some(root)];
        let mut out = String::new();
        let mut width = 1 << levels;

        for level in 0..levels {
            for slot in &row {
                out.push_str(&" ".repeat(width * cell));
                match slot {
                    None => out.push_str(&" ".repeat(cell)),
                    Some(node) => {
                        let text = node.key.to_string();
                        let pad = cell - text.len();
                        out.push_str(&" ".repeat(pad - pad / 2));
                        out.push_str(&text);
                        out.push_str(&" ".repeat(pad / 2));
                    }
                }
                out.push_str(&" ".repeat((width - 1) * cell));
            }
            out.push('\n');

            if level + 1 < levels {
                let mut next = vec![None; row.len() * 2];
                for (x, slot) in row.iter().enumerate() {
                    if let Some(node) = slot {
                        next[x * 2] = node.left.as_deref();
                        next[x * 2 + 1] = node.right.as_deref();
                    }
                }
                row = next;
            }
            width /= 2;
        }
        out
    }
}
