use std::collections::HashMap;
use std::fmt;

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use termtree::Tree;

use crate::domain::arena::FamilyTree;

/// Indentation added per generation in the plain rendering.
pub const INDENT: &str = "  ";

/// How a family tree is rendered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One label per line, two spaces per generation
    #[default]
    Indent,
    /// Box-drawing tree
    Tree,
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for FamilyTree {
    /// Assembled bottom-up from a post-order walk, so arbitrarily deep trees
    /// do not grow the call stack.
    fn to_tree_string(&self) -> Tree<String> {
        let mut pending: HashMap<Index, Tree<String>> = HashMap::new();
        for (idx, node) in self.iter_postorder() {
            let leaves: Vec<Tree<String>> = node
                .children
                .iter()
                .filter_map(|child| pending.remove(child))
                .collect();
            pending.insert(idx, Tree::new(node.label.clone()).with_leaves(leaves));
        }

        self.root()
            .and_then(|root| pending.remove(&root))
            .unwrap_or_else(|| Tree::new("Empty tree".to_string()))
    }
}

/// Drop a termtree level by level; its own drop recurses once per generation.
fn dismantle(tree: Tree<String>) {
    let mut stack = vec![tree];
    while let Some(mut tree) = stack.pop() {
        stack.append(&mut tree.leaves);
    }
}

impl FamilyTree {
    pub fn render(&self, style: RenderStyle) -> String {
        match style {
            RenderStyle::Indent => self.to_string(),
            RenderStyle::Tree => {
                let tree = self.to_tree_string();
                let rendered = tree.to_string();
                dismantle(tree);
                rendered
            }
        }
    }
}

/// Pre-order, one label per line, indented two spaces per generation.
impl fmt::Display for FamilyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, _, node) in self.iter_levels() {
            writeln!(f, "{}{}", INDENT.repeat(level), node.label)?;
        }
        Ok(())
    }
}
