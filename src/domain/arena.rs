use generational_arena::{Arena, Index};
use tracing::instrument;

/// One person in the family tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Name of the person, unique by convention
    pub label: String,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in insertion order
    pub children: Vec<Index>,
}

/// Arena-based family tree.
///
/// Nodes are addressed by generational [`Index`]; every node but the root
/// stores its parent's index, and parents keep their children in the order
/// they were read. The tree only grows while it is being built, afterwards it
/// is handed out read-only.
#[derive(Debug)]
pub struct FamilyTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for FamilyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Attach a new node under `parent`, or make it the root when `parent` is None.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn insert_node(&mut self, label: String, parent: Option<Index>) -> Index {
        let node = TreeNode {
            label,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    /// Label of the node at `idx`, if it belongs to this tree.
    pub fn label(&self, idx: Index) -> Option<&str> {
        self.arena.get(idx).map(|node| node.label.as_str())
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Pre-order, left-to-right traversal starting at the root.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Children before their parent, left to right.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Pre-order traversal that also reports each node's generation (root = 0).
    pub fn iter_levels(&self) -> LevelIterator<'_> {
        LevelIterator::new(self)
    }

    /// Number of generations in the tree, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.iter_levels()
            .map(|(level, _, _)| level + 1)
            .max()
            .unwrap_or(0)
    }

    /// Collects the labels of all people without children, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_labels(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.label.as_str())
            .collect()
    }
}

pub struct LevelIterator<'a> {
    tree: &'a FamilyTree,
    stack: Vec<(Index, usize)>,
}

impl<'a> LevelIterator<'a> {
    fn new(tree: &'a FamilyTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, 0));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for LevelIterator<'a> {
    type Item = (usize, Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, level)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, level + 1));
                }
                return Some((level, current_idx, node));
            }
        }
        None
    }
}

pub struct TreeIterator<'a>(LevelIterator<'a>);

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a FamilyTree) -> Self {
        Self(LevelIterator::new(tree))
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, idx, node)| (idx, node))
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a FamilyTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a FamilyTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
