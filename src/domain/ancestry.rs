//! Read-only ancestry queries over a finished [`FamilyTree`].

use std::collections::HashSet;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::FamilyTree;
use crate::domain::error::{DomainError, TreeResult};

/// Walks parent links upwards, nearest ancestor first.
///
/// The starting node itself is never yielded.
pub struct Ancestors<'a> {
    tree: &'a FamilyTree,
    current: Option<Index>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        self.current = self.tree.get_node(idx).and_then(|node| node.parent);
        Some(idx)
    }
}

impl FamilyTree {
    /// Depth-first lookup, parent before children, children in stored order.
    ///
    /// With duplicate labels the first node met in that order wins.
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_label(&self, label: &str) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.label == label)
            .map(|(idx, _)| idx)
    }

    /// Lazy version of [`FamilyTree::ancestor_chain`].
    pub fn ancestors(&self, idx: Index) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.get_node(idx).and_then(|node| node.parent),
        }
    }

    /// Ancestors of `idx` from immediate parent to root; empty for the root.
    pub fn ancestor_chain(&self, idx: Index) -> Vec<Index> {
        self.ancestors(idx).collect()
    }

    /// Number of ancestors of `idx` (0 for the root).
    pub fn depth_of(&self, idx: Index) -> usize {
        self.ancestors(idx).count()
    }

    /// `label` followed by the labels of all its ancestors up to the root.
    #[instrument(level = "debug", skip(self))]
    pub fn path_to_root(&self, label: &str) -> TreeResult<Vec<&str>> {
        let idx = self.require(label)?;
        let path = std::iter::once(idx)
            .chain(self.ancestors(idx))
            .filter_map(|i| self.label(i))
            .collect();
        Ok(path)
    }

    /// Most recent common ancestor of the nodes labelled `first` and `second`.
    ///
    /// Scans the ancestors of `first` nearest-first and returns the first one
    /// that is also an ancestor of `second`. A node is never its own ancestor,
    /// so asking for the same label twice yields its parent. Returns
    /// `Ok(None)` when the two chains share nothing, which only happens when
    /// one of the nodes is the root.
    #[instrument(level = "debug", skip(self))]
    pub fn most_recent_common_ancestor(
        &self,
        first: &str,
        second: &str,
    ) -> TreeResult<Option<Index>> {
        let first_idx = self.require(first)?;
        let second_idx = self.require(second)?;

        let second_chain: HashSet<Index> = self.ancestors(second_idx).collect();
        let mrca = self
            .ancestors(first_idx)
            .find(|idx| second_chain.contains(idx));

        debug!(
            "mrca of {} and {}: {:?}",
            first,
            second,
            mrca.and_then(|idx| self.label(idx))
        );
        Ok(mrca)
    }

    fn require(&self, label: &str) -> TreeResult<Index> {
        self.find_by_label(label)
            .ok_or_else(|| DomainError::NodeNotFound(label.to_string()))
    }
}
