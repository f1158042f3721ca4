//! Tree builder turning `parent:child1,child2` lines into a [`FamilyTree`].

use std::str::FromStr;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::FamilyTree;
use crate::domain::error::{DomainError, TreeResult};

/// Separates the parent label from the list of children.
pub const PARENT_DELIMITER: char = ':';
/// Separates children within the list.
pub const CHILD_DELIMITER: char = ',';

/// Constructs a family tree line by line.
///
/// The first line's parent becomes the root. Every later parent must already
/// be in the tree, either as the root or as a child named on an earlier line.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: FamilyTree,
    line_no: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: FamilyTree::new(),
            line_no: 0,
        }
    }

    /// Apply all lines in order, stopping at the first failure.
    #[instrument(level = "debug", skip_all)]
    pub fn build<I, S>(mut self, lines: I) -> TreeResult<FamilyTree>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.process_line(line.as_ref())?;
        }
        debug!(
            "built tree with {} nodes from {} lines",
            self.tree.len(),
            self.line_no
        );
        Ok(self.finish())
    }

    /// Add one relationship line to the tree and return the parent's index.
    ///
    /// Only the first colon splits; the parent label is used as written, child
    /// labels are trimmed and empty ones are dropped.
    #[instrument(level = "debug", skip(self))]
    pub fn process_line(&mut self, line: &str) -> TreeResult<Index> {
        self.line_no += 1;
        let line_no = self.line_no;

        let (parent_label, children_part) = line.split_once(PARENT_DELIMITER).ok_or_else(|| {
            DomainError::MalformedLine {
                line_no,
                line: line.to_string(),
            }
        })?;

        let parent_idx = match self.tree.root() {
            None => self.tree.insert_node(parent_label.to_string(), None),
            Some(_) => self.tree.find_by_label(parent_label).ok_or_else(|| {
                DomainError::ParentNotFound {
                    line_no,
                    label: parent_label.to_string(),
                }
            })?,
        };

        for child in children_part
            .split(CHILD_DELIMITER)
            .map(str::trim)
            .filter(|child| !child.is_empty())
        {
            trace!("line {}: {} -> {}", line_no, parent_label, child);
            self.tree.insert_node(child.to_string(), Some(parent_idx));
        }

        Ok(parent_idx)
    }

    /// Number of lines consumed so far, including a failing one.
    pub fn lines_processed(&self) -> usize {
        self.line_no
    }

    /// The tree as built so far.
    pub fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    pub fn finish(self) -> FamilyTree {
        self.tree
    }
}

impl FromStr for FamilyTree {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TreeBuilder::new().build(s.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn child_labels<'a>(tree: &'a FamilyTree, label: &str) -> Vec<&'a str> {
        let idx = tree.find_by_label(label).unwrap();
        tree.get_node(idx)
            .unwrap()
            .children
            .iter()
            .filter_map(|&c| tree.label(c))
            .collect()
    }

    #[test]
    fn given_valid_lines_when_building_then_links_all_generations() {
        let tree = TreeBuilder::new()
            .build(["John:Mary,Paul", "Mary:Anne,Tom", "Paul:Kate"])
            .unwrap();

        assert_eq!(tree.label(tree.root().unwrap()), Some("John"));
        assert_eq!(child_labels(&tree, "John"), vec!["Mary", "Paul"]);
        assert_eq!(child_labels(&tree, "Mary"), vec!["Anne", "Tom"]);
        assert_eq!(child_labels(&tree, "Paul"), vec!["Kate"]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn given_line_without_colon_when_processing_then_malformed() {
        let mut builder = TreeBuilder::new();
        let err = builder.process_line("NoColonHere").unwrap_err();
        assert_eq!(
            err,
            DomainError::MalformedLine {
                line_no: 1,
                line: "NoColonHere".into()
            }
        );
    }

    #[test]
    fn given_blank_line_when_processing_then_malformed() {
        let mut builder = TreeBuilder::new();
        builder.process_line("John:Mary").unwrap();
        let err = builder.process_line("").unwrap_err();
        assert!(matches!(err, DomainError::MalformedLine { line_no: 2, .. }));
    }

    #[test]
    fn given_unknown_first_parent_when_processing_then_becomes_root() {
        let mut builder = TreeBuilder::new();
        let idx = builder.process_line("Bob:Carl").unwrap();
        assert_eq!(builder.tree().root(), Some(idx));
        assert_eq!(builder.tree().label(idx), Some("Bob"));
    }

    #[test]
    fn given_unknown_later_parent_when_processing_then_parent_not_found() {
        let mut builder = TreeBuilder::new();
        builder.process_line("Bob:Carl").unwrap();
        let err = builder.process_line("Zed:Amy").unwrap_err();
        assert_eq!(
            err,
            DomainError::ParentNotFound {
                line_no: 2,
                label: "Zed".into()
            }
        );
        assert_eq!(builder.lines_processed(), 2);
        assert!(builder.tree().find_by_label("Amy").is_none());
    }

    #[rstest]
    #[case("Paul:Kate,")]
    #[case("Paul: Kate ")]
    #[case("Paul:,Kate,,")]
    #[case("Paul:  ,Kate")]
    fn given_padded_children_when_processing_then_same_as_plain(#[case] line: &str) {
        let tree = TreeBuilder::new().build([line]).unwrap();
        assert_eq!(child_labels(&tree, "Paul"), vec!["Kate"]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn given_empty_children_list_when_processing_then_only_parent_checked() {
        let tree = TreeBuilder::new().build(["John:", "John:Mary"]).unwrap();
        assert_eq!(child_labels(&tree, "John"), vec!["Mary"]);
    }

    #[test]
    fn given_repeated_parent_line_when_processing_then_appends_children() {
        let tree = TreeBuilder::new()
            .build(["John:Mary", "John:Paul"])
            .unwrap();
        assert_eq!(child_labels(&tree, "John"), vec!["Mary", "Paul"]);
    }

    #[test]
    fn given_multiple_colons_when_processing_then_first_one_splits() {
        let tree = TreeBuilder::new().build(["John:Mary:Ann"]).unwrap();
        assert_eq!(child_labels(&tree, "John"), vec!["Mary:Ann"]);
    }

    #[test]
    fn given_failure_midway_when_building_then_stops_at_first_error() {
        let err = TreeBuilder::new()
            .build(["John:Mary", "Zed:Amy", "broken"])
            .unwrap_err();
        assert_eq!(err.subject(), "Zed");
    }

    #[test]
    fn given_no_lines_when_building_then_empty_tree() {
        let tree = TreeBuilder::new().build(Vec::<String>::new()).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn given_text_when_parsing_then_builds_same_tree() {
        let tree: FamilyTree = "John:Mary,Paul\nMary:Anne\n".parse().unwrap();
        assert_eq!(child_labels(&tree, "Mary"), vec!["Anne"]);
    }
}
