//! Family tree loading and most-recent-common-ancestor queries.
//!
//! A family file holds one relationship per line, `parent:child1,child2`.
//! The first line's parent is the root; later parents must already be known.
//!
//! ```
//! use famtree::domain::FamilyTree;
//!
//! let tree: FamilyTree = "John:Mary,Paul\nMary:Anne,Tom\nPaul:Kate".parse().unwrap();
//! let mrca = tree.most_recent_common_ancestor("Anne", "Kate").unwrap();
//! assert_eq!(mrca.and_then(|idx| tree.label(idx)), Some("John"));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{DomainError, FamilyTree, TreeBuilder, TreeResult};
