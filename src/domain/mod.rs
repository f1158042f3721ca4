//! Domain layer: the family tree, its builder and ancestry queries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod ancestry;
pub mod arena;
pub mod builder;
pub mod error;
pub mod render;

pub use ancestry::Ancestors;
pub use arena::{FamilyTree, TreeNode};
pub use builder::TreeBuilder;
pub use error::{DomainError, TreeResult};
pub use render::{RenderStyle, TreeNodeConvert};
