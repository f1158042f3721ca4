//! Loading family trees from line sources.

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::domain::{FamilyTree, TreeBuilder};
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::{FileSource, LineSource, StdinSource};

/// Open `source`, build the tree from its lines and release the handle.
#[instrument(level = "debug", skip(source), fields(name = %source.name()))]
pub fn load_tree(source: &dyn LineSource) -> InfraResult<FamilyTree> {
    let name = source.name();
    let reader = source.open()?;
    let tree = load_from_reader(reader, &name)?;
    info!("loaded {} people from {}", tree.len(), name);
    Ok(tree)
}

/// Build a tree from any buffered reader; `name` labels read errors.
pub fn load_from_reader<R: BufRead>(reader: R, name: &str) -> InfraResult<FamilyTree> {
    let mut builder = TreeBuilder::new();
    for line in reader.lines() {
        let line = line.map_err(|e| {
            InfraError::io(
                format!("read {} at line {}", name, builder.lines_processed() + 1),
                e,
            )
        })?;
        builder.process_line(&line)?;
    }
    debug!("{}: {} lines processed", name, builder.lines_processed());
    Ok(builder.finish())
}

pub fn load_from_path(path: &Path) -> InfraResult<FamilyTree> {
    load_tree(&FileSource::new(path))
}

pub fn load_from_stdin() -> InfraResult<FamilyTree> {
    load_tree(&StdinSource)
}
