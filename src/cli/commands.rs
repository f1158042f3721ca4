use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{DomainError, FamilyTree, RenderStyle};
use crate::infrastructure::{load_from_path, load_from_stdin};

/// Joins a person and their ancestors in `ancestors` output.
pub const CHAIN_SEPARATOR: &str = " <- ";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Show { file, style } => {
            let settings = Settings::load(cli.config.as_deref())?;
            let style = style.map(RenderStyle::from).unwrap_or(settings.style);
            _show(&settings, file.as_deref(), style)
        }
        Commands::Mrca {
            first,
            second,
            file,
        } => {
            let settings = Settings::load(cli.config.as_deref())?;
            _mrca(&settings, file.as_deref(), first, second)
        }
        Commands::Ancestors { label, file } => {
            let settings = Settings::load(cli.config.as_deref())?;
            _ancestors(&settings, file.as_deref(), label)
        }
        Commands::Find { label, file } => {
            let settings = Settings::load(cli.config.as_deref())?;
            _find(&settings, file.as_deref(), label)
        }
        Commands::Info { file } => {
            let settings = Settings::load(cli.config.as_deref())?;
            _info(&settings, file.as_deref())
        }
        Commands::Config { command } => _config(cli, command),
        Commands::Completion { shell } => {
            _completion(*shell);
            Ok(())
        }
    }
}

/// Load the family tree named by `file`; stdin when absent or "-".
#[instrument(level = "debug", skip(settings))]
pub fn load_input(settings: &Settings, file: Option<&str>) -> CliResult<FamilyTree> {
    match file {
        None | Some("-") => Ok(load_from_stdin()?),
        Some(name) => {
            let path = settings
                .resolve_input(name)
                .ok_or_else(|| CliError::InputNotFound(name.to_string()))?;
            debug!("reading family file {}", path.display());
            Ok(load_from_path(&path)?)
        }
    }
}

/// Label of the most recent common ancestor, None when the two share none.
pub fn mrca_label<'a>(tree: &'a FamilyTree, first: &str, second: &str) -> CliResult<Option<&'a str>> {
    let mrca = tree.most_recent_common_ancestor(first, second)?;
    Ok(mrca.and_then(|idx| tree.label(idx)))
}

/// `label <- parent <- ... <- root`
pub fn ancestor_line(tree: &FamilyTree, label: &str) -> CliResult<String> {
    Ok(tree.path_to_root(label)?.iter().join(CHAIN_SEPARATOR))
}

#[instrument(skip(settings))]
fn _show(settings: &Settings, file: Option<&str>, style: RenderStyle) -> CliResult<()> {
    let tree = load_input(settings, file)?;
    output::header("Family Tree:");
    println!();
    print!("{}", tree.render(style));
    Ok(())
}

#[instrument(skip(settings))]
fn _mrca(settings: &Settings, file: Option<&str>, first: &str, second: &str) -> CliResult<()> {
    let tree = load_input(settings, file)?;
    match mrca_label(&tree, first, second)? {
        Some(label) => output::info(label),
        None => output::warning(&format!("no common ancestor for {first} and {second}")),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _ancestors(settings: &Settings, file: Option<&str>, label: &str) -> CliResult<()> {
    let tree = load_input(settings, file)?;
    output::info(&ancestor_line(&tree, label)?);
    Ok(())
}

#[instrument(skip(settings))]
fn _find(settings: &Settings, file: Option<&str>, label: &str) -> CliResult<()> {
    let tree = load_input(settings, file)?;
    let idx = tree
        .find_by_label(label)
        .ok_or_else(|| DomainError::NodeNotFound(label.to_string()))?;
    output::success(&format!(
        "{} found, generation {}",
        label,
        tree.depth_of(idx) + 1
    ));
    Ok(())
}

#[instrument(skip(settings))]
fn _info(settings: &Settings, file: Option<&str>) -> CliResult<()> {
    let tree = load_input(settings, file)?;
    let root = tree
        .root()
        .and_then(|idx| tree.label(idx))
        .unwrap_or("<empty>");
    output::action("root", root);
    output::action("people", &tree.len());
    output::action("generations", &tree.depth());
    output::action("leaves", &tree.leaf_labels().len());
    Ok(())
}

fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            print!("{}", settings.to_toml()?);
        }
        ConfigCommands::Template => print!("{}", Settings::template()),
    }
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
