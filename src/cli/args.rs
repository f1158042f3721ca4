//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::RenderStyle;

/// Family tree loader: render trees and find most recent common ancestors
#[derive(Parser, Debug)]
#[command(name = "famtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the family tree
    Show {
        /// Family file (path or name in data_dir); stdin when omitted or "-"
        file: Option<String>,
        /// Rendering style (default from config)
        #[arg(short, long, value_enum)]
        style: Option<StyleArg>,
    },

    /// Most recent common ancestor of two people
    Mrca {
        first: String,
        second: String,
        /// Family file (path or name in data_dir); stdin when omitted or "-"
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Ancestors of a person, nearest first
    Ancestors {
        label: String,
        /// Family file (path or name in data_dir); stdin when omitted or "-"
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Check whether a person is in the tree
    Find {
        label: String,
        /// Family file (path or name in data_dir); stdin when omitted or "-"
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Summary of the tree
    Info {
        /// Family file (path or name in data_dir); stdin when omitted or "-"
        file: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a commented config template
    Template,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    Indent,
    Tree,
}

impl From<StyleArg> for RenderStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Indent => RenderStyle::Indent,
            StyleArg::Tree => RenderStyle::Tree,
        }
    }
}
