//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Enumerate distinct nested-circle configurations (OEIS A250001, non-intersecting case)
#[derive(Parser, Debug)]
#[command(name = "circlenest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of circles per configuration (highest level generated)
    #[arg(value_name = "N", default_value_t = 4, allow_negative_numbers = true)]
    pub circles: i64,

    /// Write one image per level
    #[arg(short, long)]
    pub image: bool,

    /// Upload each image to the configured host (scp)
    #[arg(short, long, requires = "image")]
    pub upload: bool,

    /// Print every configuration of every level as a tree
    #[arg(short, long)]
    pub tree: bool,

    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, env = "CIRCLENEST_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory for images (overrides render.output_dir)
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
