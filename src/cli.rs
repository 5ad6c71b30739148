//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

/// LTL-to-AIG k-co-Büchi safety game translator.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// LTL formula file, in Wring format
    pub formula: PathBuf,

    /// Input/output partition file
    pub part: PathBuf,

    /// k for the k-co-Büchi game that will be constructed
    pub k: u32,

    /// Construct the formulas compositionally (`[spec_unit ...]` sections)
    #[arg(short = 'c', long)]
    pub compositional: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the LTL-to-automaton tool binary
    #[arg(long, default_value = "ltl2ba")]
    pub ltl2ba: PathBuf,

    /// Path to the realizability checker binary
    #[arg(long, default_value = "acacia")]
    pub checker: PathBuf,
}
