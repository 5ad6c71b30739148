//! Error type for the translation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can make the translation abort before an AIG is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: missing `.inputs` or `.outputs` directive")]
    MalformedPartition { path: PathBuf },

    #[error("{path}: -c was given but no [spec_unit ...] section was found")]
    CompositionalMarkerMissing { path: PathBuf },

    #[error("{path}: formula has neither assumptions nor guarantees")]
    EmptyFormula { path: PathBuf },

    #[error(
        "{path}: converted formula still contains `=0`/`=1`; the partition file \
         does not cover every signal in the formula"
    )]
    SurfacePartitionMismatch { path: PathBuf },

    #[error("could not run external tool {tool:?}: {source}")]
    ExternalToolFailure {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} produced an empty automaton for formula {formula:?}")]
    EmptyAutomaton { tool: String, formula: String },

    #[error("{0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
}
