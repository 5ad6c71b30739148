//! Parser for the `.inputs`/`.outputs` partition file.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// The uncontrollable/controllable signal partition of a specification.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

/// Parse a partition file's `.inputs name1 name2 ...` / `.outputs ...` lines.
///
/// Input names are lower-cased; output names keep their original case.
/// Either directive missing is a [`Error::MalformedPartition`].
pub fn read_partition(path: &Path) -> Result<Partition, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    parse(&text).ok_or_else(|| Error::MalformedPartition {
        path: to_owned_path(path),
    })
}

/// Parse partition contents already in memory, for testing and for embedding
/// in larger formats without touching the filesystem.
pub fn parse_str(text: &str, path: &Path) -> Result<Partition, Error> {
    parse(text).ok_or_else(|| Error::MalformedPartition {
        path: to_owned_path(path),
    })
}

fn parse(text: &str) -> Option<Partition> {
    let mut inputs: Option<Vec<String>> = None;
    let mut outputs: Option<Vec<String>> = None;

    for line in text.lines() {
        let line = line.trim_start();
        if let Some(rest) = line.strip_prefix(".inputs") {
            inputs = Some(rest.split_whitespace().map(|s| s.to_lowercase()).collect());
        } else if let Some(rest) = line.strip_prefix(".outputs") {
            outputs = Some(rest.split_whitespace().map(|s| s.to_string()).collect());
        }
    }

    match (inputs, outputs) {
        (Some(inputs), Some(outputs)) => Some(Partition { inputs, outputs }),
        _ => None,
    }
}

fn to_owned_path(path: &Path) -> PathBuf {
    path.to_path_buf()
}
