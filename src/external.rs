//! Subprocess wrappers for the two external tools this pipeline drives: the
//! LTL-to-automaton translator and the realizability checker.

use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// Run the LTL-to-automaton tool on `formula`, returning its raw stdout for
/// [`crate::nba_parser::parse`] to consume.
pub fn run_ltl2ba(tool_path: &Path, formula: &str) -> Result<String, Error> {
    let output = Command::new(tool_path)
        .arg("-f")
        .arg(formula)
        .output()
        .map_err(|e| Error::ExternalToolFailure {
            tool: tool_path.display().to_string(),
            source: e,
        })?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Outcome reported by the realizability checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Realizability {
    Realizable,
    Unrealizable,
    Unknown,
}

/// Run the realizability checker against the original formula/partition
/// files (it performs its own LTL synthesis independent of this pipeline's
/// AIG, as a cross-check), for the given `k - 1` bound.
pub fn run_checker(
    tool_path: &Path,
    formula_path: &Path,
    part_path: &Path,
    k: u32,
    compositional: bool,
) -> Result<Realizability, Error> {
    let mut cmd = Command::new(tool_path);
    cmd.arg("--ltl")
        .arg(formula_path)
        .arg("--part")
        .arg(part_path)
        .args(["--player", "1"])
        .args(["--kbound", &(k as i64 - 1).to_string()])
        .args(["--verb", "0"])
        .args(["--crit", "OFF"])
        .args(["--opt", "none"])
        .args(["--check", "REAL"]);
    if compositional {
        cmd.args(["--syn", "COMP"]).args(["--nbw", "COMP"]);
    }

    let status = cmd.status().map_err(|e| Error::ExternalToolFailure {
        tool: tool_path.display().to_string(),
        source: e,
    })?;

    Ok(match status.code() {
        Some(10) => Realizability::Realizable,
        Some(20) => Realizability::Unrealizable,
        _ => Realizability::Unknown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_ltl2ba_missing_tool_is_external_failure() {
        let err = run_ltl2ba(Path::new("/no/such/ltl2ba-binary"), "G a");
        assert!(matches!(err, Err(Error::ExternalToolFailure { .. })));
    }

    #[test]
    fn test_run_checker_missing_tool_is_external_failure() {
        let err = run_checker(
            Path::new("/no/such/checker-binary"),
            Path::new("f.ltl"),
            Path::new("f.part"),
            2,
            false,
        );
        assert!(matches!(err, Err(Error::ExternalToolFailure { .. })));
    }
}
