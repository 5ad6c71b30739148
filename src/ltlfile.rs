//! Parser for LTL specification files in Wring syntax, and the syntax
//! rewrite into the surface format the automaton-construction tool expects.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Read the raw formula blocks out of a specification file.
///
/// In non-compositional mode the whole file (minus `#` comment lines,
/// `[spec_unit ...]` headers and a trailing `group_order` line) is a single
/// block named `"u0"`. In compositional mode, each `[spec_unit name]` section
/// up to the next header or `group_order` becomes its own named block.
pub fn read_formulae(path: &Path, compositional: bool) -> Result<Vec<(String, String)>, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    parse_formulae(&text, compositional, path)
}

fn parse_formulae(
    text: &str,
    compositional: bool,
    path: &Path,
) -> Result<Vec<(String, String)>, Error> {
    let lines: Vec<&str> = text.lines().collect();

    if !compositional {
        let mut form = String::new();
        for line in &lines {
            if !line.starts_with('#') && !line.starts_with("[spec_unit") && !line.starts_with("group_order") {
                form.push_str(line);
                form.push('\n');
            }
        }
        return Ok(vec![("u0".to_string(), form)]);
    }

    let mut specs = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        while i < lines.len() && !lines[i].starts_with("[spec_unit") {
            i += 1;
        }
        if i >= lines.len() {
            break;
        }
        let name = lines[i]
            .trim_start_matches('[')
            .split(']')
            .next()
            .unwrap_or("")
            .to_string();
        i += 1;

        let mut form = String::new();
        while i < lines.len() && !lines[i].starts_with("[spec_unit") && !lines[i].starts_with("group_order") {
            if !lines[i].starts_with('#') {
                form.push_str(lines[i]);
                form.push('\n');
            }
            i += 1;
        }
        specs.push((name, form));

        if i < lines.len() && lines[i].starts_with("group_order") {
            break;
        }
    }

    if specs.is_empty() {
        return Err(Error::CompositionalMarkerMissing {
            path: owned(path),
        });
    }
    Ok(specs)
}

/// Negate a formula for realizability-checker invocation (`!(formula)`).
pub fn negate_ltl2ba(formula: &str) -> String {
    format!("!({formula})")
}

/// Split a raw Wring-syntax block into its `assume ...;` sub-formulas and its
/// remaining guarantee sub-formulas, each still in Wring syntax.
///
/// A `#` starts a line comment. Sub-formulas are `;`-separated; a sub-formula
/// counts as a guarantee only if it contains at least one alphanumeric
/// character (so stray blank segments produced by the split are dropped).
pub fn extract_assumptions_and_guarantees(formula: &str) -> (Vec<String>, Vec<String>) {
    let mut stripped = String::new();
    for line in formula.lines() {
        if !line.is_empty() {
            stripped.push_str(line.split('#').next().unwrap_or(""));
            stripped.push('\n');
        }
    }

    let mut assumptions = Vec::new();
    let mut guarantees = Vec::new();
    for sub in stripped.split(';') {
        if sub.trim_start().starts_with("assume") {
            assumptions.push(sub.to_string());
        } else if sub.chars().any(|c| c.is_alphanumeric() || c == '_') {
            guarantees.push(sub.trim_start_matches('\n').to_string());
        }
    }
    (assumptions, guarantees)
}

fn convert_local(subform: &str, inputs: &[String], outputs: &[String]) -> String {
    let mut s = subform.replace("assume", "").replace('\t', " ").replace('\n', "");
    s = s.replace('G', "[] ");
    s = s.replace('F', "<> ");
    s = s.replace('+', " || ");
    s = s.replace('*', " && ");
    for name in inputs.iter().chain(outputs.iter()) {
        s = s.replace(&format!("{name}=0"), &format!("!{name}"));
        s = s.replace(&format!("{name}=1"), name);
    }
    s
}

/// Rewrite a Wring-syntax formula block into the surface syntax the
/// automaton-construction tool accepts, combining assumptions and
/// guarantees into a single implication.
///
/// Errors if the block has no assumptions and no guarantees
/// ([`Error::EmptyFormula`]), or if the rewritten formula still contains a
/// `name=0`/`name=1` residual, meaning the partition file didn't cover every
/// signal the formula mentions ([`Error::SurfacePartitionMismatch`]).
pub fn wring_to_ltl2ba(
    formula: &str,
    inputs: &[String],
    outputs: &[String],
    path: &Path,
) -> Result<String, Error> {
    let (assumptions, guarantees) = extract_assumptions_and_guarantees(formula);

    let mut new_assumptions = String::new();
    if let Some((first, rest)) = assumptions.split_first() {
        new_assumptions = convert_local(first, inputs, outputs);
        for f in rest {
            new_assumptions = format!("{new_assumptions} && ({})", convert_local(f, inputs, outputs));
        }
        new_assumptions = format!("({new_assumptions})");
    }

    let mut new_guarantees = String::new();
    if let Some((first, rest)) = guarantees.split_first() {
        new_guarantees = convert_local(first, inputs, outputs);
        for f in rest {
            new_guarantees = format!("{new_guarantees}&& ({})", convert_local(f, inputs, outputs));
        }
        new_guarantees = format!("({new_guarantees})");
    }

    let new_formula = if !new_assumptions.is_empty() && !new_guarantees.is_empty() {
        format!("{new_assumptions} -> {new_guarantees}")
    } else if !new_assumptions.is_empty() {
        format!("!({new_assumptions})")
    } else if !new_guarantees.is_empty() {
        new_guarantees
    } else {
        return Err(Error::EmptyFormula { path: owned(path) });
    };

    if new_formula.contains("=0") || new_formula.contains("=1") {
        return Err(Error::SurfacePartitionMismatch { path: owned(path) });
    }

    Ok(new_formula)
}

fn owned(path: &Path) -> PathBuf {
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_read_formulae_monolithic_strips_comments() {
        let text = "# a comment\nG a=1 -> F b=0;\n";
        let specs = parse_formulae(text, false, Path::new("x.ltl")).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].0, "u0");
        assert!(!specs[0].1.contains('#'));
    }

    #[test]
    fn test_read_formulae_compositional_splits_units() {
        let text = "[spec_unit one]\nG a=1;\n[spec_unit two]\nF b=0;\ngroup_order one two\n";
        let specs = parse_formulae(text, true, Path::new("x.ltl")).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].0, "spec_unit one");
        assert_eq!(specs[1].0, "spec_unit two");
    }

    #[test]
    fn test_read_formulae_compositional_missing_marker_is_error() {
        let err = parse_formulae("G a=1;\n", true, Path::new("x.ltl"));
        assert!(matches!(err, Err(Error::CompositionalMarkerMissing { .. })));
    }

    #[test]
    fn test_extract_assumptions_and_guarantees() {
        let (assumptions, guarantees) = extract_assumptions_and_guarantees("assume G a=1;\nF b=0;\n");
        assert_eq!(assumptions.len(), 1);
        assert_eq!(guarantees.len(), 1);
    }

    #[test]
    fn test_wring_to_ltl2ba_guarantee_only() {
        let inputs = vec!["a".to_string()];
        let outputs = vec!["b".to_string()];
        let formula = wring_to_ltl2ba("G a=1 + F b=0;\n", &inputs, &outputs, Path::new("x.ltl")).unwrap();
        assert!(formula.contains("[]"));
        assert!(formula.contains("<>"));
        assert!(!formula.contains('='));
    }

    #[test]
    fn test_wring_to_ltl2ba_assumption_and_guarantee_become_implication() {
        let inputs = vec!["a".to_string()];
        let outputs = vec!["b".to_string()];
        let formula = wring_to_ltl2ba("assume G a=1;\nF b=1;\n", &inputs, &outputs, Path::new("x.ltl")).unwrap();
        assert!(formula.contains("->"));
    }

    #[test]
    fn test_wring_to_ltl2ba_empty_is_error() {
        let err = wring_to_ltl2ba("", &[], &[], Path::new("x.ltl"));
        assert!(matches!(err, Err(Error::EmptyFormula { .. })));
    }

    #[test]
    fn test_wring_to_ltl2ba_unpartitioned_signal_is_error() {
        // "c" is not in inputs/outputs, so "c=1" survives the rewrite untouched.
        let inputs = vec!["a".to_string()];
        let outputs = vec!["b".to_string()];
        let err = wring_to_ltl2ba("F c=1;\n", &inputs, &outputs, Path::new("x.ltl"));
        assert!(matches!(err, Err(Error::SurfacePartitionMismatch { .. })));
    }

    #[test]
    fn test_negate_ltl2ba() {
        assert_eq!(negate_ltl2ba("G a"), "!(G a)");
    }
}
