//! Parser for the textual automaton transitions format produced by the
//! external LTL-to-automaton tool.
//!
//! The tool's output looks roughly like:
//!
//! ```text
//! never { /* ... header comment ... */
//! accept_init:
//!     if
//!     :: (p0) -> goto T0_init
//!     :: (1) -> goto accept_init
//!     fi;
//! T0_init:
//!     if
//!     :: (p1) -> goto accept_init
//!     fi;
//! }
//! ```

use crate::automaton::{Edge, Nba};
use crate::error::Error;

/// Parse the raw stdout of the LTL-to-automaton tool into an [`Nba`].
pub fn parse(tool: &str, formula: &str, text: &str) -> Result<Nba, Error> {
    let Some((_, body)) = text.split_once("*/\n") else {
        return Err(Error::EmptyAutomaton {
            tool: tool.to_string(),
            formula: formula.to_string(),
        });
    };

    let mut states = Vec::new();
    let mut accepting = Vec::new();
    let mut edges = Vec::new();

    for raw_block in split_transitions(body) {
        let block = raw_block.trim();
        if block.is_empty() {
            continue;
        }
        let Some((head, rules)) = block.split_once(":\n") else {
            log::debug!("skipping malformed transition block: {block:?}");
            continue;
        };

        let (mut state, accept_state) = match head.strip_prefix("accept_") {
            Some(rest) => (rest.to_string(), true),
            None => (head.to_string(), false),
        };
        if is_initial(&state) {
            state = "initial".to_string();
        }
        if !states.contains(&state) {
            states.push(state.clone());
        }
        if accept_state && !accepting.contains(&state) {
            accepting.push(state.clone());
        }

        if rules.contains("skip") {
            edges.push(Edge {
                from: state.clone(),
                to: state,
                label: "(1)".to_string(),
            });
            continue;
        }
        if rules.contains("false") {
            continue;
        }

        for rule in rules.split("::") {
            let rule = rule.trim();
            if rule.is_empty() || rule.starts_with("if") {
                continue;
            }
            let Some((label, target)) = rule.split_once(" -> goto ") else {
                log::debug!("skipping malformed rule in state {state:?}: {rule:?}");
                continue;
            };
            let label = label.trim().to_string();
            log::trace!("edge {state} -> ({label})");
            let accept_target = target.contains("accept");
            let target = target.strip_prefix("accept_").unwrap_or(target);
            let mut goto_state = target.split_whitespace().next().unwrap_or("").to_string();
            if is_initial(&goto_state) {
                goto_state = "initial".to_string();
            }
            if !states.contains(&goto_state) {
                states.push(goto_state.clone());
            }
            if accept_target && !accepting.contains(&goto_state) {
                accepting.push(goto_state.clone());
            }
            edges.push(Edge {
                from: state.clone(),
                to: goto_state,
                label,
            });
        }
    }

    Ok(Nba {
        states,
        accepting,
        edges,
    })
}

fn is_initial(state: &str) -> bool {
    state.contains("init")
}

/// Split on `;\n` followed by an optional `}\n`, matching the separator
/// between transition blocks in the tool's output.
fn split_transitions(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(";\n") {
        parts.push(&rest[..pos]);
        rest = &rest[pos + 2..];
        rest = rest.strip_prefix('}').unwrap_or(rest);
        rest = rest.strip_prefix('\n').unwrap_or(rest);
    }
    if !rest.trim().is_empty() {
        parts.push(rest);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "never { /* formula */\n\
accept_init:\n\
\tif\n\
\t:: (p0) -> goto T0_S1\n\
\t:: (1) -> goto accept_init\n\
\tfi;\n\
T0_S1:\n\
\tif\n\
\t:: (p1) -> goto accept_init\n\
\tfi;\n\
}\n";

    #[test]
    fn test_parse_states_and_accepting() {
        let nba = parse("ltl2ba", "G p0", SAMPLE).unwrap();
        assert!(nba.states.contains(&"initial".to_string()));
        assert!(nba.states.contains(&"T0_S1".to_string()));
        assert!(nba.accepting.contains(&"initial".to_string()));
    }

    #[test]
    fn test_parse_edges_and_labels() {
        let nba = parse("ltl2ba", "G p0", SAMPLE).unwrap();
        assert!(nba
            .edges
            .iter()
            .any(|e| e.from == "initial" && e.to == "T0_S1" && e.label == "(p0)"));
        assert!(nba
            .edges
            .iter()
            .any(|e| e.from == "initial" && e.to == "initial" && e.label == "(1)"));
    }

    #[test]
    fn test_missing_header_marker_is_error() {
        let err = parse("ltl2ba", "G p0", "garbage with no marker");
        assert!(err.is_err());
    }

    #[test]
    fn test_skip_self_loop() {
        const SKIP_SAMPLE: &str = "never { /* formula */\n\
accept_init:\n\
\tskip;\n\
}\n";
        let nba = parse("ltl2ba", "true", SKIP_SAMPLE).unwrap();
        assert!(nba
            .edges
            .iter()
            .any(|e| e.from == "initial" && e.to == "initial" && e.label == "(1)"));
    }

    #[test]
    fn test_false_rule_produces_no_edge() {
        const FALSE_SAMPLE: &str = "never { /* formula */\n\
accept_init:\n\
\tfalse;\n\
}\n";
        let nba = parse("ltl2ba", "false", FALSE_SAMPLE).unwrap();
        assert!(nba.edges.is_empty());
    }
}
