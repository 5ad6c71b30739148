//! Compiles an NBA edge label (a disjunction of conjunctive cubes over the
//! input/output alphabet, as emitted by the LTL-to-automaton tool) into a
//! circuit signal.

use fxhash::FxHashMap;

use crate::circuit::Circuit;
use crate::signal::Signal;

/// Parse `label` (e.g. `"p0 && !p1 || (1)"`) and build the corresponding
/// circuit, resolving each named signal through `var_map`.
pub fn compile_label(circuit: &mut Circuit, label: &str, var_map: &FxHashMap<String, u32>) -> Signal {
    let mut disjunction = Signal::FALSE;
    for disjunct in label.split("||") {
        let disjunct = disjunct.trim().trim_start_matches('(').trim_end_matches(')').trim();
        if is_trivially_true(disjunct) {
            return Signal::TRUE;
        }
        let mut cube = Signal::TRUE;
        for literal in disjunct.split("&&") {
            let literal = literal.trim();
            if literal.is_empty() {
                continue;
            }
            let (name, negated) = match literal.strip_prefix('!') {
                Some(rest) => (rest.trim(), true),
                None => (literal, false),
            };
            let var = *var_map
                .get(name)
                .unwrap_or_else(|| panic!("edge label references unknown signal {name:?}"));
            let sig = circuit.literal(var);
            let sig = if negated { circuit.not(sig) } else { sig };
            cube = circuit.and(cube, sig);
        }
        disjunction = circuit.or(disjunction, cube);
    }
    disjunction
}

fn is_trivially_true(disjunct: &str) -> bool {
    matches!(disjunct, "" | "1" | "T" | "true")
}
