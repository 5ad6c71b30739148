//! ASCII AIGER (`aag`) emission: turns the circuit's node table plus a
//! latch/error net pair into the textual AIGER format, using De Morgan's law
//! so that every emitted gate is an AND-gate.

use std::io::{self, Write};

use fxhash::FxHashMap;

use crate::circuit::{Circuit, Op};
use crate::signal::Signal;

/// Write the AIGER encoding of the lifted game to `w`.
///
/// `latches` maps each latch's AIG variable number to its next-state signal;
/// `error` is the disjunctive error signal. Every variable referenced by
/// `latches`/`error`/the circuit's gates must already have been assigned by
/// [`crate::automaton::lift`] (inputs and outputs first, then latches).
pub fn write_aig<W: Write>(
    mut w: W,
    circuit: &Circuit,
    inputs: &[String],
    outputs: &[String],
    latches: &FxHashMap<u32, Signal>,
    error: Signal,
) -> io::Result<()> {
    let n_signals = inputs.len() + outputs.len();
    let n_latches = latches.len();
    let m_vars = circuit.count_nonterminals();

    writeln!(
        w,
        "aag {} {} {} 1 {}",
        m_vars + n_signals + n_latches,
        n_signals,
        n_latches,
        m_vars
    )?;

    // Inputs are numbered 2, 4, .. in declaration order (inputs then
    // outputs), matching the allocation the automaton lifter performed.
    for i in 1..=n_signals {
        writeln!(w, "{}", 2 * i)?;
    }

    // Every literal row's variable was already fixed at lift time; every
    // gate row gets a fresh variable past the input/output/latch range.
    let mut var_map: FxHashMap<u32, u32> = FxHashMap::default();
    var_map.insert(0, 0);
    var_map.insert(1, 1);
    for (idx, var) in circuit.iter_literals() {
        var_map.insert(idx, var);
    }
    let mut cur_var = 2 * (n_signals + n_latches + 1) as u32;
    for (idx, _, _, _) in circuit.iter_nonterminals() {
        var_map.insert(idx, cur_var);
        cur_var += 2;
    }

    let mut latch_vars: Vec<&u32> = latches.keys().collect();
    latch_vars.sort();
    for &l in &latch_vars {
        let lit = signal_literal(circuit, &var_map, false, latches[l]);
        writeln!(w, "{l} {lit}")?;
    }

    writeln!(w, "{}", signal_literal(circuit, &var_map, false, error))?;

    for (idx, op, l, r) in circuit.iter_nonterminals() {
        let gate_var = var_map[&idx];
        let local_neg = op == Op::Or;
        let left = signal_literal(circuit, &var_map, local_neg, l);
        let right = signal_literal(circuit, &var_map, local_neg, r);
        writeln!(w, "{gate_var} {left} {right}")?;
    }

    let mut cnt = 0;
    for name in inputs {
        writeln!(w, "i{cnt} {name}")?;
        cnt += 1;
    }
    for name in outputs {
        writeln!(w, "i{cnt} controllable_{name}")?;
        cnt += 1;
    }
    for (cnt, _) in latch_vars.iter().enumerate() {
        writeln!(w, "l{cnt} latch{cnt}")?;
    }
    writeln!(w, "o0 error")?;

    Ok(())
}

/// The AIGER literal for `sig` as seen from a context with the given local
/// negation (whether the referencing gate is itself an `Or`, which under the
/// all-AND-gate De Morgan encoding means every reference to it is flipped).
fn signal_literal(circuit: &Circuit, var_map: &FxHashMap<u32, u32>, local_neg: bool, sig: Signal) -> u32 {
    let mapped = var_map[&sig.index()];
    let child_is_or = circuit.gate(sig.index()).map(|(op, _, _)| op == Op::Or).unwrap_or(false);
    if local_neg != (child_is_or != sig.neg()) {
        mapped ^ 1
    } else {
        mapped
    }
}
