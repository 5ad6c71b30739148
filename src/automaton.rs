//! Non-deterministic Büchi automaton model and the automaton lifter that
//! turns one into the latch and error nets of a symbolic k-co-Büchi safety
//! game.

use fxhash::FxHashMap;

use crate::circuit::Circuit;
use crate::edge_label::compile_label;
use crate::signal::Signal;

/// A labeled transition between two automaton states.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// A non-deterministic Büchi automaton with string-named states.
#[derive(Debug, Clone, Default)]
pub struct Nba {
    pub states: Vec<String>,
    pub accepting: Vec<String>,
    pub edges: Vec<Edge>,
}

impl Nba {
    /// The state renamed "initial" by the NBA parser.
    pub fn initial_state(&self) -> &str {
        "initial"
    }
}

/// Output of lifting one automaton into the circuit: a next-state function
/// per latch and the disjunctive error signal.
pub struct LiftedGame {
    pub latch_net: FxHashMap<u32, Signal>,
    pub error_net: Signal,
    pub next_var_offset: u32,
}

/// Lift `nba` into a k-co-Büchi safety game over `circuit`.
///
/// `var_offset`, when given, is the first free AIG variable number for this
/// automaton's latches (used to keep successive automata's latch ranges
/// disjoint in compositional mode, while sharing the input/output range).
pub fn lift(
    circuit: &mut Circuit,
    inputs: &[String],
    outputs: &[String],
    k: u32,
    nba: &Nba,
    var_offset: Option<u32>,
) -> LiftedGame {
    // STEP 2: assign inputs and outputs a variable number.
    let mut free_var: u32 = 2;
    let mut var_map: FxHashMap<String, u32> = FxHashMap::default();
    for name in inputs.iter().chain(outputs.iter()) {
        var_map.insert(name.clone(), free_var);
        free_var += 2;
    }
    if let Some(offset) = var_offset {
        assert!(free_var <= offset, "var_offset must leave room for inputs/outputs");
        free_var = offset;
    }

    // Reserve one latch per (state, counter) pair, counter in 0..=k+1.
    let mut state_latch_map: FxHashMap<(String, u32), u32> = FxHashMap::default();
    let mut latch_net: FxHashMap<u32, Signal> = FxHashMap::default();
    for state in &nba.states {
        for i in 0..=(k + 1) {
            state_latch_map.insert((state.clone(), i), free_var);
            latch_net.insert(free_var, Signal::FALSE);
            free_var += 2;
        }
    }

    // STEP 3: the all-zero latch valuation is the initial state.
    let mut all_off = Signal::TRUE;
    for &latch_var in state_latch_map.values() {
        let latch_sig = circuit.literal(latch_var);
        let not_latch = circuit.not(latch_sig);
        all_off = circuit.and(all_off, not_latch);
    }
    let init_latch = state_latch_map[&(nba.initial_state().to_string(), 0)];
    {
        let cur = latch_net[&init_latch];
        let updated = circuit.or(cur, all_off);
        latch_net.insert(init_latch, updated);
    }

    let accepting: std::collections::HashSet<&str> =
        nba.accepting.iter().map(String::as_str).collect();

    for edge in &nba.edges {
        let input_net = compile_label(circuit, &edge.label, &var_map);
        for i in 0..=(k + 1) {
            let j = if accepting.contains(edge.to.as_str()) {
                (i + 1).min(k + 1)
            } else {
                i
            };
            let from_latch = state_latch_map[&(edge.from.clone(), i)];
            let to_latch = state_latch_map[&(edge.to.clone(), j)];
            let from_sig = circuit.literal(from_latch);
            let term = circuit.and(from_sig, input_net);
            let cur = latch_net[&to_latch];
            let updated = circuit.or(cur, term);
            latch_net.insert(to_latch, updated);
        }
    }

    // STEP 4: the error signal is the disjunction of every counter == k+1 latch.
    let mut error_net = Signal::FALSE;
    for state in &nba.states {
        let latch_var = state_latch_map[&(state.clone(), k + 1)];
        let sig = circuit.literal(latch_var);
        error_net = circuit.or(error_net, sig);
    }

    LiftedGame {
        latch_net,
        error_net,
        next_var_offset: free_var,
    }
}
