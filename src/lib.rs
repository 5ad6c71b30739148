//! Translates LTL specifications into AIG-encoded k-co-Büchi safety games.
//!
//! A specification is split into a controllable/uncontrollable signal
//! partition and one or more LTL formulas in Wring syntax. Each formula is
//! negated and handed to an external LTL-to-automaton tool; the resulting
//! non-deterministic Büchi automaton is lifted into a symbolic safety game
//! with a bounded co-Büchi counter per state, and the game is emitted as an
//! ASCII AIGER file for a downstream realizability checker.
//!
//! The circuit engine ([`circuit`], [`signal`], [`rewrite`], [`depends`]) is
//! a small hash-consed AND/OR graph with an invariant that negation only
//! ever labels an edge into a literal, never into another gate.

mod aig_writer;
mod automaton;
mod circuit;
mod depends;
mod edge_label;
mod error;
mod external;
mod ltlfile;
mod nba_parser;
mod partition;
mod rewrite;
mod signal;

pub mod cli;

pub use aig_writer::write_aig;
pub use automaton::{lift, Edge, LiftedGame, Nba};
pub use circuit::{Circuit, Op};
pub use depends::depends;
pub use edge_label::compile_label;
pub use error::Error;
pub use external::{run_checker, run_ltl2ba, Realizability};
pub use ltlfile::{extract_assumptions_and_guarantees, negate_ltl2ba, read_formulae, wring_to_ltl2ba};
pub use nba_parser::parse as parse_nba;
pub use partition::{read_partition, Partition};
pub use rewrite::{push_neg, remove_neg};
pub use signal::Signal;
