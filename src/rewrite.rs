//! Negation rewrites over the circuit, pushed down to leaves.
//!
//! Both rewrites below share one explicit-stack, post-order traversal
//! memoized on `(node index, requested sign)`; they differ only in how a
//! terminal is rewritten once a negation reaches it. An explicit stack is
//! used instead of plain recursion so that deep circuits don't blow the
//! call stack.

use fxhash::{FxHashMap, FxHashSet};

use crate::circuit::Circuit;
use crate::signal::Signal;

enum Frame {
    Enter(u32, bool),
    Exit(u32, bool),
}

/// Rewrite `u` to NNF and every occurrence, to the given `leaf` rule applied
/// once a negation has been pushed all the way to a literal.
fn rewrite_signed(
    circuit: &mut Circuit,
    u: Signal,
    mut leaf: impl FnMut(&mut Circuit, u32, bool) -> Signal,
) -> (Signal, FxHashSet<(u32, bool)>) {
    let mut memo: FxHashMap<(u32, bool), Signal> = FxHashMap::default();
    let mut used: FxHashSet<(u32, bool)> = FxHashSet::default();
    let mut stack = vec![Frame::Enter(u.index(), u.neg())];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(idx, neg) => {
                if memo.contains_key(&(idx, neg)) {
                    continue;
                }
                if let Some(var) = circuit.literal_var(idx) {
                    used.insert((var, neg));
                    let sig = leaf(circuit, idx, neg);
                    memo.insert((idx, neg), sig);
                } else if circuit.is_terminal(idx) {
                    // constant row
                    let val = (idx == 1) ^ neg;
                    memo.insert((idx, neg), Signal::constant(val));
                } else {
                    let (_, l, r) = circuit.gate(idx).unwrap();
                    let flip_l = l.neg() ^ neg;
                    let flip_r = r.neg() ^ neg;
                    stack.push(Frame::Exit(idx, neg));
                    stack.push(Frame::Enter(r.index(), flip_r));
                    stack.push(Frame::Enter(l.index(), flip_l));
                }
            }
            Frame::Exit(idx, neg) => {
                if memo.contains_key(&(idx, neg)) {
                    continue;
                }
                let (op, l, r) = circuit.gate(idx).unwrap();
                let flip_l = l.neg() ^ neg;
                let flip_r = r.neg() ^ neg;
                let effective_op = if neg { op.dual() } else { op };
                let pushed_l = *memo.get(&(l.index(), flip_l)).unwrap();
                let pushed_r = *memo.get(&(r.index(), flip_r)).unwrap();
                let result = circuit.mk(effective_op, pushed_l, pushed_r);
                memo.insert((idx, neg), result);
            }
        }
    }

    let result = *memo.get(&(u.index(), u.neg())).unwrap();
    (result, used)
}

/// Push every negation in `u` down to its literals, rebuilding the DAG with
/// shared structure via the circuit's own hash-consing. Returns the
/// rewritten signal and the set of `(variable, sign)` pairs reached.
pub fn push_neg(circuit: &mut Circuit, u: Signal) -> (Signal, FxHashSet<(u32, bool)>) {
    rewrite_signed(circuit, u, |circuit, idx, neg| {
        if neg {
            circuit.not(Signal::from_index(idx))
        } else {
            Signal::from_index(idx)
        }
    })
}

/// Monotonize `u` with respect to `swap`: every negated occurrence of a
/// variable in `swap`'s domain is replaced by a fresh, unnegated literal for
/// its image. Variables outside `swap` keep their negation untouched.
pub fn remove_neg(
    circuit: &mut Circuit,
    u: Signal,
    swap: &FxHashMap<u32, u32>,
) -> Signal {
    rewrite_signed(circuit, u, |circuit, idx, neg| {
        let var = circuit.literal_var(idx).expect("leaf rule only called on literals");
        if neg {
            if let Some(&fresh) = swap.get(&var) {
                circuit.literal(fresh)
            } else {
                !Signal::from_index(idx)
            }
        } else {
            Signal::from_index(idx)
        }
    })
    .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Circuit;

    #[test]
    fn test_push_neg_identity_on_positive() {
        let mut c = Circuit::new();
        let a = c.literal(0);
        let b = c.literal(1);
        let and_ab = c.and(a, b);
        let (pushed, used) = push_neg(&mut c, and_ab);
        assert_eq!(pushed, and_ab);
        assert!(used.contains(&(0, false)));
        assert!(used.contains(&(1, false)));
    }

    #[test]
    fn test_push_neg_de_morgan_nested() {
        let mut c = Circuit::new();
        let a = c.literal(0);
        let b = c.literal(1);
        let cc = c.literal(2);
        let inner = c.and(a, b);
        let outer = c.and(inner, cc);
        let not_outer = c.not(outer);
        let (pushed, used) = push_neg(&mut c, not_outer);
        // not(and(and(a,b),c)) = or(or(not a, not b), not c)
        let expected = c.or(c.or(c.not(a), c.not(b)), c.not(cc));
        assert_eq!(pushed, expected);
        assert!(used.contains(&(0, true)));
        assert!(used.contains(&(1, true)));
        assert!(used.contains(&(2, true)));
    }

    #[test]
    fn test_push_neg_idempotent() {
        let mut c = Circuit::new();
        let a = c.literal(0);
        let b = c.literal(1);
        let or_ab = c.or(a, b);
        let (p1, _) = push_neg(&mut c, or_ab);
        let (p2, _) = push_neg(&mut c, p1);
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_remove_neg_substitutes_only_swapped_negated_vars() {
        let mut c = Circuit::new();
        let a = c.literal(0);
        let b = c.literal(1);
        let not_a = c.not(a);
        let not_b = c.not(b);
        let formula = c.and(not_a, not_b);
        let mut swap = FxHashMap::default();
        swap.insert(0u32, 100u32);
        let rewritten = remove_neg(&mut c, formula, &swap);
        let fresh_100 = c.literal(100);
        let expected = c.and(fresh_100, not_b);
        assert_eq!(rewritten, expected);
    }

    #[test]
    fn test_remove_neg_leaves_unswapped_vars_negated() {
        let mut c = Circuit::new();
        let a = c.literal(0);
        let not_a = c.not(a);
        let swap = FxHashMap::default();
        let rewritten = remove_neg(&mut c, not_a, &swap);
        assert_eq!(rewritten, not_a);
    }
}
