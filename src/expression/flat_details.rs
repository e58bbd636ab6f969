use smallvec::{smallvec, SmallVec};

use crate::{definitions::N_PAIRS_ON_STACK, operators::Operation};

pub type PairVec = SmallVec<[(Operation, f64); N_PAIRS_ON_STACK]>;

type NumberStack = SmallVec<[f64; N_PAIRS_ON_STACK]>;
type OpStack = SmallVec<[Operation; N_PAIRS_ON_STACK]>;

fn apply_top(numbers: &mut NumberStack, ops: &mut OpStack) {
    if let (Some(op), Some(right)) = (ops.pop(), numbers.pop()) {
        if let Some(left) = numbers.last_mut() {
            *left = op.evaluate(*left, right);
        }
    }
}

/// Reduces `first op_1 n_1 op_2 n_2 ...` to one number. Operations with higher priority
/// are applied first, operations with equal priority from left to right.
///
/// There is always one number more on the number stack than operations on the
/// operation stack. Before an operation is pushed, all pending operations with at least
/// its priority are applied, hence priorities on the operation stack strictly increase
/// from bottom to top and the remaining operations can be applied from the top.
pub fn eval_flat(first: f64, pairs: &[(Operation, f64)]) -> f64 {
    let mut numbers: NumberStack = smallvec![first];
    let mut ops = OpStack::new();
    for &(op, n) in pairs {
        while ops
            .last()
            .map_or(false, |top| top.priority() >= op.priority())
        {
            apply_top(&mut numbers, &mut ops);
        }
        ops.push(op);
        numbers.push(n);
    }
    while !ops.is_empty() {
        apply_top(&mut numbers, &mut ops);
    }
    numbers[0]
}
