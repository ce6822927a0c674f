//! Model-based equivalence checking against a sorted-`Vec` multiset.
//!
//! Shared between the proptest suite and the fuzz targets.

use arbitrary::Arbitrary;
use proptest::strategy::{Just, Strategy};

use crate::RbTree;

/// A value operand, resolved against the current tree contents.
///
/// `Index` picks an existing value (so removals and lookups actually hit),
/// while `Random` is an arbitrary value that usually misses.
#[derive(Copy, Clone, Debug, Arbitrary)]
pub enum ItemValue {
    Index(usize),
    Random(u32),
}

proptest::prop_compose! {
    fn index_strategy()(
        index in 0usize..1000,
    ) -> ItemValue {
        ItemValue::Index(index)
    }
}

proptest::prop_compose! {
    fn random_strategy()(
        random in 0u32..1000,
    ) -> ItemValue {
        ItemValue::Random(random)
    }
}

fn value_strategy() -> impl Strategy<Value = ItemValue> {
    proptest::prop_oneof![index_strategy(), random_strategy()]
}

#[derive(Copy, Clone, Debug, Arbitrary)]
pub enum Op {
    Insert(ItemValue),
    Get(ItemValue),
    Remove(ItemValue),
    First,
    Last,
}

impl Op {
    fn finalize(self, sorted: &[u32]) -> FinalOp {
        fn get_value(v: &[u32], i: ItemValue) -> u32 {
            match i {
                ItemValue::Index(idx) => {
                    if v.is_empty() {
                        idx as u32
                    } else {
                        v[idx % v.len()]
                    }
                }
                ItemValue::Random(v) => v,
            }
        }

        match self {
            Op::Insert(item) => FinalOp::Insert(get_value(sorted, item)),
            Op::Get(item) => FinalOp::Get(get_value(sorted, item)),
            Op::Remove(item) => FinalOp::Remove(get_value(sorted, item)),
            Op::First => FinalOp::First,
            Op::Last => FinalOp::Last,
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum FinalOp {
    Insert(u32),
    Get(u32),
    Remove(u32),
    First,
    Last,
}

pub fn op_strategy() -> impl Strategy<Value = Op> {
    proptest::prop_oneof![
        value_strategy().prop_map(Op::Insert),
        value_strategy().prop_map(Op::Get),
        value_strategy().prop_map(Op::Remove),
        Just(Op::First),
        Just(Op::Last),
    ]
}

/// Runs `ops` against both a sorted-`Vec` multiset model and a [`RbTree`],
/// checking that every observation agrees and that the tree invariants hold
/// after each step.
pub fn run_multiset_equivalence(ops: Vec<Op>) {
    let mut model: Vec<u32> = Vec::with_capacity(ops.len());
    let mut tree: RbTree<u32> = RbTree::new();

    // Duplicates stay in the model; the tree keeps them too.
    fn insert_sorted(v: &mut Vec<u32>, value: u32) {
        let idx = match v.binary_search(&value) {
            Ok(idx) | Err(idx) => idx,
        };
        v.insert(idx, value);
    }

    fn remove_sorted(v: &mut Vec<u32>, value: u32) -> Option<u32> {
        match v.binary_search(&value) {
            Ok(idx) => Some(v.remove(idx)),
            Err(_) => None,
        }
    }

    for (op_id, op) in ops.into_iter().enumerate() {
        let final_op = op.finalize(&model);

        match final_op {
            FinalOp::Insert(value) => {
                insert_sorted(&mut model, value);
                tree.insert(value);
            }

            FinalOp::Get(value) => {
                let from_model = model.binary_search(&value).ok().map(|_| value);
                let from_tree = tree.get(&value).copied();

                assert_eq!(from_model, from_tree, "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::Remove(value) => {
                let from_model = remove_sorted(&mut model, value);
                let from_tree = tree.remove(&value);

                assert_eq!(from_model, from_tree, "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::First => {
                assert_eq!(model.first(), tree.first(), "FinalOp #{op_id}: {op:?}");
            }

            FinalOp::Last => {
                assert_eq!(model.last(), tree.last(), "FinalOp #{op_id}: {op:?}");
            }
        }

        tree.assert_invariants();
        assert_eq!(model.len(), tree.len());
        assert!(model.iter().zip(tree.iter()).all(|(&a, (&b, _))| a == b));

        // The snapshot is a level-order permutation of the model's contents.
        let mut level_order: Vec<u32> = tree.snapshot().map(|(&v, _)| v).collect();
        level_order.sort_unstable();
        assert_eq!(model, level_order);
    }
}
