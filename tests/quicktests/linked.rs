use linked_bst::{Error, Tree};

use crate::Op;

/// Applies a set of operations to a tree and a sorted `Vec` holding the same multiset. Returns
/// `None` as soon as a removal disagrees with the model.
fn do_ops<T>(ops: &[Op<T>], mut bst: Tree<T>, model: &mut Vec<T>) -> Option<Tree<T>>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                bst.add(x.clone());
                let pos = model.partition_point(|m| m <= x);
                model.insert(pos, x.clone());
            }
            Op::Remove(x) => {
                let removed = bst.remove(x);
                match model.binary_search(x) {
                    Ok(pos) => {
                        model.remove(pos);
                        if removed.as_ref() != Ok(x) {
                            return None;
                        }
                    }
                    Err(_) => {
                        if removed.is_ok() {
                            return None;
                        }
                    }
                }
            }
            Op::Rebalance => bst.rebalance(),
        }
    }

    Some(bst)
}

fn is_sorted<T: Ord>(xs: &[&T]) -> bool {
    xs.windows(2).all(|w| w[0] <= w[1])
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut model = Vec::new();
        match do_ops(&ops, Tree::new(), &mut model) {
            Some(tree) => tree.len() == model.len() && tree.inorder().into_iter().eq(model.iter()),
            None => false,
        }
    }

    fn inorder_is_sorted(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        is_sorted(&tree.inorder())
    }

    fn size_matches_traversals(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        for delete in &deletes {
            let _ = tree.remove(delete);
        }

        tree.len() == tree.iter().count()
            && tree.len() == tree.inorder().len()
            && tree.len() == tree.postorder().len()
            && tree.len() == tree.levelorder().len()
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x) == Some(x) && tree.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut still_present = xs;
        for delete in &deletes {
            let expected = still_present.iter().position(|x| x == delete);
            let removed = tree.remove(delete);
            match expected {
                Some(pos) => {
                    still_present.swap_remove(pos);
                    if removed != Ok(*delete) {
                        return false;
                    }
                }
                None => {
                    if removed != Err(Error::KeyNotFound) {
                        return false;
                    }
                }
            }
        }

        still_present.iter().all(|x| tree.find(x).is_some())
            && deletes
                .iter()
                .filter(|x| !still_present.contains(x))
                .all(|x| tree.find(x).is_none())
    }

    fn rebalance_preserves_content(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        let before: Vec<i8> = tree.inorder().into_iter().copied().collect();
        let len = tree.len();

        tree.rebalance();
        let after: Vec<i8> = tree.inorder().into_iter().copied().collect();

        before == after && tree.len() == len && is_sorted(&tree.inorder())
    }

    fn range_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut expected: Vec<i8> = xs.into_iter().filter(|x| low <= *x && *x <= high).collect();
        expected.sort();

        tree.range_find(&low, &high).into_iter().eq(expected.iter())
    }

    fn neighbours_match_sorted_model(xs: Vec<i8>, probe: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort();

        let successor = sorted.iter().find(|x| **x > probe);
        let predecessor = sorted.iter().rev().find(|x| **x < probe);

        tree.successor(&probe) == successor && tree.predecessor(&probe) == predecessor
    }
}
