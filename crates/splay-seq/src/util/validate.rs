use crate::iter::Iter;
use crate::node::{SeqNode, Summary};
use crate::types::{Element, Node};

use super::{count, get_l, get_r};

/// Checks every structural and aggregate invariant of the tree under
/// `root`:
///
/// - the root has no parent and every child points back to its parent;
/// - every node is `up_to_date`, and its cached summary equals the
///   concatenation of its children's effective summaries around its value;
/// - `pushed_down` holds exactly when the pending state is the identity;
/// - the root summary equals a brute-force summary of the in-order values.
pub fn assert_splay_seq<T: Element>(arena: &[SeqNode<T>], root: Option<u32>) -> Result<(), String> {
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err("Root has parent".to_string());
    }

    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        let node = &arena[i as usize];
        for child in [get_l(arena, i), get_r(arena, i)].into_iter().flatten() {
            if arena[child as usize].p() != Some(i) {
                return Err(format!("Broken parent link under node {i}"));
            }
            stack.push(child);
        }

        if node.pushed_down != node.lazy.is_identity() {
            return Err(format!(
                "Node {i}: pushed_down={} but pending state is {:?}",
                node.pushed_down, node.lazy
            ));
        }
        if !node.up_to_date {
            return Err(format!("Node {i} is not up to date"));
        }

        let mut expected = Summary::leaf(node.value);
        if let Some(l) = node.l {
            expected = Summary::concat(&arena[l as usize].effective(), &expected);
        }
        if let Some(r) = node.r {
            expected = Summary::concat(&expected, &arena[r as usize].effective());
        }
        if expected != node.agg {
            return Err(format!(
                "Node {i}: cached summary {:?}, recomputed {:?}",
                node.agg, expected
            ));
        }
    }

    let total = arena[root as usize].effective();
    let linked = count(arena, Some(root));
    if total.size != linked {
        return Err(format!("Root size {} but {linked} nodes are linked", total.size));
    }

    let brute = Iter::new(arena, Some(root))
        .map(Summary::leaf)
        .reduce(|acc, s| Summary::concat(&acc, &s));
    if brute != Some(total) {
        return Err(format!("Root summary {total:?}, in-order values give {brute:?}"));
    }

    Ok(())
}
