//! Subtree measurements: height, balance, reachable-node count.

use crate::types::Node;

use super::{get_l, get_r};

/// Height in edges of the subtree at `node`: −1 for an absent subtree, 0
/// for a single node. The convention is held crate-wide.
pub fn height<N: Node>(arena: &[N], node: Option<u32>) -> i32 {
    match node {
        None => -1,
        Some(i) => {
            1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)))
        }
    }
}

/// Height of the subtree at `node`, or `None` as soon as any node's child
/// subtrees differ in height by more than one.
fn balanced_height<N: Node>(arena: &[N], node: Option<u32>) -> Option<i32> {
    let Some(i) = node else { return Some(-1) };
    let lh = balanced_height(arena, get_l(arena, i))?;
    let rh = balanced_height(arena, get_r(arena, i))?;
    if (lh - rh).abs() <= 1 {
        Some(1 + lh.max(rh))
    } else {
        None
    }
}

/// Whether every node's left and right subtree heights differ by at most
/// one. Single bottom-up pass; stops at the first imbalance.
pub fn is_balanced<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    balanced_height(arena, root).is_some()
}

fn subtree_size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| subtree_size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| subtree_size_inner(arena, r))
}

/// Number of nodes reachable from `root`.
pub fn subtree_size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| subtree_size_inner(arena, r))
}
