//! Visitor-based traversals.
//!
//! Each traversal accepts a caller-supplied visitor invoked once per
//! reachable node. Visitors receive shared references only; the tree
//! cannot be restructured mid-pass. None of the walks recurse, so a
//! degenerate (chain-shaped) tree cannot overflow the call stack.

use std::collections::VecDeque;

use crate::types::KvNode;
use crate::util::nav::{first, next};
use crate::util::{get_l, get_r};

/// Visits every entry in ascending key order.
///
/// Walks the parent links via [`first`]/[`next`] in O(1) auxiliary space.
pub fn in_order<N, K, V, F>(arena: &[N], root: Option<u32>, mut f: F)
where
    N: KvNode<K, V>,
    F: FnMut(&K, &V),
{
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        let node = &arena[i as usize];
        if let Some(v) = node.value() {
            f(node.key(), v);
        }
        curr = next(arena, i);
    }
}

/// Visits each node before either of its subtrees.
pub fn pre_order<N, K, V, F>(arena: &[N], root: Option<u32>, mut f: F)
where
    N: KvNode<K, V>,
    F: FnMut(&K, &V),
{
    let mut stack = Vec::new();
    if let Some(r) = root {
        stack.push(r);
    }
    while let Some(i) = stack.pop() {
        let node = &arena[i as usize];
        if let Some(v) = node.value() {
            f(node.key(), v);
        }
        // Right first so the left subtree is popped (visited) first.
        if let Some(r) = get_r(arena, i) {
            stack.push(r);
        }
        if let Some(l) = get_l(arena, i) {
            stack.push(l);
        }
    }
}

/// Visits each node after both of its subtrees.
///
/// Two-stack formulation: a node-right-left walk is collected, then
/// replayed in reverse, which yields left-right-node order.
pub fn post_order<N, K, V, F>(arena: &[N], root: Option<u32>, mut f: F)
where
    N: KvNode<K, V>,
    F: FnMut(&K, &V),
{
    let mut stack = Vec::new();
    let mut visit = Vec::new();
    if let Some(r) = root {
        stack.push(r);
    }
    while let Some(i) = stack.pop() {
        visit.push(i);
        if let Some(l) = get_l(arena, i) {
            stack.push(l);
        }
        if let Some(r) = get_r(arena, i) {
            stack.push(r);
        }
    }
    for &i in visit.iter().rev() {
        let node = &arena[i as usize];
        if let Some(v) = node.value() {
            f(node.key(), v);
        }
    }
}

/// Breadth-first walk pairing each entry with its 1-based level: the root
/// sits at level 1, its children at level 2, and so on.
pub fn level_order<N, K, V, F>(arena: &[N], root: Option<u32>, mut f: F)
where
    N: KvNode<K, V>,
    F: FnMut(&K, &V, usize),
{
    let mut queue = VecDeque::new();
    if let Some(r) = root {
        queue.push_back((r, 1));
    }
    while let Some((i, level)) = queue.pop_front() {
        let node = &arena[i as usize];
        if let Some(v) = node.value() {
            f(node.key(), v, level);
        }
        if let Some(l) = get_l(arena, i) {
            queue.push_back((l, level + 1));
        }
        if let Some(r) = get_r(arena, i) {
            queue.push_back((r, level + 1));
        }
    }
}
