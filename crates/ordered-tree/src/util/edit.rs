//! Structural edits: leaf attachment and the three-case removal.

use crate::types::{KvNode, Node};

use super::nav::first;
use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Attaches `node` as the left child of `parent`. The slot must be empty.
pub fn attach_left<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_l(arena, parent).is_none());
    set_l(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Attaches `node` as the right child of `parent`. The slot must be empty.
pub fn attach_right<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    debug_assert!(get_r(arena, parent).is_none());
    set_r(arena, parent, Some(node));
    set_p(arena, node, Some(parent));
}

/// Mutable references to two distinct arena slots.
fn pair_mut<N>(arena: &mut [N], a: u32, b: u32) -> (&mut N, &mut N) {
    debug_assert_ne!(a, b);
    let (a, b) = (a as usize, b as usize);
    if a < b {
        let (lo, hi) = arena.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = arena.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

/// Unlinks a node with at most one child, splicing that child (if any)
/// into its position. Returns the new root.
///
/// The owning slot is the parent's child link, or the root when `node` has
/// no parent; the root case must be resolved here because a node carries
/// no back-reference to the slot that owns it.
fn unlink<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let p = get_p(arena, node);
    let child = get_l(arena, node).or(get_r(arena, node));

    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    if let Some(c) = child {
        set_p(arena, c, p);
    }
    match p {
        None => child,
        Some(p) => {
            if get_l(arena, p) == Some(node) {
                set_l(arena, p, child);
            } else {
                set_r(arena, p, child);
            }
            root
        }
    }
}

/// Removes the node at `node` from the tree rooted at `root`.
///
/// Three cases, selected by the node's children:
///
/// - no children: the owning slot is cleared;
/// - one child: the child is spliced into the node's position;
/// - two children: the in-order successor (leftmost of the right subtree)
///   donates its key and value to `node`, whose own links stay untouched,
///   and the successor, which has no left child by construction, is
///   unlinked from its old position via the first two cases.
///
/// Returns `(new_root, vacated)`: the root after surgery and the arena
/// index whose slot left the tree. In the two-child case the vacated slot
/// is the successor's, and it holds the removed payload.
pub fn remove<N, K, V>(arena: &mut [N], root: Option<u32>, node: u32) -> (Option<u32>, u32)
where
    N: KvNode<K, V>,
{
    if let (Some(_), Some(r)) = (get_l(arena, node), get_r(arena, node)) {
        let succ = first(arena, Some(r)).expect("right subtree is non-empty");
        let (target, donor) = pair_mut(arena, node, succ);
        target.swap_payload(donor);
        (unlink(arena, root, succ), succ)
    } else {
        (unlink(arena, root, node), node)
    }
}
