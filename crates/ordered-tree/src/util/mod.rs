//! Link-level tree algorithms.
//!
//! Everything in this module family is a free function over
//! `(arena, root, …)`, generic over the [`Node`] / [`KvNode`] traits:
//!
//! - [`nav`]: minimum/maximum and successor/predecessor walks;
//! - [`search`]: key lookup, floor/ceiling descent, depth;
//! - [`edit`]: attach and the three-case removal with successor splice;
//! - [`measure`]: height, balance, reachable-node count.
//!
//! [`Node`]: crate::types::Node
//! [`KvNode`]: crate::types::KvNode

pub mod edit;
pub mod measure;
pub mod nav;
pub mod search;

use crate::types::Node;

pub use edit::{attach_left, attach_right, remove};
pub use measure::{height, is_balanced, subtree_size};
pub use nav::{first, last, next, prev};
pub use search::{depth_of, find, find_or_next_higher, find_or_next_lower};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}
