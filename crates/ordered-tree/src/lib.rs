//! Arena-backed ordered key/value map over a parent-linked binary search
//! tree.
//!
//! The container is a plain BST (no rebalancing discipline) with
//! overwrite-on-duplicate-key insertion, three-case deletion with
//! in-order-successor splicing, floor/ceiling queries, and visitor-based
//! traversals. Instead of owning pointers, all node links (`p` / `l` /
//! `r`) are `Option<u32>` indices into a `Vec`-backed arena: a node is
//! reachable through exactly one link (the root field or a parent's child
//! slot), the parent back-reference is pure navigation, and teardown is a
//! flat `Vec` drop regardless of tree depth.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] / [`KvNode`] link and payload traits |
//! | [`tree_node`] | [`TreeNode`], the arena node |
//! | [`util::nav`] | `first`, `last`, `next`, `prev` |
//! | [`util::search`] | `find`, floor/ceiling descent, `depth_of` |
//! | [`util::edit`] | attachment and three-case removal |
//! | [`util::measure`] | `height`, `is_balanced`, `subtree_size` |
//! | [`traverse`] | in/pre/post/level-order visitors |
//! | [`tree`] | [`OrderedTree`], the map wrapper |
//!
//! The tree is single-threaded: callers needing concurrent access must
//! serialize every operation at the boundary, including read-only
//! traversal concurrent with mutation.

pub mod error;
pub mod traverse;
pub mod tree;
pub mod tree_node;
pub mod types;
pub mod util;

pub use error::TreeError;
pub use traverse::{in_order, level_order, post_order, pre_order};
pub use tree::{Iter, OrderedTree};
pub use tree_node::TreeNode;
pub use types::{Comparator, KvNode, Node};
pub use util::{
    attach_left, attach_right, depth_of, find, find_or_next_higher, find_or_next_lower, first,
    height, is_balanced, last, next, prev, remove, subtree_size,
};
