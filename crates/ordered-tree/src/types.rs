//! Link and payload trait definitions.
//!
//! Nodes live in a `Vec`-backed arena and every "pointer" is an
//! `Option<u32>` index into it. Tree-manipulation functions take the arena
//! as a slice and work with indices, so the parent back-reference is pure
//! bookkeeping: it can never become an ownership edge, and locating the
//! owning slot of a node is a direct index inspection.

/// Parent/child links of an arena node (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by map/tree structures: negative when `a` orders before
/// `b`, zero when equal, positive when after.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Key/value payload interface of a map node.
///
/// The value is handed out as `Option` because a vacated arena slot keeps
/// its node storage (and stale key) until the index is recycled; only
/// reachable slots hold a value.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> Option<&V>;
    fn value_mut(&mut self) -> Option<&mut V>;
    fn set_value(&mut self, value: V);
    fn take_value(&mut self) -> Option<V>;

    /// Exchanges the stored key and value with `other`, leaving the links
    /// of both nodes untouched.
    fn swap_payload(&mut self, other: &mut Self);
}
