use core::mem;

use crate::types::{KvNode, Node};

/// Arena node: three `Option<u32>` links plus the key/value payload.
///
/// The value is wrapped in `Option` to allow by-value deletes in an
/// arena-backed representation without moving nodes out of the arena.
#[derive(Clone, Debug)]
pub struct TreeNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: Option<V>,
}

impl<K, V> TreeNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v: Some(v),
        }
    }
}

impl<K, V> Node for TreeNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> KvNode<K, V> for TreeNode<K, V> {
    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> Option<&V> {
        self.v.as_ref()
    }

    fn value_mut(&mut self) -> Option<&mut V> {
        self.v.as_mut()
    }

    fn set_value(&mut self, value: V) {
        self.v = Some(value);
    }

    fn take_value(&mut self) -> Option<V> {
        self.v.take()
    }

    fn swap_payload(&mut self, other: &mut Self) {
        mem::swap(&mut self.k, &mut other.k);
        mem::swap(&mut self.v, &mut other.v);
    }
}
