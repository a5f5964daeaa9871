//! Rendezvous (highest random weight) hashing.
//!
//! 每个节点对key独立打分，分数最高者胜出。节点之间的分数互不影响，因此删除节点x时，
//! 只有原本落在x上的key会迁移；新增节点只会抢走在它上面得分更高的key。
use std::collections::HashMap;

use crate::hash::{Hash, HashKey, Hasher};
use crate::{Error, Membership, Node, Result};

const SCRAMBLE_MULTIPLIER: u64 = 2685821657736338717;

/// xorshift* 混淆，打散key hash与节点hash之间的相关性
#[inline(always)]
pub fn scramble(mut x: u64) -> u64 {
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    x.wrapping_mul(SCRAMBLE_MULTIPLIER)
}

#[derive(Debug, Clone)]
struct Entry<T> {
    node: Node<T>,
    hash: u64,
}

/// entries的顺序即遍历顺序，分数相同时取下标小的；index记录label到下标的映射，
/// 二者只在add/remove中同时更新。
///
/// 所有节点等权，权重不参与打分；与ketama一致，权重为0的节点被拒绝。
#[derive(Debug, Clone)]
pub struct Rendezvous<T = (), H = Hasher> {
    entries: Vec<Entry<T>>,
    index: HashMap<String, usize>,
    hasher: H,
}

impl<H: Hash> Rendezvous<(), H> {
    pub fn new<S: AsRef<str>>(labels: &[S], hasher: H) -> Result<Self> {
        Self::with_nodes(labels.iter().map(|l| Node::from(l.as_ref())), hasher)
    }
    #[inline]
    pub fn add(&mut self, label: &str) -> Result<()> {
        self.add_node(Node::from(label))
    }
}

impl<T, H: Hash> Rendezvous<T, H> {
    pub fn with_nodes<I>(nodes: I, hasher: H) -> Result<Self>
    where
        I: IntoIterator<Item = Node<T>>,
    {
        let nodes = nodes.into_iter();
        let (lower, _) = nodes.size_hint();
        let mut r = Self {
            entries: Vec::with_capacity(lower),
            index: HashMap::with_capacity(lower),
            hasher,
        };
        for node in nodes {
            r.insert(node)?;
        }
        if r.entries.is_empty() {
            return Err(Error::EmptyNodeSet);
        }
        log::debug!("rendezvous built with {} nodes", r.entries.len());
        Ok(r)
    }

    fn insert(&mut self, node: Node<T>) -> Result<()> {
        if node.weight() == 0 {
            return Err(Error::ZeroWeight(node.label().to_string()));
        }
        if self.index.contains_key(node.label()) {
            return Err(Error::DuplicateLabel(node.label().to_string()));
        }
        let hash = self.hasher.hash(node.label());
        self.index.insert(node.label().to_string(), self.entries.len());
        self.entries.push(Entry { node, hash });
        Ok(())
    }

    /// 追加节点，其余节点的hash不受影响
    pub fn add_node(&mut self, node: Node<T>) -> Result<()> {
        self.insert(node)?;
        log::info!(
            "rendezvous node added, {} nodes now",
            self.entries.len()
        );
        Ok(())
    }

    /// 删除节点：用最后一个元素填补空位，并更新被移动元素的下标
    pub fn remove(&mut self, label: &str) -> Result<Node<T>> {
        let idx = self
            .index
            .remove(label)
            .ok_or_else(|| Error::UnknownNode(label.to_string()))?;
        let removed = self.entries.swap_remove(idx);
        if let Some(moved) = self.entries.get(idx) {
            if let Some(i) = self.index.get_mut(moved.node.label()) {
                *i = idx;
            }
        }
        log::info!(
            "rendezvous node {} removed, {} nodes left",
            label,
            self.entries.len()
        );
        Ok(removed.node)
    }

    /// 返回得分最高的节点下标
    pub fn index<K: HashKey + ?Sized>(&self, key: &K) -> Result<usize> {
        let khash = self.hasher.hash(key);
        let mut entries = self.entries.iter().enumerate();
        let (mut midx, first) = entries.next().ok_or(Error::EmptyNodeSet)?;
        let mut mhash = scramble(khash ^ first.hash);
        for (i, e) in entries {
            let h = scramble(khash ^ e.hash);
            if h > mhash {
                midx = i;
                mhash = h;
            }
        }
        Ok(midx)
    }
    #[inline]
    pub fn select<K: HashKey + ?Sized>(&self, key: &K) -> Result<&str> {
        self.select_node(key).map(|n| n.label())
    }
    #[inline]
    pub fn select_node<K: HashKey + ?Sized>(&self, key: &K) -> Result<&Node<T>> {
        let idx = self.index(key)?;
        Ok(&self.entries[idx].node)
    }
    #[inline]
    pub fn node(&self, label: &str) -> Option<&Node<T>> {
        self.index.get(label).map(|&i| &self.entries[i].node)
    }
    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.node.label())
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone, H: Hash> ds::Update<Membership<T>> for Rendezvous<T, H> {
    type Error = Error;
    fn update(&mut self, op: &Membership<T>) -> Result<()> {
        match op {
            Membership::Add(node) => self.add_node(node.clone()),
            Membership::Remove(label) => self.remove(label).map(|_| ()),
        }
    }
}
