use std::collections::HashSet;
use std::fmt::Write;

use crate::hash::{digest_words, HashKey, POINTS_PER_HASH};
use crate::{Error, Membership, Node, Result};

/// 每单位权重的副本数，每个副本的md5切出POINTS_PER_HASH个虚拟节点。
/// 目前是固定值，将来可以考虑做成参数。
pub const REPLICAS_PER_WEIGHT: u32 = 40;
pub const VNODES_PER_WEIGHT: usize = REPLICAS_PER_WEIGHT as usize * POINTS_PER_HASH;
/// 单个节点的权重上限，对应 MAX_WEIGHT * VNODES_PER_WEIGHT 个虚拟节点
pub const MAX_WEIGHT: u32 = 1 << 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VirtualNode {
    hash: u32,
    owner: usize,
}

/// ketama一致性hash环。构建后不可变，成员变化时重新build，再整体替换。
#[derive(Debug, Clone)]
pub struct Ketama<T = ()> {
    // 按hash升序；hash相同的按构建顺序
    vnodes: Vec<VirtualNode>,
    nodes: Vec<Node<T>>,
}

impl<T> Ketama<T> {
    pub fn build(nodes: Vec<Node<T>>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::EmptyNodeSet);
        }
        let mut total = 0usize;
        {
            let mut labels = HashSet::with_capacity(nodes.len());
            for node in &nodes {
                if node.weight() == 0 {
                    return Err(Error::ZeroWeight(node.label().to_string()));
                }
                if node.weight() > MAX_WEIGHT {
                    return Err(Error::WeightTooLarge(node.label().to_string()));
                }
                if !labels.insert(node.label()) {
                    return Err(Error::DuplicateLabel(node.label().to_string()));
                }
                total = (node.weight() as usize)
                    .checked_mul(VNODES_PER_WEIGHT)
                    .and_then(|n| total.checked_add(n))
                    .ok_or_else(|| Error::WeightTooLarge(node.label().to_string()))?;
            }
        }

        let mut vnodes = Vec::with_capacity(total);
        let mut replica = String::new();
        for (owner, node) in nodes.iter().enumerate() {
            let replicas = node.weight() as u64 * REPLICAS_PER_WEIGHT as u64;
            for i in 0..replicas {
                replica.clear();
                let _ = write!(replica, "{}-{}", node.label(), i);
                for hash in digest_words(replica.as_str()) {
                    vnodes.push(VirtualNode { hash, owner });
                }
            }
        }
        vnodes.sort_by_key(|v| v.hash);
        log::debug!(
            "ketama ring built: {} nodes, {} vnodes",
            nodes.len(),
            vnodes.len()
        );
        Ok(Self { vnodes, nodes })
    }

    /// key在环上的位置：md5的第0组
    #[inline]
    pub fn position<K: HashKey + ?Sized>(key: &K) -> u32 {
        digest_words(key)[0]
    }

    /// 返回命中的真实节点在build时传入列表中的下标
    pub fn index<K: HashKey + ?Sized>(&self, key: &K) -> Result<usize> {
        match self.nodes.len() {
            0 => Err(Error::EmptyNodeSet),
            // 只有一个真实节点时无需计算hash
            1 => Ok(0),
            _ => {
                let hash = Self::position(key);
                // 第一个 >= hash 的虚拟节点；都小于hash时绕回环首
                let idx = self.vnodes.partition_point(|v| v.hash < hash);
                self.vnodes
                    .get(idx)
                    .or_else(|| self.vnodes.first())
                    .map(|v| v.owner)
                    .ok_or(Error::EmptyNodeSet)
            }
        }
    }
    #[inline]
    pub fn select<K: HashKey + ?Sized>(&self, key: &K) -> Result<&str> {
        self.select_node(key).map(|n| n.label())
    }
    #[inline]
    pub fn select_node<K: HashKey + ?Sized>(&self, key: &K) -> Result<&Node<T>> {
        let idx = self.index(key)?;
        Ok(&self.nodes[idx])
    }
    #[inline]
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    #[inline]
    pub fn vnode_count(&self) -> usize {
        self.vnodes.len()
    }
}

// 环不支持原地增删，每次变更都基于新的节点列表重建
impl<T: Clone> ds::Update<Membership<T>> for Ketama<T> {
    type Error = Error;
    fn update(&mut self, op: &Membership<T>) -> Result<()> {
        let mut nodes = self.nodes.clone();
        match op {
            Membership::Add(node) => nodes.push(node.clone()),
            Membership::Remove(label) => {
                let idx = nodes
                    .iter()
                    .position(|n| n.label() == label.as_str())
                    .ok_or_else(|| Error::UnknownNode(label.to_string()))?;
                nodes.remove(idx);
            }
        }
        *self = Self::build(nodes)?;
        Ok(())
    }
}
