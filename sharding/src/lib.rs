//! 按key在一组命名节点中做确定性的路由：jump、rendezvous、ketama三种一致性hash。
pub mod distribution;
pub mod hash;

mod error;
mod node;

pub use distribution::{
    hash_string_to_bucket, jump_hash, Distribute, Jump, Ketama, Rendezvous, MAX_WEIGHT,
    VNODES_PER_WEIGHT,
};
pub use error::{Error, Result};
pub use hash::{Hash, HashKey, Hasher};
pub use node::{Membership, Node};

use std::collections::HashMap;

pub struct Sharding {
    // 实际生效的hash名，未知名字回退后与配置不同
    hash: String,
    distribution: Distribute,
    num: usize,
}

impl Sharding {
    pub fn from(hash_alg: &str, distribution: &str, names: Vec<String>) -> Result<Self> {
        let num = names.len();
        let h = Hasher::from(hash_alg);
        let hash = h.name();
        let d = Distribute::from(distribution, &names, h)?;
        log::info!(
            "sharding: {} shards, hash:{}, distribution:{}",
            num,
            hash,
            d.name()
        );
        Ok(Self {
            hash,
            distribution: d,
            num,
        })
    }
    #[inline(always)]
    pub fn sharding<K: HashKey + ?Sized>(&self, key: &K) -> Result<usize> {
        let idx = self.distribution.index(key)?;
        debug_assert!(idx < self.num);
        Ok(idx)
    }
    #[inline]
    pub fn select<K: HashKey + ?Sized>(&self, key: &K) -> Result<&str> {
        self.distribution.select(key)
    }
    // key: sharding idx
    // value: 是keys idx列表
    #[inline]
    pub fn shardings<K: HashKey>(&self, keys: &[K]) -> Result<HashMap<usize, Vec<usize>>> {
        let mut shards: HashMap<usize, Vec<usize>> = HashMap::with_capacity(self.num);
        for (ki, key) in keys.iter().enumerate() {
            let idx = self.sharding(key)?;
            shards.entry(idx).or_default().push(ki);
        }
        Ok(shards)
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.num
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num == 0
    }
    #[inline]
    pub fn hash(&self) -> &str {
        &self.hash
    }
    #[inline]
    pub fn distribution(&self) -> &Distribute {
        &self.distribution
    }
}
