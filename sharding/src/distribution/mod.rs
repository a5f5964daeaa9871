mod jump;
mod ketama;
mod rendezvous;

pub use jump::{hash_string_to_bucket, jump_hash, Jump};
pub use ketama::{Ketama, MAX_WEIGHT, REPLICAS_PER_WEIGHT, VNODES_PER_WEIGHT};
pub use rendezvous::{scramble, Rendezvous};

use crate::hash::{HashKey, Hasher};
use crate::{Node, Result};

#[derive(Debug, Clone)]
pub enum Distribute {
    Jump(Jump),
    Rendezvous(Rendezvous),
    Ketama(Ketama),
}

impl Distribute {
    /// ketama固定使用md5，忽略hasher
    pub fn from<S: AsRef<str>>(distribution: &str, names: &[S], hasher: Hasher) -> Result<Self> {
        let dist = distribution.to_ascii_lowercase();
        match dist.as_str() {
            "jump" => Ok(Self::Jump(Jump::from(names, hasher)?)),
            "rendezvous" | "hrw" => Ok(Self::Rendezvous(Rendezvous::new(names, hasher)?)),
            "ketama" | "consistent" => Self::ketama(names),
            _ => {
                log::warn!("'{}' is not valid , use ketama instead", distribution);
                Self::ketama(names)
            }
        }
    }
    fn ketama<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let nodes = names.iter().map(|n| Node::from(n.as_ref())).collect();
        Ok(Self::Ketama(Ketama::build(nodes)?))
    }
    /// 返回命中节点在names中的下标
    #[inline]
    pub fn index<K: HashKey + ?Sized>(&self, key: &K) -> Result<usize> {
        match self {
            Self::Jump(d) => d.index(key),
            Self::Rendezvous(d) => d.index(key),
            Self::Ketama(d) => d.index(key),
        }
    }
    #[inline]
    pub fn select<K: HashKey + ?Sized>(&self, key: &K) -> Result<&str> {
        match self {
            Self::Jump(d) => d.select(key),
            Self::Rendezvous(d) => d.select(key),
            Self::Ketama(d) => d.select(key),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jump(_) => "jump",
            Self::Rendezvous(_) => "rendezvous",
            Self::Ketama(_) => "ketama",
        }
    }
}
