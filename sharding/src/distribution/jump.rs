//! Jump consistent hash (Lamping & Veach, 2014): 不需要任何状态，只依赖key与桶数。
use crate::hash::{Hash, HashKey, Hasher};
use crate::{Error, Result};

const JUMP_MULTIPLIER: u64 = 2862933555777941757;

/// 返回key落在[0, buckets)中的桶。
///
/// buckets <= 0 时返回0而不是报错，这是为兼容保留的宽松行为，调用方需要注意。
/// 桶数从n增加到n+1时，只有约1/(n+1)的key会迁移，且都迁移到新桶n上。
#[inline]
pub fn jump_hash(mut key: u64, buckets: i32) -> i32 {
    if buckets <= 0 {
        return 0;
    }
    let mut b: i64 = -1;
    let mut j: i64 = 0;
    while j < buckets as i64 {
        b = j;
        key = key.wrapping_mul(JUMP_MULTIPLIER).wrapping_add(1);
        j = ((b + 1) as f64 * ((1i64 << 31) as f64 / ((key >> 33) + 1) as f64)) as i64;
    }
    b as i32
}

/// 先用hasher计算key的64位hash，再按jump hash分桶
#[inline]
pub fn hash_string_to_bucket<K, H>(key: &K, buckets: i32, hasher: &H) -> i32
where
    K: HashKey + ?Sized,
    H: Hash,
{
    jump_hash(hasher.hash(key), buckets)
}

/// 桶号到节点名的映射由调用方给出的names顺序决定，只能在尾部增删节点。
#[derive(Debug, Clone)]
pub struct Jump<H = Hasher> {
    names: Vec<String>,
    hasher: H,
}

impl<H: Hash> Jump<H> {
    pub fn from<S: AsRef<str>>(names: &[S], hasher: H) -> Result<Self> {
        if names.is_empty() {
            return Err(Error::EmptyNodeSet);
        }
        let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        Ok(Self { names, hasher })
    }
    #[inline]
    pub fn index<K: HashKey + ?Sized>(&self, key: &K) -> Result<usize> {
        if self.names.is_empty() {
            return Err(Error::EmptyNodeSet);
        }
        let buckets = i32::try_from(self.names.len()).unwrap_or(i32::MAX);
        Ok(hash_string_to_bucket(key, buckets, &self.hasher) as usize)
    }
    #[inline]
    pub fn select<K: HashKey + ?Sized>(&self, key: &K) -> Result<&str> {
        let idx = self.index(key)?;
        Ok(&self.names[idx])
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
