//! 可插拔的key hash算法。
//!
//! 所有算法都实现[`Hash`]，输出64位；32位的算法（crc32、md5对齐）零扩展到u64。
//! 通过[`Hasher::from`]按名字选择，未知名字回退到fnv1a-64。
pub mod crc;
pub mod fnv1;
pub mod md5;

pub use self::md5::{digest_words, Md5Align, POINTS_PER_HASH};
pub use crc::{Crc32, Crc64};
pub use fnv1::{Fnv1, Fnv1a};

use enum_dispatch::enum_dispatch;
#[enum_dispatch]
pub trait Hash {
    fn hash<S: HashKey + ?Sized>(&self, key: &S) -> u64;
}

#[enum_dispatch(Hash)]
#[derive(Debug, Clone)]
pub enum Hasher {
    Crc32(Crc32),
    Crc64(Crc64),
    Fnv1(Fnv1),
    Fnv1a(Fnv1a),
    Md5(Md5Align),
}

const MD5_ALIGN_PREFIX: &str = "md5-";

impl Hasher {
    pub fn from(alg: &str) -> Self {
        let alg_lower = alg.to_ascii_lowercase();
        match alg_lower.as_str() {
            "crc32" => Self::Crc32(Crc32),
            "crc64" => Self::Crc64(Crc64),
            "fnv1" | "fnv1-64" => Self::Fnv1(Fnv1),
            "fnv1a" | "fnv1a-64" => Self::fnv1a(),
            "md5" => Self::Md5(Md5Align::new(0)),
            _ => {
                // md5-{align}，align取值[0, 4)
                if let Some(align) = alg_lower
                    .strip_prefix(MD5_ALIGN_PREFIX)
                    .and_then(|a| a.parse::<usize>().ok())
                    .filter(|a| *a < POINTS_PER_HASH)
                {
                    return Self::Md5(Md5Align::new(align));
                }
                log::warn!("found unknown hash:{}, use fnv1a-64 instead", alg);
                Self::fnv1a()
            }
        }
    }
    #[inline(always)]
    pub fn fnv1a() -> Self {
        Self::Fnv1a(Fnv1a)
    }
    pub fn name(&self) -> String {
        match self {
            Self::Crc32(_) => "crc32".to_string(),
            Self::Crc64(_) => "crc64".to_string(),
            Self::Fnv1(_) => "fnv1-64".to_string(),
            Self::Fnv1a(_) => "fnv1a-64".to_string(),
            Self::Md5(m) => format!("{}{}", MD5_ALIGN_PREFIX, m.align()),
        }
    }
}

impl Default for Hasher {
    #[inline]
    fn default() -> Self {
        Self::fnv1a()
    }
}

pub trait HashKey {
    fn data(&self) -> &[u8];
}

impl HashKey for [u8] {
    #[inline(always)]
    fn data(&self) -> &[u8] {
        self
    }
}
impl<const N: usize> HashKey for [u8; N] {
    #[inline(always)]
    fn data(&self) -> &[u8] {
        self
    }
}
impl HashKey for Vec<u8> {
    #[inline(always)]
    fn data(&self) -> &[u8] {
        self
    }
}
impl HashKey for str {
    #[inline(always)]
    fn data(&self) -> &[u8] {
        self.as_bytes()
    }
}
impl HashKey for String {
    #[inline(always)]
    fn data(&self) -> &[u8] {
        self.as_bytes()
    }
}
impl<K: HashKey + ?Sized> HashKey for &K {
    #[inline(always)]
    fn data(&self) -> &[u8] {
        (**self).data()
    }
}
