use super::{Hash, HashKey};

/// md5的16字节按4字节一组切分，共4组
pub const POINTS_PER_HASH: usize = 4;

/// 返回key的md5摘要按小端切分出的4个u32
#[inline]
pub fn digest_words<S: HashKey + ?Sized>(key: &S) -> [u32; POINTS_PER_HASH] {
    let out_bytes = ::md5::compute(key.data());
    let mut words = [0u32; POINTS_PER_HASH];
    for (j, word) in words.iter_mut().enumerate() {
        *word = u32::from_le_bytes([
            out_bytes[j * 4],
            out_bytes[1 + j * 4],
            out_bytes[2 + j * 4],
            out_bytes[3 + j * 4],
        ]);
    }
    words
}

/// 取md5摘要中第align组作为hash
#[derive(Debug, Default, Clone)]
pub struct Md5Align {
    align: usize,
}

impl Md5Align {
    pub fn new(align: usize) -> Self {
        debug_assert!(align < POINTS_PER_HASH);
        Self {
            align: align % POINTS_PER_HASH,
        }
    }
    #[inline]
    pub fn align(&self) -> usize {
        self.align
    }
}

impl Hash for Md5Align {
    #[inline]
    fn hash<S: HashKey + ?Sized>(&self, key: &S) -> u64 {
        digest_words(key)[self.align] as u64
    }
}
