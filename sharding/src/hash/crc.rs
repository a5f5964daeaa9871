use super::{Hash, HashKey};

/// crc32 ieee，与zlib/Go hash/crc32一致
#[derive(Debug, Default, Clone)]
pub struct Crc32;

impl Hash for Crc32 {
    #[inline]
    fn hash<S: HashKey + ?Sized>(&self, key: &S) -> u64 {
        crc32fast::hash(key.data()) as u64
    }
}

/// crc64 ECMA-182（反射形式，初值与结果取反），与Go crc64.ECMA、xz一致
#[derive(Debug, Default, Clone)]
pub struct Crc64;

const CRC64_ECMA_POLY: u64 = 0xC96C5795D7870F42;
static CRC64TAB: [u64; 256] = crc64_table(CRC64_ECMA_POLY);

const fn crc64_table(poly: u64) -> [u64; 256] {
    let mut tab = [0u64; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u64;
        let mut j = 0;
        while j < 8 {
            crc = if crc & 1 == 1 { (crc >> 1) ^ poly } else { crc >> 1 };
            j += 1;
        }
        tab[i] = crc;
        i += 1;
    }
    tab
}

impl Hash for Crc64 {
    #[inline]
    fn hash<S: HashKey + ?Sized>(&self, key: &S) -> u64 {
        let mut crc = !0u64;
        for &c in key.data() {
            crc = CRC64TAB[((crc ^ c as u64) & 0xff) as usize] ^ (crc >> 8);
        }
        !crc
    }
}
