/// fnv1系列，目前支持fnv1_64与fnv1a_64

#[derive(Debug, Default, Clone)]
pub struct Fnv1;

#[derive(Debug, Default, Clone)]
pub struct Fnv1a;

const FNV_64_INIT: u64 = 0xcbf29ce484222325;
const FNV_64_PRIME: u64 = 0x100000001b3;

impl super::Hash for Fnv1 {
    #[inline]
    fn hash<S: super::HashKey + ?Sized>(&self, key: &S) -> u64 {
        let mut hash = FNV_64_INIT;
        for &c in key.data() {
            hash = hash.wrapping_mul(FNV_64_PRIME);
            hash ^= c as u64;
        }
        hash
    }
}

impl super::Hash for Fnv1a {
    #[inline]
    fn hash<S: super::HashKey + ?Sized>(&self, key: &S) -> u64 {
        let mut hash = FNV_64_INIT;
        for &c in key.data() {
            hash ^= c as u64;
            hash = hash.wrapping_mul(FNV_64_PRIME);
        }
        hash
    }
}
