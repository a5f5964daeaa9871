#[cfg(test)]
mod jump_test {
    use proptest::prelude::*;
    use sharding::hash::{Hash, Hasher};
    use sharding::{jump_hash, Error, Jump};

    #[test]
    fn reference_vectors() {
        assert_eq!(jump_hash(1, 1), 0);
        assert_eq!(jump_hash(42, 57), 43);
        assert_eq!(jump_hash(0xDEAD10CC, 1), 0);
        assert_eq!(jump_hash(0xDEAD10CC, 666), 361);
        assert_eq!(jump_hash(256, 1024), 520);
        assert_eq!(jump_hash(0, -10), 0);
        assert_eq!(jump_hash(0xDEAD10CC, -666), 0);
    }

    // 桶数+1时，迁移的key都去了新桶，数量约为1/(n+1)
    #[test]
    fn grow_moves_minimal() {
        let hasher = Hasher::from("fnv1a");
        let keys: Vec<u64> = (0..10_000)
            .map(|i| hasher.hash(&format!("key-{}", i)))
            .collect();
        let mut prev: Vec<i32> = keys.iter().map(|&k| jump_hash(k, 1)).collect();
        for n in 1..200 {
            let cur: Vec<i32> = keys.iter().map(|&k| jump_hash(k, n + 1)).collect();
            let mut moved = 0;
            for (p, c) in prev.iter().zip(cur.iter()) {
                if p != c {
                    assert_eq!(*c, n, "key moved to an existing bucket");
                    moved += 1;
                }
            }
            let expected = keys.len() as f64 / (n + 1) as f64;
            assert!(
                (moved as f64) <= expected * 1.2 + 30.0,
                "buckets:{} moved:{} expected:{}",
                n + 1,
                moved,
                expected
            );
            prev = cur;
        }
    }

    #[test]
    fn names_mapping() {
        let names = tests::servers(8);
        let jump = Jump::from(&names, Hasher::from("crc64")).expect("jump");
        assert_eq!(jump.select("127.0.0.1").expect("select"), "127.0.0.1:8007");

        let empty: Vec<String> = Vec::new();
        assert_eq!(
            Jump::from(&empty, Hasher::default()).err(),
            Some(Error::EmptyNodeSet)
        );
    }

    proptest! {
        #[test]
        fn always_in_range(key in any::<u64>(), buckets in 1i32..100_000) {
            let b = jump_hash(key, buckets);
            prop_assert!(b >= 0 && b < buckets);
            prop_assert_eq!(b, jump_hash(key, buckets));
        }

        #[test]
        fn non_positive_is_zero(key in any::<u64>(), buckets in i32::MIN..=0) {
            prop_assert_eq!(jump_hash(key, buckets), 0);
        }

        #[test]
        fn grow_by_one(key in any::<u64>(), n in 1i32..10_000) {
            let before = jump_hash(key, n);
            let after = jump_hash(key, n + 1);
            prop_assert!(before == after || after == n);
        }
    }
}
