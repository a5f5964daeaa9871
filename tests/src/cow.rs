#[cfg(test)]
mod cow_test {
    use ds::cow;
    use sharding::{Error, Hasher, Ketama, Membership, Node, Rendezvous};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn snapshot_isolation() {
        let (mut tx, rx) = cow(vec![1, 2, 3]);
        let old = rx.get();
        tx.write(|v| v.push(4));
        assert_eq!(*old, vec![1, 2, 3]);
        assert_eq!(rx.do_with(|v| v.len()), 4);
        assert_eq!(tx.reader().copy(), vec![1, 2, 3, 4]);

        let r: Result<(), &str> = tx.try_write(|v| {
            v.clear();
            Err("rollback")
        });
        assert_eq!(r, Err("rollback"));
        assert_eq!(rx.copy(), vec![1, 2, 3, 4]);
    }

    // 不可clone的T只能整体替换
    struct Table {
        names: Vec<String>,
    }

    #[test]
    fn publish_without_clone() {
        let (mut tx, rx) = cow(Table {
            names: tests::servers(2),
        });
        let reader = tx.reader();
        let old = rx.get();
        tx.publish(Table {
            names: tests::servers(3),
        });
        assert_eq!(old.names.len(), 2);
        assert_eq!(rx.get().names.len(), 3);
        assert_eq!(reader.do_with(|t| t.names.len()), 3);
        let cloned = rx.clone();
        assert_eq!(cloned.get().names[2], "127.0.0.1:8002");
    }

    #[test]
    fn apply_membership() {
        let servers = tests::servers(5);
        let r = Rendezvous::new(&servers, Hasher::default()).expect("new");
        let (mut tx, rx) = cow(r);
        let before = rx.get();

        tx.apply(&Membership::Remove("127.0.0.1:8002".to_string()))
            .expect("remove");
        tx.apply(&Membership::Add(Node::from("127.0.0.1:9000")))
            .expect("add");
        assert_eq!(before.len(), 5);
        assert!(before.contains("127.0.0.1:8002"));
        rx.do_with(|r| {
            assert_eq!(r.len(), 5);
            assert!(!r.contains("127.0.0.1:8002"));
            assert!(r.contains("127.0.0.1:9000"));
        });

        // 失败的变更不发布
        let current = rx.get();
        assert_eq!(
            tx.apply(&Membership::Remove("127.0.0.1:8002".to_string())),
            Err(Error::UnknownNode("127.0.0.1:8002".to_string()))
        );
        assert_eq!(
            tx.apply(&Membership::Add(Node::from("127.0.0.1:8000"))),
            Err(Error::DuplicateLabel("127.0.0.1:8000".to_string()))
        );
        assert!(Arc::ptr_eq(&current, &rx.get()));
    }

    #[test]
    fn rebuild_ring() {
        let nodes: Vec<Node> = tests::servers(4).into_iter().map(Node::from).collect();
        let (mut tx, rx) = cow(Ketama::build(nodes.clone()).expect("build"));
        let old = rx.get();

        let mut grown = nodes;
        grown.push(Node::new("127.0.0.1:9000", (), 2));
        tx.publish(Ketama::build(grown).expect("build"));
        assert_eq!(old.vnode_count(), 4 * 160);
        assert_eq!(rx.get().vnode_count(), 6 * 160);

        tx.apply(&Membership::Remove("127.0.0.1:9000".to_string()))
            .expect("remove");
        let shrunk = rx.get();
        for i in 0..1000 {
            let key = format!("testName{}", i);
            assert_eq!(shrunk.select(&key).unwrap(), old.select(&key).unwrap());
        }
        // 删到空时build失败，快照保持不变
        for label in tests::servers(3) {
            tx.apply(&Membership::Remove(label)).expect("remove");
        }
        let last = rx.get();
        assert_eq!(
            tx.apply(&Membership::Remove("127.0.0.1:8003".to_string())),
            Err(Error::EmptyNodeSet)
        );
        assert!(Arc::ptr_eq(&last, &rx.get()));
        assert_eq!(rx.get().len(), 1);
    }

    #[test]
    fn concurrent_readers() {
        let r = Rendezvous::new(&tests::servers(8), Hasher::from("crc64")).expect("new");
        let (mut tx, rx) = cow(r);
        let stop = Arc::new(AtomicBool::new(false));
        let readers: Vec<_> = (0..4)
            .map(|t| {
                let rx = rx.clone();
                let stop = stop.clone();
                std::thread::spawn(move || {
                    let mut n = 0usize;
                    while !stop.load(Ordering::Relaxed) {
                        let key = format!("key-{}-{}", t, n);
                        rx.do_with(|r| {
                            // 每个快照都是完整的
                            let label = r.select(&key).expect("select");
                            assert!(r.contains(label));
                        });
                        n += 1;
                    }
                    n
                })
            })
            .collect();

        for i in 0..200 {
            let label = format!("10.0.0.{}:6379", i);
            tx.apply(&Membership::Add(Node::from(label.as_str())))
                .expect("add");
            if i % 2 == 0 {
                tx.apply(&Membership::Remove(label)).expect("remove");
            }
        }
        stop.store(true, Ordering::Relaxed);
        for h in readers {
            h.join().expect("reader panic");
        }
        assert_eq!(rx.get().len(), 8 + 100);
    }
}
