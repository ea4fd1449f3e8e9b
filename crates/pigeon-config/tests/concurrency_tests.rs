//! Concurrent access tests for container overrides
//!
//! Readers never block each other and `set` calls are serialized, so every
//! read observes either the loaded value or one complete override.

use std::sync::{Arc, Barrier};
use std::thread;

use pigeon_config::{ConfigAdapter, Container, Handler, YamlAdapter};

fn container(source: &str) -> Arc<Container> {
    Arc::new(Container::new(
        YamlAdapter::new().decode(source.as_bytes()).unwrap(),
    ))
}

#[test]
fn test_concurrent_sets_all_land() {
    let config = container("base: 1\n");
    let num_threads = 8;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let config = Arc::clone(&config);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..50 {
                    config
                        .set(&format!("key{thread_id}_{i}"), &i.to_string())
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread should not panic");
    }

    assert_eq!(config.override_count(), num_threads * 50);
    assert_eq!(config.string("key3_49", ""), "49");
    assert_eq!(config.int("base", 0), 1);
}

#[test]
fn test_readers_see_whole_values_during_writes() {
    let config = container("mode: initial\n");
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let config = Arc::clone(&config);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..200 {
                let value = if i % 2 == 0 { "even;even" } else { "odd;odd" };
                config.set("mode", value).unwrap();
            }
        })
    };

    let reader = {
        let config = Arc::clone(&config);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..200 {
                let parts = config.strings("mode", Vec::new());
                assert!(
                    parts == vec!["initial"]
                        || parts == vec!["even", "even"]
                        || parts == vec!["odd", "odd"],
                    "torn read: {parts:?}"
                );
            }
        })
    };

    writer.join().expect("Writer should not panic");
    reader.join().expect("Reader should not panic");
    assert_eq!(config.string("mode", ""), "odd;odd");
}
