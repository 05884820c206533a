//! Concurrent `init` and read tests.

use std::sync::Barrier;
use std::thread;

use crate::error::RegistryError;
use crate::option::OptionDecl;
use crate::registry::Registry;
use crate::value::ValueType;

use super::env;

const THREADS: usize = 16;

#[test]
fn test_concurrent_init_has_exactly_one_winner() {
    let registry = Registry::with_source(env(&[("WORKERS", "8")]));
    let barrier = Barrier::new(THREADS);

    let results: Vec<_> = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    registry.init(&[OptionDecl::required("WORKERS", ValueType::Int)])
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(winners.len(), 1);
    assert!(
        results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| r == &Err(RegistryError::AlreadyInitialized))
    );
    assert_eq!(registry.get_int(winners[0][0]).unwrap(), 8);
}

#[test]
fn test_concurrent_reads_after_init() {
    let registry = Registry::with_source(env(&[("NAME", "svc"), ("LIMIT", "3")]));
    let handles = registry
        .init(&[
            OptionDecl::required("NAME", ValueType::String),
            OptionDecl::required("LIMIT", ValueType::Int),
        ])
        .unwrap();

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(registry.get_string(handles[0]).unwrap(), "svc");
                    assert_eq!(registry.get_int(handles[1]).unwrap(), 3);
                }
            });
        }
    });
}

#[test]
fn test_registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Registry>();
    assert_send_sync::<Registry<std::collections::HashMap<String, String>>>();
}
