//! Concurrency Tests
//!
//! One resolver shared by passes running on several threads.

use crate::*;
use std::thread;

#[test]
fn test_concurrent_passes_share_resolver() {
    init_tracing();
    let resolver = Arc::new(ContractResolver::builder().ignore_property("History").build());
    let expected = vmwire::to_string_with(&Page::sample(), &resolver).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let mut out = Vec::new();
                for _ in 0..50 {
                    if i % 2 == 0 {
                        out.push(vmwire::to_string_with(&Page::sample(), &resolver).unwrap());
                    } else {
                        vmwire::to_string_with(&Person::alice(), &resolver).unwrap();
                    }
                }
                out
            })
        })
        .collect();

    for handle in handles {
        for text in handle.join().unwrap() {
            assert_eq!(text, expected);
        }
    }
}

#[test]
fn test_reactive_updates_seen_across_threads() {
    let person = Arc::new(Person::alice());
    let writer = {
        let person = Arc::clone(&person);
        thread::spawn(move || person.age.set(99))
    };
    writer.join().unwrap();

    let value = vmwire::to_value(&*person).unwrap();
    assert_eq!(value["Age"], serde_json::json!(99));
}

#[test]
fn test_subscribers_notified_on_set() {
    let person = Person::alice();
    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    person.age.subscribe(move |v| sink.lock().push(*v));

    person.age.set(1);
    person.age.update(|v| *v += 1);

    assert_eq!(*seen.lock(), vec![1, 2]);
}
