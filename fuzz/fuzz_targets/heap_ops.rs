#![no_main]
use libfuzzer_sys::fuzz_target;

use algokit::Heap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fuzz_target!(|ops: Vec<Option<i32>>| {
    // Some(v) pushes, None pops. Differential check against the standard
    // library's binary heap (reversed to get min-first).
    let mut ours = Heap::new();
    let mut reference: BinaryHeap<Reverse<i32>> = BinaryHeap::new();

    for op in ops {
        match op {
            Some(v) => {
                ours.push(v);
                reference.push(Reverse(v));
            }
            None => match reference.pop() {
                Some(Reverse(expected)) => {
                    assert_eq!(ours.pop().unwrap(), expected);
                }
                None => {
                    assert!(ours.pop().is_err());
                }
            },
        }
        assert!(ours.is_heap());
        assert_eq!(ours.len(), reference.len());
        assert_eq!(ours.top().copied(), reference.peek().map(|r| r.0));
    }
});
