//! Capacity growth and amortization behavior observed through the public API.

use zvec::ZVec;

/// Push `n` elements from empty and record each capacity change.
fn capacity_steps(n: usize) -> Vec<usize> {
    let mut v = ZVec::new();
    let mut steps = Vec::new();
    for i in 0..n {
        v.push(i).unwrap();
        if steps.last() != Some(&v.capacity()) {
            steps.push(v.capacity());
        }
    }
    steps
}

#[test]
fn reallocation_count_is_logarithmic() {
    // 1000 pushes must reallocate O(log n) times, not O(n).
    let steps = capacity_steps(1000);
    assert_eq!(steps, [8, 16, 32, 64, 128, 256, 512, 1024]);
}

#[test]
fn growth_doubles_from_eight() {
    let steps = capacity_steps(9);
    assert_eq!(steps, [8, 16]);
}

#[test]
fn push_pop_round_trip_keeps_capacity() {
    let mut v = ZVec::new();
    for i in 0..100u32 {
        v.push(i).unwrap();
    }
    let cap = v.capacity();
    for _ in 0..100 {
        v.pop().unwrap();
    }
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), cap);
}

#[test]
fn reserve_below_capacity_changes_nothing() {
    let mut v = ZVec::new();
    for i in 0..10u32 {
        v.push(i).unwrap();
    }
    let cap = v.capacity();
    let before: Vec<u32> = v.iter().copied().collect();
    v.reserve(cap - 1).unwrap();
    assert_eq!(v.capacity(), cap);
    assert_eq!(v.len(), 10);
    assert_eq!(v.as_slice(), before.as_slice());
}

#[test]
fn reserved_pushes_never_reallocate() {
    let mut v = ZVec::with_capacity(64).unwrap();
    for i in 0..64u32 {
        v.push(i).unwrap();
        assert_eq!(v.capacity(), 64);
    }
}

#[test]
fn shrink_then_regrow() {
    let mut v = ZVec::new();
    for i in 0..5u32 {
        v.push(i).unwrap();
    }
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 5);
    // The next push doubles from the shrunk capacity: max(8, 5 * 2) = 10.
    v.push(5).unwrap();
    assert_eq!(v.capacity(), 10);
    assert_eq!(v.as_slice(), [0, 1, 2, 3, 4, 5]);
}
