//! End-to-end sorting scenarios: integers and caller-keyed struct sorting.

use zvec::ZVec;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

#[test]
fn integers_sort_ascending() {
    let mut v = ZVec::new();
    for n in [42i32, 7, 19, 1] {
        v.push(n).unwrap();
    }
    v.sort_by(|a, b| a.cmp(b));
    assert_eq!(v.as_slice(), [1, 7, 19, 42]);
}

#[test]
fn points_sort_by_x_coordinate() {
    let mut v = ZVec::new();
    for p in [point(10.0, 2.0), point(3.5, 1.0), point(7.0, 5.0)] {
        v.push(p).unwrap();
    }
    v.sort_by(|a, b| a.x.total_cmp(&b.x));
    assert_eq!(
        v.as_slice(),
        [point(3.5, 1.0), point(7.0, 5.0), point(10.0, 2.0)]
    );
}

#[test]
fn comparator_binds_at_call_time() {
    // The same vector sorts under different keys on successive calls.
    let mut v = ZVec::new();
    for p in [point(10.0, 2.0), point(3.5, 1.0), point(7.0, 5.0)] {
        v.push(p).unwrap();
    }
    v.sort_by(|a, b| a.x.total_cmp(&b.x));
    assert_eq!(v.at(0).unwrap().x, 3.5);
    v.sort_by(|a, b| a.y.total_cmp(&b.y));
    assert_eq!(v.at(0).unwrap().y, 1.0);
    v.sort_by(|a, b| b.y.total_cmp(&a.y));
    assert_eq!(v.at(0).unwrap().y, 5.0);
}

#[test]
fn sorting_sorted_input_is_identity() {
    let mut v = ZVec::new();
    for n in 0..50i32 {
        v.push(n).unwrap();
    }
    let before: Vec<i32> = v.iter().copied().collect();
    v.sort_by(|a, b| a.cmp(b));
    assert_eq!(v.as_slice(), before.as_slice());
}

#[test]
fn descending_comparator() {
    let mut v = ZVec::new();
    for n in [1u8, 42, 7, 19] {
        v.push(n).unwrap();
    }
    v.sort_by(|a, b| b.cmp(a));
    assert_eq!(v.as_slice(), [42, 19, 7, 1]);
}
