//! Push, iterate, and sort over two element types.
//!
//! Run with `cargo run --example sort_demo`.

use zvec::{VecError, ZVec};

#[derive(Clone, Copy, Debug)]
struct Point {
    x: f32,
    y: f32,
}

fn main() -> Result<(), VecError> {
    let mut nums = ZVec::new();
    for n in [42i32, 7, 19, 1] {
        nums.push(n)?;
    }

    print!("Before sort: ");
    for n in &nums {
        print!("{n} ");
    }
    println!();

    nums.sort_by(|a, b| a.cmp(b));

    print!("After sort:  ");
    for n in &nums {
        print!("{n} ");
    }
    println!("\n");

    let mut points = ZVec::new();
    points.push(Point { x: 10.0, y: 2.0 })?;
    points.push(Point { x: 3.5, y: 1.0 })?;
    points.push(Point { x: 7.0, y: 5.0 })?;

    println!("Points before sort (by X):");
    for p in &points {
        print!("{{{:.1}, {:.1}}} ", p.x, p.y);
    }
    println!();

    points.sort_by(|a, b| a.x.total_cmp(&b.x));

    println!("Points after sort (by X):");
    for p in &points {
        print!("{{{:.1}, {:.1}}} ", p.x, p.y);
    }
    println!();

    Ok(())
}
