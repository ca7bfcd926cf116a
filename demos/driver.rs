// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small driver: builds a vector from a literal list, prints it, appends a
//! second batch and prints it again.
//!
//! Run with `RUST_LOG=trace cargo run --example driver` to see reallocations.

use grow_vec::{grow_vec, GrowVec};

const RULE: &str = "--------------------------";

fn main() {
    env_logger::init();

    let mut numbers: GrowVec<i32> = grow_vec![1, 2, 3, 4, 5];

    for element in &numbers {
        print!("{element} ");
    }
    println!("\n{RULE}");

    println!("{numbers}");
    println!("{RULE}");

    numbers.extend_from_slice(&[11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
    println!("{numbers}");
    println!("{RULE}");

    while numbers.len() > 12 {
        numbers.pop();
    }
    println!("{numbers}");
    log::debug!("final len={} capacity={}", numbers.len(), numbers.capacity());
}
