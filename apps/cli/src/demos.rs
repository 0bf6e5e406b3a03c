//! # Demo Routines
//!
//! Two pedagogical asides carried along for training sessions at the
//! counter. They have nothing to do with the inventory domain and
//! deliberately live in the shell, not in medtrack-core.

use std::io;

use crate::input::read_bounded_int;

const DEMO_MIN: i64 = -1_000_000;
const DEMO_MAX: i64 = 1_000_000;

/// Swaps two integers using only addition and subtraction.
pub fn swap_without_third(a: i64, b: i64) -> (i64, i64) {
    let a = a + b;
    let b = a - b;
    let a = a - b;
    (a, b)
}

/// AND/OR/XOR of a pair, plus the smallest of the three results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitwiseSummary {
    pub and: i64,
    pub or: i64,
    pub xor: i64,
    pub smallest: i64,
}

pub fn bitwise_summary(x: i64, y: i64) -> BitwiseSummary {
    let and = x & y;
    let or = x | y;
    let xor = x ^ y;
    BitwiseSummary {
        and,
        or,
        xor,
        smallest: and.min(or).min(xor),
    }
}

/// Menu entry: prompt for two integers and show the arithmetic swap.
pub fn run_swap_demo() -> io::Result<()> {
    let a = read_bounded_int("Enter a: ", DEMO_MIN, DEMO_MAX)?;
    let b = read_bounded_int("Enter b: ", DEMO_MIN, DEMO_MAX)?;

    println!("Before swap: a={a} b={b}");
    let (a, b) = swap_without_third(a, b);
    println!("After swap: a={a} b={b}");
    Ok(())
}

/// Menu entry: prompt for two integers and show the bitwise summary.
pub fn run_bitwise_demo() -> io::Result<()> {
    let x = read_bounded_int("Enter first integer: ", DEMO_MIN, DEMO_MAX)?;
    let y = read_bounded_int("Enter second integer: ", DEMO_MIN, DEMO_MAX)?;

    let summary = bitwise_summary(x, y);
    println!("AND={} OR={} XOR={}", summary.and, summary.or, summary.xor);
    println!("Smallest among AND/OR/XOR = {}", summary.smallest);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_without_third() {
        assert_eq!(swap_without_third(3, 9), (9, 3));
        assert_eq!(swap_without_third(-4, 7), (7, -4));
        assert_eq!(swap_without_third(0, 0), (0, 0));
    }

    #[test]
    fn test_bitwise_summary_picks_smallest() {
        let s = bitwise_summary(12, 10);
        assert_eq!(s.and, 8);
        assert_eq!(s.or, 14);
        assert_eq!(s.xor, 6);
        assert_eq!(s.smallest, 6);
    }
}
