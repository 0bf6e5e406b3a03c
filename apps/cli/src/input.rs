//! # Prompted Input
//!
//! Bounded-integer and single-token prompts over stdin.
//!
//! Two layers: pure helpers ([`bound`], [`first_token`]) that carry the
//! actual rules and are unit-tested, and thin stdin wrappers that loop a
//! prompt around them. The wrappers re-prompt indefinitely on non-numeric
//! input, clamp (never reject) out-of-range integers with a warning, and
//! truncate over-long tokens silently.

use std::io::{self, BufRead, Write};

// =============================================================================
// Pure Helpers
// =============================================================================

/// Outcome of forcing a value into `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounded {
    InRange(i64),
    /// Value was below `min` and was raised to it.
    ClampedLow(i64),
    /// Value was above `max` and was lowered to it.
    ClampedHigh(i64),
}

impl Bounded {
    pub fn value(self) -> i64 {
        match self {
            Bounded::InRange(v) | Bounded::ClampedLow(v) | Bounded::ClampedHigh(v) => v,
        }
    }
}

/// Clamps `value` into `[min, max]`, reporting which bound (if any) won.
///
/// Degenerate ranges (`min > max`) pass the value through untouched, the
/// historical behavior callers rely on for "no bounds" prompts.
pub fn bound(value: i64, min: i64, max: i64) -> Bounded {
    if min > max {
        return Bounded::InRange(value);
    }
    if value < min {
        Bounded::ClampedLow(min)
    } else if value > max {
        Bounded::ClampedHigh(max)
    } else {
        Bounded::InRange(value)
    }
}

/// First whitespace-free token of `raw`, truncated to `max_len - 1`
/// characters. Returns `None` for blank input.
pub fn first_token(raw: &str, max_len: usize) -> Option<String> {
    let token = raw.split_whitespace().next()?;
    let keep = max_len.saturating_sub(1);
    Some(token.chars().take(keep).collect())
}

// =============================================================================
// Stdin Wrappers
// =============================================================================

/// Prompts until a parseable integer arrives, then clamps it to
/// `[min, max]` with a warning message when a bound kicks in.
///
/// ## Errors
/// Only on stdin/stdout failure (including EOF); bad input never errors,
/// it re-prompts.
pub fn read_bounded_int(prompt: &str, min: i64, max: i64) -> io::Result<i64> {
    loop {
        let line = read_line(prompt)?;
        let Ok(value) = line.trim().parse::<i64>() else {
            println!("Invalid input. Please enter an integer value.");
            continue;
        };

        let bounded = bound(value, min, max);
        match bounded {
            Bounded::ClampedLow(v) => println!("Value too small. Using {v}."),
            Bounded::ClampedHigh(v) => println!("Value too large. Using {v}."),
            Bounded::InRange(_) => {}
        }
        return Ok(bounded.value());
    }
}

/// Prompts until a non-blank line arrives, then returns its first token
/// truncated to `max_len - 1` characters.
pub fn read_token(prompt: &str, max_len: usize) -> io::Result<String> {
    loop {
        let line = read_line(prompt)?;
        if let Some(token) = first_token(&line, max_len) {
            return Ok(token);
        }
        println!("Input required.");
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_clamps_to_nearest_edge() {
        assert_eq!(bound(5, 1, 12), Bounded::InRange(5));
        assert_eq!(bound(0, 1, 12), Bounded::ClampedLow(1));
        assert_eq!(bound(13, 1, 12), Bounded::ClampedHigh(12));
        assert_eq!(bound(1, 1, 12), Bounded::InRange(1));
        assert_eq!(bound(12, 1, 12), Bounded::InRange(12));
    }

    #[test]
    fn test_bound_passes_through_degenerate_range() {
        assert_eq!(bound(42, 10, 0), Bounded::InRange(42));
    }

    #[test]
    fn test_first_token_splits_and_truncates() {
        assert_eq!(first_token("Paracetamol\n", 50).as_deref(), Some("Paracetamol"));
        assert_eq!(first_token("  two words  ", 50).as_deref(), Some("two"));
        assert_eq!(first_token("abcdef", 4).as_deref(), Some("abc"));
        assert_eq!(first_token("   \n", 50), None);
    }
}
