//! 96-bit bit-string kernel and its line-oriented test harness.
//!
//! [`BitString96`] composes a 64-bit head and 32-bit tail into one logical
//! value with bitwise algebra, boundary-carrying logical shifts, subset
//! inclusion, and comparison by set-bit count. The [`harness`] module drives
//! it from a whitespace-delimited test stream.

pub mod bitstring;
pub mod harness;
pub mod popcount;

pub use bitstring::BitString96;
pub use harness::{run, HarnessError, Op};
