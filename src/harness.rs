use crate::bitstring::BitString96;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Result line for a test whose operator or operand tokens cannot be used
pub const BAD_INPUT: &str = "Bad input!";

/// Errors surfaced by the harness itself. Malformed test input is never an
/// error; it is reported through the [`BAD_INPUT`] result line.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Closed set of operator tokens the driver recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    And,
    Or,
    Xor,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    Equal,
    NotEqual,
    Includes,
    ShiftLeft,
    ShiftRight,
    Not,
    SetBits,
}

impl Op {
    /// Maps an operator token to its variant; `None` is the bad-input path
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "&" => Some(Self::And),
            "|" => Some(Self::Or),
            "^" => Some(Self::Xor),
            "<" => Some(Self::Less),
            ">" => Some(Self::Greater),
            "<=" => Some(Self::LessEq),
            ">=" => Some(Self::GreaterEq),
            "==" => Some(Self::Equal),
            "!=" => Some(Self::NotEqual),
            "includes" => Some(Self::Includes),
            "<<" => Some(Self::ShiftLeft),
            ">>" => Some(Self::ShiftRight),
            "~" => Some(Self::Not),
            "set_bits" => Some(Self::SetBits),
            _ => None,
        }
    }
}

/// Second operand of a binary logic or comparison test
fn operand(rest: &[&str]) -> Option<BitString96> {
    rest.first().map(|token| BitString96::from_bit_pattern(token))
}

/// Second operand of a shift test, a plain non-negative integer
fn shift_amount(rest: &[&str]) -> Option<u32> {
    rest.first()?.parse().ok()
}

/// Evaluates one tokenized test line; `None` means the line is malformed.
///
/// The first operand always parses as a bit pattern (malformed characters
/// are zero bits, per the pattern rules), so only a missing token, an
/// unrecognized operator, or an unparsable shift count reject a line.
fn eval(tokens: &[&str]) -> Option<String> {
    let (lhs, op, rest) = match tokens {
        [lhs, op, rest @ ..] => (*lhs, *op, rest),
        _ => return None,
    };
    let op = Op::parse(op)?;
    debug!(?op, "dispatching test");
    let lhs = BitString96::from_bit_pattern(lhs);
    let line = match op {
        Op::And => (lhs & operand(rest)?).to_string(),
        Op::Or => (lhs | operand(rest)?).to_string(),
        Op::Xor => (lhs ^ operand(rest)?).to_string(),
        Op::Less => (lhs < operand(rest)?).to_string(),
        Op::Greater => (lhs > operand(rest)?).to_string(),
        Op::LessEq => (lhs <= operand(rest)?).to_string(),
        Op::GreaterEq => (lhs >= operand(rest)?).to_string(),
        Op::Equal => (lhs == operand(rest)?).to_string(),
        Op::NotEqual => (lhs != operand(rest)?).to_string(),
        Op::Includes => lhs.includes(&operand(rest)?).to_string(),
        Op::ShiftLeft => (lhs << shift_amount(rest)?).to_string(),
        Op::ShiftRight => (lhs >> shift_amount(rest)?).to_string(),
        // unary operators ignore any second operand
        Op::Not => (!lhs).to_string(),
        Op::SetBits => lhs.count_set_bits().to_string(),
    };
    Some(line)
}

/// Runs every test from `input`, one whitespace-delimited
/// `<operand1> <operator> [<operand2>]` line per test, writing the result
/// and a blank separator line to `out`. Blank lines between tests are
/// skipped; malformed lines report [`BAD_INPUT`] and processing continues.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> Result<(), HarnessError> {
    for line in input.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        match eval(&tokens) {
            Some(result) => writeln!(out, "{result}\n")?,
            None => {
                warn!(line = %line, "unrecognized test line");
                writeln!(out, "{BAD_INPUT}\n")?;
            }
        }
    }
    Ok(())
}
