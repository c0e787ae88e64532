use std::str::FromStr;

use log::{debug, warn};
use num_bigint::BigUint;

use crate::equation::ast::Equation;
use crate::equation::errors::ParseError;

/// Parse one equation per line.
///
/// Blank lines (including the one left by a trailing newline) are skipped.
/// Any other malformed line aborts the parse, so a bad input can never
/// silently shrink the reported totals.
///
/// # Errors
///
/// Returns the [`ParseError`] of the first malformed line.
pub fn parse_equations(text: &str) -> Result<Vec<Equation>, ParseError> {
    let mut equations = Vec::new();

    for (idx, raw) in text.split('\n').enumerate() {
        let line_number = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.trim().is_empty() {
            debug!("Skipping blank line {}", line_number);
            continue;
        }

        equations.push(parse_line(line_number, line)?);
    }

    debug!("Parsed {} equations", equations.len());
    Ok(equations)
}

/// Parse a single `"<target>: <op1> <op2> ... <opN>"` line.
///
/// # Errors
///
/// Returns an error if the colon is missing, the target or an operand is not
/// a non-negative integer, or nothing follows the colon. Operands must be
/// separated by exactly one space.
pub fn parse_line(line_number: usize, line: &str) -> Result<Equation, ParseError> {
    let Some((lhs, rhs)) = line.split_once(':') else {
        warn!("Line {} has no ':' separator", line_number);
        return Err(ParseError::MissingColon {
            line: line_number,
            content: line.to_string(),
        });
    };

    let target_token = lhs.trim();
    let target = parse_number(target_token).ok_or_else(|| ParseError::InvalidTarget {
        line: line_number,
        token: target_token.to_string(),
    })?;

    let rhs = rhs.trim();
    if rhs.is_empty() {
        warn!("Line {} has no operands", line_number);
        return Err(ParseError::MissingOperands { line: line_number });
    }

    let operands = rhs
        .split(' ')
        .map(|token| {
            parse_number(token).ok_or_else(|| ParseError::InvalidOperand {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Equation::new(target, operands).map_err(|_| ParseError::MissingOperands { line: line_number })
}

// Plain ASCII digits only; BigUint's own parser would also take "+5" and "1_0".
fn parse_number(token: &str) -> Option<BigUint> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(token.as_bytes(), 10)
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(1, s.strip_suffix('\r').unwrap_or(s))
    }
}
