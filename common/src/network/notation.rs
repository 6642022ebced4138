//! # Shorthand IPv4 Notation
//!
//! Reads an address written in any of the classic `inet_aton` shapes:
//!
//! * `a.b.c.d`: four parts, one per field.
//! * `a.b.c`: the last part fills the trailing 16 bits.
//! * `a.b`: the last part fills the trailing 24 bits.
//! * `a`: one 32-bit value.
//!
//! Every part except the trailing one of a shortened form is octal when it
//! has a leading zero (`010` is 8) and decimal otherwise. The trailing part
//! of a shortened form is always decimal.

use std::net::Ipv4Addr;

use tracing::{debug, trace};

use crate::error::{AddrError, PartFault};
use crate::network::octets::Octets;

/// Radix picked for a part by the leading-zero rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartRadix {
    Decimal,
    Octal,
}

impl PartRadix {
    pub fn of(token: &str) -> Self {
        if token.len() > 1 && token.starts_with('0') {
            PartRadix::Octal
        } else {
            PartRadix::Decimal
        }
    }

    fn base(self) -> u32 {
        match self {
            PartRadix::Decimal => 10,
            PartRadix::Octal => 8,
        }
    }
}

/// Parses a single part, octal when it carries a leading zero.
pub fn parse_part(token: &str) -> Result<u64, AddrError> {
    let radix = PartRadix::of(token);
    let value = u64::from_str_radix(token, radix.base()).map_err(|e| AddrError::part(token, e))?;
    trace!(token, ?radix, value, "parsed part");
    Ok(value)
}

/// Parses the trailing part of a shortened form: always decimal, 32 bits wide,
/// never signed.
fn parse_tail(token: &str) -> Result<u32, AddrError> {
    if token.starts_with(['+', '-']) {
        return Err(AddrError::part(token, PartFault::Signed));
    }
    let value = token.parse::<u32>().map_err(|e| AddrError::part(token, e))?;
    trace!(token, value, "parsed trailing part");
    Ok(value)
}

/// Strict dotted-quad check: four decimal bytes, no leading zeros.
pub fn validate_strict(input: &str) -> Result<Ipv4Addr, AddrError> {
    input
        .parse::<Ipv4Addr>()
        .map_err(|_| AddrError::NotStrict(input.to_string()))
}

/// Expands `input` into four fields.
///
/// Positions taken straight from a part are not masked; the trailing part of
/// a shortened form is masked into the fields it covers.
pub fn parse(input: &str) -> Result<Octets, AddrError> {
    let parts: Vec<&str> = input.split('.').collect();
    debug!(parts = parts.len(), "expanding shorthand notation");

    let octets = match parts.as_slice() {
        [whole] => Octets::from_u32(parse_tail(whole)?),
        [a, tail] => {
            let first = parse_part(a)?;
            let [_, b, c, d] = parse_tail(tail)?.to_be_bytes();
            Octets::new([first, b.into(), c.into(), d.into()])
        }
        [a, b, tail] => {
            let first = parse_part(a)?;
            let second = parse_part(b)?;
            let [_, _, c, d] = parse_tail(tail)?.to_be_bytes();
            Octets::new([first, second, c.into(), d.into()])
        }
        [a, b, c, d] => Octets::new([parse_part(a)?, parse_part(b)?, parse_part(c)?, parse_part(d)?]),
        _ => return Err(AddrError::PartCount(parts.len())),
    };

    debug!(%octets, canonical = octets.is_canonical(), "expanded address");
    Ok(octets)
}

/// Runs the strict check, hands any mismatch to `advise`, then expands.
///
/// The advisory never changes the outcome and is delivered before any part
/// is parsed.
pub fn parse_with_advisory<F>(input: &str, advise: F) -> Result<Octets, AddrError>
where
    F: FnOnce(AddrError),
{
    if let Err(mismatch) = validate_strict(input) {
        advise(mismatch);
    }
    parse(input)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
