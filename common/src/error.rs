use std::num::ParseIntError;

use thiserror::Error;

/// Everything that can go wrong while reading an address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrError {
    /// The input split into more than four dot-separated parts.
    #[error("invalid IP address format: expected 1 to 4 dot-separated parts, found {0}")]
    PartCount(usize),
    /// A single part is not a number in its selected base.
    #[error("invalid IP address part: {token:?}")]
    Part {
        token: String,
        #[source]
        source: PartFault,
    },
    /// The whole input is not a strict dotted-quad literal.
    ///
    /// Only ever reported as an advisory.
    #[error("invalid IPv4 address: {0}")]
    NotStrict(String),
}

/// Why a part was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartFault {
    /// The trailing part of a shortened form carries a `+` or `-`.
    #[error("sign not allowed in trailing part")]
    Signed,
    #[error(transparent)]
    Number(#[from] ParseIntError),
}

impl AddrError {
    pub(crate) fn part(token: &str, source: impl Into<PartFault>) -> Self {
        AddrError::Part {
            token: token.to_string(),
            source: source.into(),
        }
    }
}
