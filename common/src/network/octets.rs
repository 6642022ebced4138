//! # Octet Model
//!
//! The four fields of an IPv4 address after shorthand expansion.
//!
//! Fields are nominally bytes, but positions filled straight from a part in
//! the two- and three-part notations are left unmasked, so each field is
//! stored as a `u64` and may exceed 255 (e.g. `300.1.1`).

use std::fmt;
use std::net::Ipv4Addr;

/// Four expanded address fields, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Octets([u64; 4]);

impl Octets {
    pub const fn new(fields: [u64; 4]) -> Self {
        Self(fields)
    }

    /// Spreads a 32-bit value big-endian over all four fields.
    pub fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes().map(u64::from))
    }

    /// Field at `idx` (`0..4`).
    pub fn get(&self, idx: usize) -> u64 {
        self.0[idx]
    }

    pub fn fields(&self) -> [u64; 4] {
        self.0
    }

    /// Packs the fields from `from` to the end into one integer, big-endian.
    ///
    /// `packed(0)` is the whole 32-bit address, `packed(1)` the trailing 24
    /// bits and `packed(2)` the trailing 16 bits. Unmasked fields are shifted
    /// and OR-ed as-is, so they bleed into higher positions rather than
    /// being clamped.
    pub fn packed(&self, from: usize) -> u64 {
        self.0[from..]
            .iter()
            .fold(0u64, |acc, field| (acc << 8) | field)
    }

    /// `true` when every field fits in a byte.
    pub fn is_canonical(&self) -> bool {
        self.0.iter().all(|field| *field <= 0xFF)
    }
}

impl From<Ipv4Addr> for Octets {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.octets().map(u64::from))
    }
}

impl TryFrom<Octets> for Ipv4Addr {
    type Error = Octets;

    /// Fails (handing the octets back) when any field exceeds 255.
    fn try_from(octets: Octets) -> Result<Self, Self::Error> {
        let [a, b, c, d] = octets.0;
        match (u8::try_from(a), u8::try_from(b), u8::try_from(c), u8::try_from(d)) {
            (Ok(a), Ok(b), Ok(c), Ok(d)) => Ok(Ipv4Addr::new(a, b, c, d)),
            _ => Err(octets),
        }
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
