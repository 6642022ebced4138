//! # ipv4mix common
//!
//! Pure building blocks shared by the `ipv4mix` binary and the test crate.
//!
//! * **[`network`]**: shorthand IPv4 notation parsing and the [`network::octets::Octets`] model.
//! * **[`render`]**: numeral renderers and the fixed table of output representations.
//! * **[`error`]**: the error type returned by the parser.
//! * **[`config`]**: runtime options collected by the command line.

pub mod config;
pub mod error;
pub mod network;
pub mod render;
