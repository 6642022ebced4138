pub mod notation;
pub mod octets;
