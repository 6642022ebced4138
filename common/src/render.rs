pub mod numeral;
pub mod table;
