/// Numeral system a field is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Plain decimal, no prefix.
    Decimal,
    /// Uppercase hex behind `0x`, unpadded.
    Hex,
    /// Octal behind a single leading `0`.
    Octal,
}

impl Radix {
    pub fn render(self, value: u64) -> String {
        match self {
            Radix::Decimal => value.to_string(),
            Radix::Hex => format!("0x{value:X}"),
            Radix::Octal => format!("0{value:o}"),
        }
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
