pub struct Config {
    /// Diagnostic verbosity.
    ///
    /// `0` shows advisories and errors, `1` only errors, anything above
    /// silences diagnostics. Representation lines are always printed.
    pub quiet: u8,
    /// Disables ANSI colours in diagnostics.
    pub no_color: bool,
}

impl Config {
    /// Default log filter directive for the configured verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.quiet {
            0 => "info",
            1 => "error",
            _ => "off",
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
