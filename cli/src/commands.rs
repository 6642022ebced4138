pub mod convert;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "ipv4mix")]
#[command(version)]
#[command(about = "Prints an IPv4 address in every decimal, hex and octal notation.")]
pub struct CommandLine {
    /// IPv4 address in 1 to 4 dot-separated parts (decimal, or octal with a leading 0)
    pub address: String,
    /// Fewer diagnostics (-q: errors only, -qq: nothing)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Print diagnostics without colours
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_address() {
        let cmd = CommandLine::try_parse_from(["ipv4mix", "8.8.8.8"]).unwrap();
        assert_eq!(cmd.address, "8.8.8.8");
        assert_eq!(cmd.quiet, 0);
        assert!(!cmd.no_color);
    }

    #[test]
    fn test_quiet_is_counted() {
        let cmd = CommandLine::try_parse_from(["ipv4mix", "-qq", "--no-color", "1.2.3.4"]).unwrap();
        assert_eq!(cmd.quiet, 2);
        assert!(cmd.no_color);
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(CommandLine::try_parse_from(["ipv4mix"]).is_err());
        assert!(CommandLine::try_parse_from(["ipv4mix", "1.1.1.1", "2.2.2.2"]).is_err());
    }
}
