use std::io;

use colored::*;
use ipv4mix_common::config::Config;
use tracing::{Event, Level, Metadata, Subscriber, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Target of the follow-up lines [`report`] emits for an error's causes.
pub const CAUSE_TARGET: &str = "ipv4mix::cause";

/// One event per line on stderr.
///
/// Warnings and errors get a `[*]`/`[-]` tag, causes hang off the error
/// above them, and debug/trace events name the module that emitted them.
pub struct Ipv4MixFormatter;

fn tag(meta: &Metadata<'_>) -> ColoredString {
    if meta.target() == CAUSE_TARGET {
        return " └─".bright_black();
    }
    match *meta.level() {
        Level::ERROR => "[-]".red().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::INFO => "[+]".green().bold(),
        _ => "[?]".blue(),
    }
}

impl<S, N> FormatEvent<S, N> for Ipv4MixFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(writer, "{} ", tag(meta))?;
        if *meta.level() > Level::INFO {
            write!(writer, "{} ", format!("{}:", meta.target()).dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Logs `err` on one line and each of its causes on a line beneath it.
pub fn report(err: &anyhow::Error) {
    error!("{err}");
    for cause in err.chain().skip(1) {
        error!(target: CAUSE_TARGET, "{cause}");
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so stdout only
/// carries representations.
///
/// `RUST_LOG` wins over the level derived from `--quiet`.
pub fn init(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .event_format(Ipv4MixFormatter)
        .init();
}
