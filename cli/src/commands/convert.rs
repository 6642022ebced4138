use anyhow::Context;
use tracing::{debug, warn};

use crate::terminal::print;
use ipv4mix_common::network::notation;
use ipv4mix_common::render::table;

/// Expands `address` and prints every representation of it to stdout.
///
/// A failed strict check is only warned about; nothing is printed when the
/// address cannot be expanded.
pub fn convert(address: &str) -> anyhow::Result<()> {
    let octets = notation::parse_with_advisory(address, |mismatch| warn!("{mismatch}"))
        .with_context(|| format!("cannot expand '{address}'"))?;

    debug!(%octets, "rendering representations");
    print::lines(table::lines(&octets)).context("writing representations to stdout")?;
    Ok(())
}
