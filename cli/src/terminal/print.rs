use std::io::{self, BufWriter, Write};

/// Writes one line per item to stdout.
pub fn lines<I>(lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_lines(&mut out, lines)?;
    out.flush()
}

pub fn write_lines<W, I>(out: &mut W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
