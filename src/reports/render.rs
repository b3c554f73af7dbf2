use std::fmt;

use crate::entry::WordEntry;

/// Lists entries as `word(frequency)`, `columns` per line, each
/// right-aligned to `field_width`. Every line starts with `\n`.
pub fn write_listing<W: fmt::Write>(
    out: &mut W,
    entries: &[WordEntry],
    columns: usize,
    field_width: usize,
) -> fmt::Result {
    for row in entries.chunks(columns.max(1)) {
        out.write_char('\n')?;
        for entry in row {
            write!(out, "{:>width$}", entry, width = field_width)?;
        }
    }
    Ok(())
}

/// [`write_listing`] into a single buffer.
pub fn render(entries: &[WordEntry], columns: usize, field_width: usize) -> String {
    let mut out = String::with_capacity(entries.len() * (field_width + 1));
    // Writing to a String cannot fail.
    write_listing(&mut out, entries, columns, field_width).expect("writing to String");
    out
}
