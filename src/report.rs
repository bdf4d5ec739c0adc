//! Tiered attendance report.
//!
//! Consumes the ranked tallies and prints two sections: Regulars
//! (count >= 5) and Almost Regulars (3 <= count < 5). Members below
//! three attendances are omitted entirely.

use std::io::{self, Write};

use crate::models::MemberTally;

/// Minimum attendance count to be listed as a Regular.
pub const REGULAR_MIN_COUNT: u32 = 5;

/// Minimum attendance count to be listed as an Almost Regular.
pub const ALMOST_REGULAR_MIN_COUNT: u32 = 3;

/// Write the tiered report. Entries keep the ranking's order, one
/// tab-indented `name(count)` per line.
pub fn write_report<W: Write>(out: &mut W, ranking: &[MemberTally]) -> io::Result<()> {
    writeln!(out, "Regulars:")?;
    for tally in ranking.iter().filter(|t| t.count >= REGULAR_MIN_COUNT) {
        writeln!(out, "\t{}({})", tally.name, tally.count)?;
    }

    writeln!(out)?;
    writeln!(out, "Almost Regulars:")?;
    for tally in ranking
        .iter()
        .filter(|t| t.count >= ALMOST_REGULAR_MIN_COUNT && t.count < REGULAR_MIN_COUNT)
    {
        writeln!(out, "\t{}({})", tally.name, tally.count)?;
    }

    Ok(())
}
