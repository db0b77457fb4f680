//! Rendering a [`CoverageResult`] for people
use std::io::{self, Write};
use coverage::CoverageResult;

/// Knobs for [`write_report`]
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Print only this many frequency list entries
    pub top: Option<usize>,
}

/// Write the comprehension summary, the cutoffs and the frequency list
pub fn write_report<W: Write>(result: &CoverageResult, options: &ReportOptions, out: &mut W) -> io::Result<()> {
    if result.is_empty() {
        writeln!(out, "No valid Japanese morphemes found.")?;
        return Ok(());
    }

    // Without any known morphemes there's no current comprehension worth mentioning
    if result.total_known_morphs() > 0 {
        let comprehension = result.comprehension().unwrap_or(0.0);
        writeln!(out, "Your current comprehension is {:.0}%.", comprehension * 100.0)?;
        writeln!(out, "(You know {} of {} morphemes.)",
            result.total_known_morphs(), result.total_morphs())?;
    }

    for (pct, cutoff) in result.cutoffs() {
        writeln!(out, "{}% comprehension is gained after unknown unique morpheme {} of {}",
            pct, cutoff, result.unique_unknown_morphs())?;
    }

    let shown = options.top.unwrap_or_else(|| result.unique_unknown_morphs());
    for (i, entry) in result.ranked_unknown().iter().take(shown).enumerate() {
        writeln!(out, "{}: {} {}", i + 1, entry.morpheme(), entry.count())?;
    }
    Ok(())
}
