//! Sweep results and their text renderings.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::common::{Capacity, Error, Result};
use crate::replacer::{Policy, RunStats};

/// How a [`SweepReport`] is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Fixed-width hit-rate table, one column per policy.
    #[default]
    Table,
    /// One `frames,policy,...` line per run.
    Csv,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// One policy's result at one capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyResult {
    pub policy: Policy,
    pub stats: RunStats,
}

impl PolicyResult {
    /// Hit rate in percent: `(1 - faults / N) * 100`.
    pub fn hit_rate_percent(&self) -> f64 {
        self.stats.hit_rate() * 100.0
    }
}

/// All policies at one capacity, in report column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRow {
    pub capacity: Capacity,
    pub results: Vec<PolicyResult>,
}

impl SweepRow {
    pub fn get(&self, policy: Policy) -> Option<&PolicyResult> {
        self.results.iter().find(|r| r.policy == policy)
    }
}

/// The outcome of an [`Experiment`](crate::experiment::Experiment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Length of the simulated reference string.
    pub references: usize,

    /// CRC32 of the reference string.
    pub fingerprint: u32,

    /// Generator seed, or `None` for a literal reference string.
    pub seed: Option<u64>,

    pub policies: Vec<Policy>,
    pub rows: Vec<SweepRow>,
}

impl SweepReport {
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Table => self.render_table(),
            ReportFormat::Csv => self.render_csv(),
        }
    }

    /// Hit-rate table with two decimals.
    ///
    /// ```text
    /// references: 12, fingerprint: 0x1a2b3c4d, seed: literal
    /// Frames   FIFO(%)    LRU(%)    OPT(%)    NRU(%)
    ///      3     25.00     16.67     41.67      8.33
    /// ```
    pub fn render_table(&self) -> String {
        TableView(self).to_string()
    }

    /// Long-format CSV: `frames,policy,references,faults,evictions,hit_rate`.
    pub fn render_csv(&self) -> String {
        CsvView(self).to_string()
    }

    /// Render and write to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>, format: ReportFormat) -> Result<()> {
        std::fs::write(path, self.render(format))?;
        Ok(())
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&TableView(self), f)
    }
}

struct TableView<'a>(&'a SweepReport);

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        write!(
            f,
            "references: {}, fingerprint: {:#010x}, seed: ",
            report.references, report.fingerprint
        )?;
        match report.seed {
            Some(seed) => writeln!(f, "{}", seed)?,
            None => writeln!(f, "literal")?,
        }

        write!(f, "{:>6}", "Frames")?;
        for policy in &report.policies {
            // Policy's Display ignores width, so pad the whole label
            write!(f, "{:>10}", format!("{}(%)", policy))?;
        }
        writeln!(f)?;

        for row in &report.rows {
            write!(f, "{:>6}", row.capacity.get())?;
            for result in &row.results {
                write!(f, "{:>10.2}", result.hit_rate_percent())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

struct CsvView<'a>(&'a SweepReport);

impl fmt::Display for CsvView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frames,policy,references,faults,evictions,hit_rate")?;
        for row in &self.0.rows {
            for result in &row.results {
                writeln!(
                    f,
                    "{},{},{},{},{},{:.4}",
                    row.capacity.get(),
                    result.policy,
                    result.stats.references,
                    result.stats.faults,
                    result.stats.evictions,
                    result.stats.hit_rate()
                )?;
            }
        }
        Ok(())
    }
}
