//! Rendering of per-query verdicts
use crate::blocking::Domain;
use crate::error::{CheckerError, Result};
use serde::Serialize;
use std::io::Write;

/// Default label printed for a forbidden domain
pub const DEFAULT_BAD_LABEL: &str = "Bad";
/// Default label printed for an allowed domain
pub const DEFAULT_GOOD_LABEL: &str = "Good";

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One label per line
    #[default]
    Human,
    /// One JSON object per line
    Json,
}

/// Labels used for the two verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictLabels {
    pub bad: String,
    pub good: String,
}

impl Default for VerdictLabels {
    fn default() -> Self {
        Self {
            bad: DEFAULT_BAD_LABEL.to_string(),
            good: DEFAULT_GOOD_LABEL.to_string(),
        }
    }
}

impl VerdictLabels {
    pub fn label(&self, forbidden: bool) -> &str {
        if forbidden { &self.bad } else { &self.good }
    }
}

#[derive(Serialize)]
struct VerdictRecord<'a> {
    domain: &'a str,
    forbidden: bool,
    verdict: &'a str,
}

/// Writes one verdict per query
pub struct ReportWriter<W> {
    out: W,
    format: OutputFormat,
    labels: VerdictLabels,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, format: OutputFormat, labels: VerdictLabels) -> Self {
        Self {
            out,
            format,
            labels,
        }
    }

    pub fn write_verdict(&mut self, domain: &Domain, forbidden: bool) -> Result<()> {
        let verdict = self.labels.label(forbidden);
        match self.format {
            OutputFormat::Human => writeln!(self.out, "{}", verdict)?,
            OutputFormat::Json => {
                let record = VerdictRecord {
                    domain: domain.name(),
                    forbidden,
                    verdict,
                };
                let line = serde_json::to_string(&record)
                    .map_err(|e| CheckerError::Serialization(e.to_string()))?;
                writeln!(self.out, "{}", line)?;
            }
        }
        Ok(())
    }

    /// Write all verdicts; `results[i]` belongs to `queries[i]`
    pub fn write_all(&mut self, queries: &[Domain], results: &[bool]) -> Result<()> {
        for (domain, &forbidden) in queries.iter().zip(results) {
            self.write_verdict(domain, forbidden)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: OutputFormat, labels: VerdictLabels) -> String {
        let queries = vec![Domain::new("gdz.com"), Domain::new("maps.ru")];
        let mut writer = ReportWriter::new(Vec::new(), format, labels);
        writer.write_all(&queries, &[true, false]).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_human_output() {
        assert_eq!(
            render(OutputFormat::Human, VerdictLabels::default()),
            "Bad\nGood\n"
        );
    }

    #[test]
    fn test_custom_labels() {
        let labels = VerdictLabels {
            bad: "BLOCK".to_string(),
            good: "PASS".to_string(),
        };
        assert_eq!(render(OutputFormat::Human, labels), "BLOCK\nPASS\n");
    }

    #[test]
    fn test_json_output() {
        let output = render(OutputFormat::Json, VerdictLabels::default());
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["domain"], "gdz.com");
        assert_eq!(lines[0]["forbidden"], true);
        assert_eq!(lines[0]["verdict"], "Bad");
        assert_eq!(lines[1]["verdict"], "Good");
    }
}
