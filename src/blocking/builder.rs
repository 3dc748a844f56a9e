use crate::blocking::checker::DomainChecker;
use crate::blocking::domain::Domain;
use crate::blocking::lookup::DomainNormalizer;
use crate::blocking::parser::{BlocklistFormat, BlocklistParser};
use crate::error::{CheckerError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Collects forbidden domains from one or more blocklists before building a
/// [`DomainChecker`]
#[derive(Debug, Default)]
pub struct BlocklistBuilder {
    /// Domains collected so far, not yet deduplicated
    domains: Vec<Domain>,
    /// Lowercase and strip trailing dots before storing
    normalize: bool,
    /// Lines that produced a domain, across all sources
    total_processed: usize,
    /// Lines skipped by the parser (comments, blanks, invalid entries)
    total_skipped: usize,
}

impl BlocklistBuilder {
    /// Create a new blocklist builder
    pub fn new(normalize: bool) -> Self {
        Self {
            normalize,
            ..Default::default()
        }
    }

    /// Add a single domain
    pub fn add_domain(&mut self, domain: &str) {
        self.total_processed += 1;

        let domain = if self.normalize {
            DomainNormalizer::normalize(domain)
        } else {
            domain.into()
        };

        debug!("Collected domain: {}", domain);
        self.domains.push(Domain::new(domain.into_owned()));
    }

    /// Load domains from any buffered reader
    pub fn load_reader<R: BufRead>(
        &mut self,
        reader: R,
        format: BlocklistFormat,
        list_name: &str,
    ) -> Result<usize> {
        let parser = BlocklistParser::new(format);
        let initial_count = self.domains.len();

        for line in reader.lines() {
            let line = line.map_err(|e| CheckerError::Io(format!("Failed to read line: {}", e)))?;

            match parser.parse_line(&line) {
                Some(domain) => self.add_domain(&domain),
                None => self.total_skipped += 1,
            }
        }

        let added = self.domains.len() - initial_count;
        info!("Loaded {} domains from {} (format: {:?})", added, list_name, format);
        Ok(added)
    }

    /// Load domains from a blocklist file
    pub fn load_file(
        &mut self,
        path: &Path,
        format: BlocklistFormat,
        list_name: &str,
    ) -> Result<usize> {
        info!("Loading blocklist {} from {:?} (format: {:?})", list_name, path, format);

        let file = File::open(path)
            .map_err(|e| {
            CheckerError::Io(format!(
                "Failed to open blocklist file {}: {}",
                path.display(),
                e
            ))
        })?;
        self.load_reader(BufReader::new(file), format, list_name)
    }

    /// Load domains from in-memory blocklist content
    pub fn load_str(
        &mut self,
        content: &str,
        format: BlocklistFormat,
        list_name: &str,
    ) -> Result<usize> {
        self.load_reader(content.as_bytes(), format, list_name)
    }

    /// Number of domains collected (before deduplication)
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Build the final checker
    pub fn build(self) -> (DomainChecker, BlocklistStats) {
        let total_processed = self.total_processed;
        let total_skipped = self.total_skipped;
        let checker = DomainChecker::new(self.domains);

        let stats = BlocklistStats {
            total_processed,
            total_skipped,
            unique_domains: checker.len(),
        };

        info!(
            "Built checker with {} domains (deduplicated {} entries, {:.1}% reduction)",
            stats.unique_domains,
            stats.redundant_domains(),
            stats.deduplication_rate()
        );

        (checker, stats)
    }
}

/// Build a checker from blocklist files. Any unreadable file fails the
/// whole load, since a partial forbidden set would allow what it should block.
pub fn load_blocklists(
    paths: &[PathBuf],
    format: BlocklistFormat,
    normalize: bool,
) -> Result<(DomainChecker, BlocklistStats)> {
    let mut builder = BlocklistBuilder::new(normalize);
    for path in paths {
        builder.load_file(path, format, &path.display().to_string())?;
    }
    Ok(builder.build())
}

/// Blocklist statistics after building
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlocklistStats {
    pub total_processed: usize,
    pub total_skipped: usize,
    pub unique_domains: usize,
}

impl BlocklistStats {
    /// Entries dropped as duplicates or subdomains of another entry
    pub fn redundant_domains(&self) -> usize {
        self.total_processed - self.unique_domains
    }

    pub fn deduplication_rate(&self) -> f64 {
        if self.total_processed == 0 {
            0.0
        } else {
            (self.redundant_domains() as f64 / self.total_processed as f64) * 100.0
        }
    }
}
