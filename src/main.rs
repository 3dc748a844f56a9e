use clap::Parser;
use domain_checker::blocking::{
    BlocklistFormat, BlockingStats, Domain, DomainChecker, load_blocklists,
};
use domain_checker::config::{CheckerConfig, SUMMARY_TARGET};
use domain_checker::error::Result;
use domain_checker::input::InputReader;
use domain_checker::report::{OutputFormat, ReportWriter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Check domains against a set of forbidden domains and their subdomains
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read input from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Build the forbidden set from blocklist files; input then holds one
    /// query domain per line
    #[arg(short, long, value_name = "FILE")]
    blocklist: Vec<PathBuf>,

    /// Format of the blocklist files
    #[arg(short, long, value_enum)]
    format: Option<BlocklistFormat>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "human")]
    output: OutputFormat,

    /// Lowercase domains and strip trailing dots before checking
    #[arg(short, long)]
    normalize: bool,

    /// Worker threads for checking queries
    #[arg(short, long)]
    workers: Option<usize>,

    /// Log a blocked/allowed summary when done
    #[arg(short, long)]
    summary: bool,

    /// Label printed for forbidden domains
    #[arg(long)]
    bad_label: Option<String>,

    /// Label printed for allowed domains
    #[arg(long)]
    good_label: Option<String>,
}

impl Args {
    fn apply(&self, config: &mut CheckerConfig) {
        if self.normalize {
            config.normalize = true;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(format) = self.format {
            config.blocklist_format = format;
        }
        if let Some(label) = &self.bad_label {
            config.bad_label = label.clone();
        }
        if let Some(label) = &self.good_label {
            config.good_label = label.clone();
        }
    }
}

fn open_input(path: Option<&PathBuf>) -> io::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Build the checker and collect the queries
fn load(args: &Args, config: &CheckerConfig) -> Result<(DomainChecker, Vec<Domain>)> {
    let mut reader = InputReader::new(open_input(args.input.as_ref())?, config.normalize);

    if args.blocklist.is_empty() {
        let request = reader.read_request()?;
        return Ok((DomainChecker::new(request.forbidden), request.queries));
    }

    let (checker, stats) =
        load_blocklists(&args.blocklist, config.blocklist_format, config.normalize)?;
    debug!("Blocklist stats: {:?}", stats);

    Ok((checker, reader.read_remaining()?))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = CheckerConfig::from_env()?;
    args.apply(&mut config);
    config.validate()?;

    // Logs go to stderr so stdout carries only verdicts
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter(args.summary)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let start = Instant::now();
    let (checker, queries) = load(&args, &config)?;
    info!(
        "Checking {} queries against {} forbidden domains",
        queries.len(),
        checker.len()
    );

    let results = checker.check_parallel(&queries, config.workers);

    let stats = BlockingStats::new();
    for &forbidden in &results {
        stats.record(forbidden);
    }

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), args.output, config.labels());
    writer.write_all(&queries, &results)?;

    if args.summary {
        info!(target: SUMMARY_TARGET, "{}", stats.summary(start.elapsed()));
    }

    Ok(())
}
