/// Extracts forbidden domains from blocklist lines
use std::net::IpAddr;

/// Longest domain accepted from a blocklist, in bytes
const MAX_DOMAIN_LEN: usize = 253;
/// Longest single label accepted from a blocklist, in bytes
const MAX_LABEL_LEN: usize = 63;

/// Supported blocklist formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BlocklistFormat {
    /// One domain per line
    #[default]
    DomainList,
    /// `IP domain [aliases...]`
    Hosts,
    /// `||domain^` rules
    #[value(name = "adblock")]
    AdBlockPlus,
    /// `address=/domain/IP` or `server=/domain/#`
    Dnsmasq,
    /// `local-zone: "domain" <type>`
    Unbound,
}

impl BlocklistFormat {
    /// Parse a format name as used in configuration
    pub fn parse_str(format: &str) -> Option<Self> {
        match format.to_lowercase().replace('_', "-").as_str() {
            "domain-list" | "domains" | "plain" => Some(BlocklistFormat::DomainList),
            "hosts" => Some(BlocklistFormat::Hosts),
            "adblock" | "adblock-plus" | "abp" => Some(BlocklistFormat::AdBlockPlus),
            "dnsmasq" => Some(BlocklistFormat::Dnsmasq),
            "unbound" => Some(BlocklistFormat::Unbound),
            _ => None,
        }
    }
}

pub struct BlocklistParser {
    format: BlocklistFormat,
}

impl BlocklistParser {
    pub fn new(format: BlocklistFormat) -> Self {
        Self { format }
    }

    /// Domain named by `line`, or `None` for comments, blanks, rules this
    /// format does not block on, and invalid names
    pub fn parse_line(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            return None;
        }

        let domain = match self.format {
            BlocklistFormat::DomainList => Some(line),
            BlocklistFormat::Hosts => hosts_domain(line),
            BlocklistFormat::AdBlockPlus => adblock_domain(line),
            BlocklistFormat::Dnsmasq => dnsmasq_domain(line),
            BlocklistFormat::Unbound => unbound_domain(line),
        }?;

        is_valid_domain(domain).then(|| domain.to_string())
    }
}

fn hosts_domain(line: &str) -> Option<&str> {
    let mut fields = line.split_whitespace();
    fields.next()?.parse::<IpAddr>().ok()?;

    fields.next().filter(|domain| *domain != "localhost")
}

/// Only plain `||domain^` rules; exceptions, options, paths and wildcards
/// have no meaning for a suffix blocklist
fn adblock_domain(line: &str) -> Option<&str> {
    if line.starts_with("@@") || line.contains(['$', '/', '*']) {
        return None;
    }

    let domain = line.strip_prefix("||").unwrap_or(line);
    Some(domain.trim_end_matches(['^', '|']))
}

fn dnsmasq_domain(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix("address=/") {
        return rest.split_once('/').map(|(domain, _)| domain);
    }

    let (domain, target) = line.strip_prefix("server=/")?.split_once('/')?;
    (target == "#").then_some(domain)
}

fn unbound_domain(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("local-zone:")?.trim_start();
    let quoted = rest.strip_prefix('"')?;
    quoted.split_once('"').map(|(domain, _)| domain)
}

/// Non-empty labels of at most 63 bytes, alphanumeric with inner hyphens
fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|ch| ch.is_alphanumeric() || ch == '-')
    })
}
