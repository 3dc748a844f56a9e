/// Domain value type keyed by its reversed form
use crate::blocking::lookup::DomainLabels;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Separator appended to every reversed key so that prefix matches stay
/// aligned on label boundaries (`ru` must not look like an ancestor of `zru`).
const KEY_SEPARATOR: char = '.';

/// A single domain name.
///
/// Ordering, equality and hashing all go through the reversed key: the
/// character-reversed name followed by [`KEY_SEPARATOR`]. With that key an
/// ancestor domain is a strict prefix of each of its descendants, so
/// ancestors sort immediately before their subtrees.
#[derive(Debug, Clone)]
pub struct Domain {
    name: String,
    reversed_key: String,
}

impl Domain {
    /// Create a domain from its dotted name. No validation is performed.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let reversed_key = Self::reverse_key(&name);
        Self { name, reversed_key }
    }

    fn reverse_key(name: &str) -> String {
        let mut key = String::with_capacity(name.len() + KEY_SEPARATOR.len_utf8());
        key.extend(name.chars().rev());
        key.push(KEY_SEPARATOR);
        key
    }

    /// The dotted name this domain was built from
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Comparison key used by [`DomainChecker`](super::DomainChecker)
    #[inline]
    pub fn reversed_key(&self) -> &str {
        &self.reversed_key
    }

    /// True if `self` equals `other` or lies underneath it
    #[inline]
    pub fn is_subdomain(&self, other: &Domain) -> bool {
        self.reversed_key.starts_with(other.reversed_key.as_str())
    }

    /// Labels in forward order (`www`, `example`, `com`)
    pub fn labels(&self) -> DomainLabels<'_> {
        DomainLabels::new(&self.name)
    }

    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    /// The domain with its leftmost label removed, or `None` for a single label
    pub fn parent(&self) -> Option<Domain> {
        self.name
            .split_once('.')
            .map(|(_, rest)| Domain::new(rest))
    }

    /// A new domain with `label` prepended
    pub fn child(&self, label: &str) -> Domain {
        Domain::new(format!("{}.{}", label, self.name))
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.reversed_key == other.reversed_key
    }
}

impl Eq for Domain {}

impl PartialOrd for Domain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Domain {
    fn cmp(&self, other: &Self) -> Ordering {
        self.reversed_key.cmp(&other.reversed_key)
    }
}

impl Hash for Domain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reversed_key.hash(state);
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Domain {
    fn from(name: &str) -> Self {
        Domain::new(name)
    }
}

impl From<String> for Domain {
    fn from(name: String) -> Self {
        Domain::new(name)
    }
}

impl FromStr for Domain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Domain::new(s))
    }
}
