//! Label iteration and normalization helpers for domain strings

use std::borrow::Cow;

/// Iterator over domain labels in forward order (TLD last)
pub struct DomainLabels<'a> {
    domain: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> DomainLabels<'a> {
    /// Create a new label iterator
    pub fn new(domain: &'a str) -> Self {
        // Handle trailing dot
        let domain = domain.strip_suffix('.').unwrap_or(domain);
        Self {
            domain,
            pos: 0,
            done: domain.is_empty(),
        }
    }
}

impl<'a> Iterator for DomainLabels<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let rest = &self.domain[self.pos..];
        match rest.find('.') {
            Some(dot) => {
                self.pos += dot + 1;
                Some(&rest[..dot])
            }
            None => {
                self.done = true;
                Some(rest)
            }
        }
    }
}

/// Optional normalization applied by collaborators before building a
/// [`Domain`](super::Domain). The checker itself compares keys byte for byte.
pub struct DomainNormalizer;

impl DomainNormalizer {
    /// Check if a domain needs normalization
    #[inline]
    pub fn needs_normalization(domain: &str) -> bool {
        domain.bytes().any(|b| b.is_ascii_uppercase())
            || (domain.len() > 1 && domain.ends_with('.'))
    }

    /// Lowercase ASCII letters and drop a single trailing dot.
    /// Borrows when the input is already normalized.
    pub fn normalize(domain: &str) -> Cow<'_, str> {
        if !Self::needs_normalization(domain) {
            return Cow::Borrowed(domain);
        }

        let trimmed = &domain[..Self::normalized_len(domain)];
        Cow::Owned(trimmed.to_ascii_lowercase())
    }

    /// Get the normalized length (without trailing dot)
    #[inline]
    pub fn normalized_len(domain: &str) -> usize {
        let len = domain.len();
        if len > 1 && domain.ends_with('.') {
            len - 1
        } else {
            len
        }
    }
}
