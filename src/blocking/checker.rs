/// Sorted, deduplicated index of forbidden domains
use crate::blocking::domain::Domain;
use tracing::{debug, warn};

/// Read-only set of forbidden domains.
///
/// Entries are kept sorted by reversed key and form an antichain: no entry is
/// a subdomain of another. Queries are O(log n), construction O(n log n).
#[derive(Debug, Clone, Default)]
pub struct DomainChecker {
    domains: Vec<Domain>,
}

impl DomainChecker {
    /// Build the minimal covering of `domains`
    pub fn new<I>(domains: I) -> Self
    where
        I: IntoIterator<Item = Domain>,
    {
        let mut domains: Vec<Domain> = domains.into_iter().collect();
        let input_count = domains.len();

        domains.sort_unstable();
        // Descendants sort directly after their ancestor, so comparing each
        // candidate against the last retained entry removes all of them.
        domains.dedup_by(|candidate, retained| candidate.is_subdomain(retained));

        debug!(
            "Built domain checker: {} input domains, {} retained",
            input_count,
            domains.len()
        );

        Self { domains }
    }

    /// Build from raw domain strings
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(names.into_iter().map(|name| Domain::new(name.as_ref())))
    }

    /// True if `domain` equals or is a subdomain of a forbidden entry
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        self.covering_entry(domain).is_some()
    }

    /// Convenience wrapper around [`is_forbidden`](Self::is_forbidden)
    pub fn is_forbidden_name(&self, name: &str) -> bool {
        self.is_forbidden(&Domain::new(name))
    }

    /// The retained entry that forbids `domain`, if any.
    ///
    /// At most one entry can be an ancestor of `domain`, and it sits at or
    /// directly before the query's insertion point.
    pub fn covering_entry(&self, domain: &Domain) -> Option<&Domain> {
        let pos = self
            .domains
            .partition_point(|entry| entry.reversed_key() < domain.reversed_key());

        if let Some(entry) = self.domains.get(pos) {
            if entry.reversed_key() == domain.reversed_key() {
                return Some(entry);
            }
        }

        let prev = self.domains.get(pos.checked_sub(1)?)?;
        domain.is_subdomain(prev).then_some(prev)
    }

    /// Check every query in order
    pub fn check_all(&self, queries: &[Domain]) -> Vec<bool> {
        queries.iter().map(|q| self.is_forbidden(q)).collect()
    }

    /// Same result as [`check_all`](Self::check_all), split across `workers`
    /// scoped threads. Falls back to a sequential pass for one worker.
    pub fn check_parallel(&self, queries: &[Domain], workers: usize) -> Vec<bool> {
        if workers <= 1 || queries.len() < 2 {
            return self.check_all(queries);
        }

        let chunk_size = queries.len().div_ceil(workers);
        let mut results = vec![false; queries.len()];

        let scoped = crossbeam::thread::scope(|s| {
            for (input, output) in queries
                .chunks(chunk_size)
                .zip(results.chunks_mut(chunk_size))
            {
                s.spawn(move |_| {
                    for (query, slot) in input.iter().zip(output.iter_mut()) {
                        *slot = self.is_forbidden(query);
                    }
                });
            }
        });

        match scoped {
            Ok(()) => results,
            Err(_) => {
                // A worker panicked; recompute on this thread
                warn!("Parallel check failed, falling back to sequential pass");
                self.check_all(queries)
            }
        }
    }

    /// Retained entries in sorted-key order
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl FromIterator<Domain> for DomainChecker {
    fn from_iter<T: IntoIterator<Item = Domain>>(iter: T) -> Self {
        Self::new(iter)
    }
}
