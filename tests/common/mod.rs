//! Common test utilities for domain-checker tests

#![allow(dead_code)] // These functions are used by various test files

use domain_checker::{Domain, DomainChecker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Forbidden set from the reference scenarios
pub const SCENARIO_FORBIDDEN: [&str; 4] = ["gdz.ru", "maps.me", "m.gdz.ru", "com"];

pub fn domains(names: &[&str]) -> Vec<Domain> {
    names.iter().map(|name| Domain::new(*name)).collect()
}

pub fn retained_names(checker: &DomainChecker) -> Vec<String> {
    checker
        .domains()
        .iter()
        .map(|d| d.name().to_string())
        .collect()
}

/// Label-aligned suffix test on plain strings, independent of the checker
pub fn oracle_is_subdomain(domain: &str, ancestor: &str) -> bool {
    domain == ancestor
        || (domain.len() > ancestor.len()
            && domain.ends_with(ancestor)
            && domain.as_bytes()[domain.len() - ancestor.len() - 1] == b'.')
}

/// Brute-force forbidden check over the raw input set
pub fn oracle_is_forbidden(forbidden: &[String], domain: &str) -> bool {
    forbidden.iter().any(|f| oracle_is_subdomain(domain, f))
}

/// Random domains over a tiny label alphabet so that collisions, shared
/// suffixes and character-suffix near misses are all common
pub fn random_domains(rng: &mut StdRng, count: usize) -> Vec<String> {
    const LABELS: [&str; 6] = ["a", "b", "aa", "ab", "ba", "aaa"];

    (0..count)
        .map(|_| {
            let depth = rng.random_range(1..=4);
            (0..depth)
                .map(|_| LABELS[rng.random_range(0..LABELS.len())])
                .collect::<Vec<_>>()
                .join(".")
        })
        .collect()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
