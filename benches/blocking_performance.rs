use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use domain_checker::{Domain, DomainChecker};
use std::hint::black_box;

fn create_test_domains() -> Vec<Domain> {
    let mut domains = Vec::new();

    // Mix of blocked and non-blocked domains
    for i in 0..1000 {
        domains.push(Domain::new(format!("test{}.example.com", i)));
        domains.push(Domain::new(format!("ads.blocked{}.example.com", i)));
        domains.push(Domain::new(format!("safe{}.website.org", i)));
    }

    domains
}

fn create_checker(size: usize) -> DomainChecker {
    DomainChecker::new((0..size).map(|i| Domain::new(format!("blocked{}.example.com", i))))
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("checker");

    let checker = create_checker(10000);
    let test_domains = create_test_domains();

    group.bench_function("lookup", |b| {
        b.iter(|| {
            for domain in &test_domains {
                black_box(checker.is_forbidden(domain));
            }
        });
    });

    group.bench_function("single_lookup", |b| {
        let domain = Domain::new("ads.blocked123.example.com");
        b.iter(|| black_box(checker.is_forbidden(&domain)));
    });

    group.bench_function("parallel_lookup", |b| {
        b.iter(|| black_box(checker.check_parallel(&test_domains, 4)));
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [1000, 10000, 100000].iter() {
        let domains: Vec<Domain> = (0..*size)
            .flat_map(|i| {
                [
                    Domain::new(format!("domain{}.example.com", i)),
                    Domain::new(format!("sub.domain{}.example.com", i)),
                ]
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("new", size), &domains, |b, domains| {
            b.iter(|| black_box(DomainChecker::new(domains.iter().cloned())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_construction);
criterion_main!(benches);
