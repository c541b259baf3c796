#[macro_use]
extern crate criterion;

mod bench {
    use person_name::PersonName;
    use std::collections::HashSet;
    use std::fs::File;
    use std::io::prelude::*;
    use std::io::BufReader;

    use criterion::{black_box, Criterion};

    fn parsing_simple(c: &mut Criterion) {
        c.bench_function("family,given", |b| {
            b.iter(|| {
                let parsed = PersonName::parse("Smith,John");
                black_box(parsed.is_ok())
            })
        });
    }

    fn parsing_with_space(c: &mut Criterion) {
        c.bench_function("family, given", |b| {
            b.iter(|| {
                let parsed = PersonName::parse("Smith, John");
                black_box(parsed.is_ok())
            })
        });
    }

    fn parsing_long(c: &mut Criterion) {
        c.bench_function("multi-word heap", |b| {
            b.iter(|| {
                let parsed = PersonName::parse("Van Der Berg-O'Sullivan, John Michael Patrick");
                black_box(parsed.is_ok())
            })
        });
    }

    fn parsing_invalid(c: &mut Criterion) {
        c.bench_function("invalid", |b| {
            b.iter(|| {
                let parsed = PersonName::parse("smith,  john");
                black_box(parsed.is_ok())
            })
        });
    }

    criterion_group!(
        e2e_parsing,
        parsing_simple,
        parsing_with_space,
        parsing_long,
        parsing_invalid
    );

    fn compare_same_family(c: &mut Criterion) {
        let x = PersonName::parse("Van Der Berg,John").unwrap();
        let y = PersonName::parse("Van Der Berg,Johanna").unwrap();

        c.bench_function("compare same family", |b| b.iter(|| black_box(x.cmp(&y))));
    }

    fn compare_different_family(c: &mut Criterion) {
        let x = PersonName::parse("Adams,Zack").unwrap();
        let y = PersonName::parse("Smith,Ann").unwrap();

        c.bench_function("compare different family", |b| b.iter(|| black_box(x.cmp(&y))));
    }

    fn hash32(c: &mut Criterion) {
        let x = PersonName::parse("Van Der Berg,John Michael").unwrap();

        c.bench_function("hash32", |b| b.iter(|| black_box(x.hash32())));
    }

    fn display_name(c: &mut Criterion) {
        let x = PersonName::parse("Van Der Berg,John Michael").unwrap();

        c.bench_function("display name", |b| b.iter(|| black_box(x.display_name())));
    }

    criterion_group!(
        e2e_values,
        compare_same_family,
        compare_different_family,
        hash32,
        display_name
    );

    fn sorting_many(c: &mut Criterion) {
        let f = File::open("tests/ordered-names.txt").ok().unwrap();
        let reader = BufReader::new(f);
        let names: Vec<PersonName> = reader
            .lines()
            .filter_map(|l| PersonName::parse(&l.ok().unwrap()).ok())
            .collect();

        c.bench_function(&format!("sort {} names", names.len()), |b| {
            b.iter(|| {
                let mut sorted = names.clone();
                sorted.reverse();
                sorted.sort();
                black_box(sorted.len())
            })
        });
    }

    fn dedup_many(c: &mut Criterion) {
        let f = File::open("tests/ordered-names.txt").ok().unwrap();
        let reader = BufReader::new(f);
        let names: Vec<PersonName> = reader
            .lines()
            .filter_map(|l| PersonName::parse(&l.ok().unwrap()).ok())
            .collect();

        let mut deduped = HashSet::with_capacity(names.len());
        c.bench_function(&format!("dedup {} names", names.len()), |b| {
            b.iter(|| {
                deduped.extend(names.iter());
                black_box(deduped.len())
            })
        });
    }

    criterion_group!(realistic, sorting_many, dedup_many);
}

criterion_main!(bench::realistic, bench::e2e_values, bench::e2e_parsing);
