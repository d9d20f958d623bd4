//! Grouping Benchmark - Near-Duplicate Detection Cost
//!
//! The grouper is O(n²) in distinct categories. Catalog columns hold a few
//! hundred labels at most; this measures metrics and full passes at that
//! scale.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use labelcheck_core::dataset::Cell;
use labelcheck_core::nlp::{partial_ratio, ratio, similarity_score, token_sort_ratio};
use labelcheck_core::{extract_categories, CategorySet, SimilarityGrouper, Whitelist};

const STEMS: &[&str] = &[
    "Segmentation", "Landmarks", "Ultrasound", "Prostate Cancer", "Breast Cancer",
    "General MSK", "Tracking", "Registration", "Brain Tumour", "Liver Lesion",
];

/// Generate `count` labels: stems with numbered suffixes, every fifth one
/// with a transposition typo.
fn generate_categories(count: usize) -> CategorySet {
    (0..count)
        .map(|i| {
            let stem = STEMS[i % STEMS.len()];
            let label = format!("{stem} {}", i / STEMS.len());
            if i % 5 == 0 {
                let mut chars: Vec<char> = label.chars().collect();
                chars.swap(1, 2);
                chars.into_iter().collect()
            } else {
                label
            }
        })
        .collect()
}

/// Benchmark: individual metrics on a typical label pair.
fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let (a, b) = ("prostate cancer", "cancer of the prostate");

    group.bench_function("ratio", |bench| {
        bench.iter(|| black_box(ratio(black_box(a), black_box(b))))
    });
    group.bench_function("partial_ratio", |bench| {
        bench.iter(|| black_box(partial_ratio(black_box(a), black_box(b))))
    });
    group.bench_function("token_sort_ratio", |bench| {
        bench.iter(|| black_box(token_sort_ratio(black_box(a), black_box(b))))
    });
    group.bench_function("similarity_score", |bench| {
        bench.iter(|| black_box(similarity_score(black_box(a), black_box(b))))
    });

    group.finish();
}

/// Benchmark: full grouping pass over columns of increasing size.
fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");
    let whitelist = Whitelist::builtin();

    for size in [25usize, 100, 300] {
        let categories = generate_categories(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &categories, |bench, set| {
            let grouper = SimilarityGrouper::new(&whitelist);
            bench.iter(|| black_box(grouper.group(black_box(set))))
        });
    }

    group.finish();
}

/// Benchmark: tokenizing a column of 1000 rows.
fn bench_tokenizer(c: &mut Criterion) {
    let cells: Vec<Cell> = (0..1000)
        .map(|i| match i % 7 {
            0 => Cell::Missing,
            n => Cell::text(format!(
                "{}, {} ,{}",
                STEMS[n],
                STEMS[(n + 3) % STEMS.len()],
                STEMS[i % STEMS.len()]
            )),
        })
        .collect();

    c.bench_function("extract_categories_1000_rows", |bench| {
        bench.iter(|| black_box(extract_categories(black_box(&cells), ',')))
    });
}

criterion_group!(benches, bench_metrics, bench_grouping, bench_tokenizer);
criterion_main!(benches);
