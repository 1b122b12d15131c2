// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery filtering.
//!
//! Measures search and category filtering over a catalog much larger than
//! the shipped one, so regressions in the per-entry match show up.

use criterion::{criterion_group, criterion_main, Criterion};
use lumbini_site::domain::gallery::{
    Catalog, Category, CategoryFilter, EntryId, GalleryBrowser, GalleryEntry,
};
use std::hint::black_box;

const ENTRIES: u32 = 2_000;

fn large_catalog() -> Catalog {
    let entries = (0..ENTRIES)
        .filter_map(|i| {
            let category = Category::ALL[i as usize % Category::ALL.len()];
            GalleryEntry::new(
                EntryId::new(i),
                format!("Entry {i}"),
                format!("Description of gallery entry number {i}"),
                category,
                vec![format!("https://example.com/{i}.jpg")],
                vec![format!("tag{}", i % 17), "team".into()],
            )
            .ok()
        })
        .collect();
    Catalog::new(entries).expect("generated ids are unique")
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_filter");
    let mut browser = GalleryBrowser::new(large_catalog());

    group.bench_function("no_filter", |b| {
        b.iter(|| black_box(browser.filtered().len()));
    });

    browser.set_search_term("TAG3");
    group.bench_function("search_term", |b| {
        b.iter(|| black_box(browser.filtered().len()));
    });

    browser.set_category(CategoryFilter::Only(Category::Events));
    group.bench_function("search_and_category", |b| {
        b.iter(|| black_box(browser.filtered().len()));
    });

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
