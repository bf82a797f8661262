// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for the per-frame grid tick and the page metadata builder
//!
//! Run with: cargo bench --bench folio_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio::content::Content;
use folio::flag::{FlagGrid, FlagMode, MotionSettings};
use folio::seo::{self, PageContext};
use folio::site::Site;
use folio::types::{Project, SiteConfig, SiteMetadata};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

// =============================================================================
// Grid Sizes
// =============================================================================

const SIZES: &[(usize, usize, &str)] = &[(10, 5, "10x5"), (24, 12, "24x12"), (60, 30, "60x30")];

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("flag/tick");
    for &(cols, rows, name) in SIZES {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = FlagGrid::new(cols, rows, FlagMode::Shuffled, MotionSettings::default(), &mut rng)
            .expect("non-empty grid");
        grid.set_pointer_target(0.6, -0.3);
        group.throughput(Throughput::Elements((cols * rows) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &(), |b, ()| {
            let mut now = 0.0;
            b.iter(|| {
                now += 16.0;
                grid.tick(black_box(now));
            });
        });
    }
    group.finish();
}

fn bench_scramble(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut grid = FlagGrid::new(10, 5, FlagMode::Puzzle, MotionSettings::default(), &mut rng)
        .expect("non-empty grid");
    c.bench_function("flag/scramble", |b| b.iter(|| grid.scramble(&mut rng)));
}

fn bench_build(c: &mut Criterion) {
    let config = SiteConfig {
        site: SiteMetadata {
            title: "Example".into(),
            site_url: "https://example.com".into(),
            ..SiteMetadata::default()
        },
        ..SiteConfig::default()
    };
    let site = Site::new(config, Content::default()).expect("site url set");
    let projects: Vec<Project> = (0..12)
        .map(|i| Project {
            title: format!("Project {i}"),
            icon: format!("/icons/{i}.svg"),
            repo: Some(format!("https://github.com/example/p{i}")),
            ..Project::default()
        })
        .collect();
    let page = PageContext::new("/ga/projects/", "ga").with_title("Tionscadail");

    c.bench_function("seo/build", |b| {
        b.iter(|| seo::build(black_box(&site), black_box(&page), black_box(&projects)));
    });
}

criterion_group!(benches, bench_tick, bench_scramble, bench_build);
criterion_main!(benches);
