use criterion::{Criterion, criterion_group, criterion_main};
use lightsout_core::{BoardConfig, BoardEngine, BoardGenerator, Grid, RandomBoardGenerator};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in [(5, 5), (32, 32), (255, 255)] {
        let config = BoardConfig::new(size, 0.3).unwrap();
        group.bench_function(format!("{}x{}", size.0, size.1), |b| {
            b.iter(|| RandomBoardGenerator::new(black_box(0xdead_beef)).generate(config))
        });
    }
    group.finish();
}

fn bench_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("click");
    for size in [(5, 5), (32, 32), (255, 255)] {
        // the lit far corner is outside the click pattern, so the board never gets solved
        let mut grid = Grid::new(size).unwrap();
        grid.set((size.0 - 1, size.1 - 1), true).unwrap();
        let center = (size.0 / 2, size.1 / 2);

        group.bench_function(format!("{}x{}", size.0, size.1), |b| {
            let mut engine = BoardEngine::new(grid.clone());
            b.iter(|| engine.click(black_box(center)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_click);
criterion_main!(benches);
