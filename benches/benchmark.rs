use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortbench::{Order, Sequence, SortKind};

fn benchmark_orders(c: &mut Criterion, size: usize, kinds: &[SortKind]) {
    let mut rng = StdRng::seed_from_u64(12345);
    for order in Order::ALL {
        let original = Sequence::with_rng(size, order, &mut rng);
        let mut group = c.benchmark_group(format!("{} {}", order, size));
        for &kind in kinds {
            group.bench_with_input(BenchmarkId::from_parameter(kind.name()), &original, |b, original| {
                b.iter_batched(
                    || original.clone(),
                    |mut seq| black_box(seq.sort_with(kind, &mut rng)),
                    BatchSize::SmallInput,
                )
            });
        }
        group.finish();
    }
}

fn benchmark_quadratic(c: &mut Criterion) {
    benchmark_orders(
        c,
        1000,
        &[SortKind::Selection, SortKind::Bubble, SortKind::Insertion, SortKind::ModifiedInsertion],
    );
}

fn benchmark_linearithmic(c: &mut Criterion) {
    benchmark_orders(
        c,
        30_000,
        &[SortKind::Merge, SortKind::RandomizedQuick, SortKind::Heap],
    );
}

fn benchmark_quick_random(c: &mut Criterion) {
    let original = Sequence::new(30_000, Order::Random);
    c.bench_function("Quick Random 30000", |b| {
        b.iter_batched(
            || original.clone(),
            |mut seq| black_box(seq.quick_sort()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_quadratic, benchmark_linearithmic, benchmark_quick_random);
criterion_main!(benches);
