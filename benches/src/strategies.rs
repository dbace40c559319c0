use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tokio::runtime::Runtime;

use batcher::prelude::*;

/// Compare the three strategies on fault-free datasets of growing size
///
/// The simulated work delay is zeroed so the numbers reflect pipeline
/// overhead (grouping and task dispatch), not sleeping.
fn bench_strategies(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("strategies");

    for id_count in [20u32, 100, 500] {
        let items = DummyGenerator::new().with_id_count(id_count).generate();

        group.bench_with_input(
            BenchmarkId::new("sequential", id_count),
            &items,
            |b, items| {
                b.to_async(&rt).iter(|| async {
                    let processor = SimulatedProcessor::without_delay([]);
                    black_box(run_sequential(&processor, items.clone()).await)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", id_count),
            &items,
            |b, items| {
                b.to_async(&rt).iter(|| async {
                    let processor = Arc::new(SimulatedProcessor::without_delay([]));
                    black_box(run_parallel(processor, items.clone()).await)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("batched", id_count),
            &items,
            |b, items| {
                b.to_async(&rt).iter(|| async {
                    let dispatcher =
                        BatchDispatcher::new(SimulatedProcessor::without_delay([]));
                    black_box(dispatcher.run(items.clone()).await)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
