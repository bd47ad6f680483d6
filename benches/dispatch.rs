use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use regionsweep::config::RunConfig;
use regionsweep::core::RegionId;
use regionsweep::monitoring::Logger;
use regionsweep::region::{RegionDispatcher, RegionProcessor, RegionWorkUnit};
use std::sync::Arc;

struct Yielding;

#[async_trait::async_trait]
impl RegionProcessor for Yielding {
    async fn process_region(&self, _unit: &RegionWorkUnit) -> regionsweep::Result<()> {
        tokio::task::yield_now().await;
        Ok(())
    }
}

fn bench_dispatch(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let dispatcher = RegionDispatcher::new(Arc::new(Yielding), Arc::new(Logger::disabled()));
    let config = Arc::new(RunConfig::default().with_regions(["eu-*"]));

    let mut group = c.benchmark_group("dispatch");
    for count in [4usize, 32, 256] {
        let regions: Vec<RegionId> = (0..count)
            .map(|i| RegionId::new(if i % 2 == 0 { format!("eu-{i}") } else { format!("us-{i}") }))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &regions, |b, regions| {
            b.iter(|| runtime.block_on(dispatcher.dispatch(regions, config.clone())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
