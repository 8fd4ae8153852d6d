use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use levelwise::apriori::{mine, Apriori, AprioriConfig};
use rand::Rng;

/// Generate synthetic transactions
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: Chance that each drawn item is kept (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<usize>> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.gen();
            let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
            let num_items_in_tx = num_items_in_tx.min(num_items);

            let mut tx: Vec<usize> = (0..num_items_in_tx)
                .filter_map(|_| (rng.gen::<f64>() < density).then(|| rng.gen_range(0..num_items)))
                .collect();
            tx.sort_unstable();
            tx.dedup();
            tx
        })
        .collect()
}

fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 30, 6),
        ("large_1000tx", 1000, 40, 8),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| mine(black_box(tx), black_box(0.1)));
        });
    }

    group.finish();
}

fn bench_apriori_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_min_support");

    let transactions = generate_transactions(1000, 30, 8, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| mine(black_box(&transactions), black_box(sup)));
            },
        );
    }

    group.finish();
}

/// Parallel scan and join pruning against the plain sequential search
fn bench_apriori_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_config");

    let transactions = generate_transactions(2000, 30, 8, 0.8);

    let variants = vec![
        ("sequential", false, false),
        ("parallel", true, false),
        ("sequential_pruned", false, true),
        ("parallel_pruned", true, true),
    ];

    for (name, parallel, pruning) in variants {
        let miner = Apriori::with_config(
            AprioriConfig::new(0.05)
                .with_parallel(parallel)
                .with_subset_pruning(pruning),
        );

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| miner.mine(black_box(tx)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apriori_scaling,
    bench_apriori_min_support,
    bench_apriori_config
);
criterion_main!(benches);
