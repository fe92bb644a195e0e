use core::hint::black_box;

use criterion::BatchSize;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use shift_hash::BackwardShift;
use shift_hash::Config;
use shift_hash::Table;
use shift_hash::TombstoneMark;
use shift_hash::hasher::Crc32;
use shift_hash::hasher::Djb2;
use shift_hash::hasher::Fnv1a;
use shift_hash::hasher::KeyHasher;
use shift_hash::hasher::Murmur3;
use shift_hash::hasher::Sdbm;
use shift_hash::storage::Columnar;
use shift_hash::storage::Grouped;
use shift_hash::storage::Storage;

const SIZES: [usize; 2] = [1_024, 65_536];

type Key = [u8; 8];

fn keys(count: usize) -> Vec<Key> {
    (0..count as u64).map(|i| i.to_le_bytes()).collect()
}

fn filled_table<L: Storage<Key, u64>>(keys: &[Key]) -> Table<Key, u64, L> {
    let mut table = Table::with_config(Config::default()).unwrap();
    for (i, key) in keys.iter().enumerate() {
        table.insert(*key, i as u64).unwrap();
    }
    table
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in SIZES {
        let keys = keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("grouped/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::seed_from_u64(0xA11CE));
                    keys
                },
                |keys| {
                    let mut table: Table<Key, u64, Grouped<Key, u64>> = Table::new().unwrap();
                    for (i, key) in keys.into_iter().enumerate() {
                        table.insert(key, i as u64).unwrap();
                    }
                    table
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("columnar/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::seed_from_u64(0xA11CE));
                    keys
                },
                |keys| {
                    let mut table: Table<Key, u64, Columnar<Key, u64>> = Table::new().unwrap();
                    for (i, key) in keys.into_iter().enumerate() {
                        table.insert(key, i as u64).unwrap();
                    }
                    table
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::seed_from_u64(0xA11CE));
                    keys
                },
                |keys| {
                    let mut map: hashbrown::HashMap<Key, u64> = hashbrown::HashMap::new();
                    for (i, key) in keys.into_iter().enumerate() {
                        map.insert(key, i as u64);
                    }
                    map
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_search_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_hit");

    for size in SIZES {
        let keys = keys(size);
        let grouped = filled_table::<Grouped<Key, u64>>(&keys);
        let columnar = filled_table::<Columnar<Key, u64>>(&keys);
        let hashbrown: hashbrown::HashMap<Key, u64> = keys
            .iter()
            .enumerate()
            .map(|(i, key)| (*key, i as u64))
            .collect();

        let mut shuffled = keys.clone();
        shuffled.shuffle(&mut SmallRng::seed_from_u64(0xF00D));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("grouped/{size}"), |b| {
            b.iter(|| {
                for key in &shuffled {
                    black_box(grouped.search(key));
                }
            })
        });
        group.bench_function(format!("columnar/{size}"), |b| {
            b.iter(|| {
                for key in &shuffled {
                    black_box(columnar.search(key));
                }
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in &shuffled {
                    black_box(hashbrown.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_search_zipf(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_zipf");

    for size in SIZES {
        let keys = keys(size);
        let grouped = filled_table::<Grouped<Key, u64>>(&keys);
        let columnar = filled_table::<Columnar<Key, u64>>(&keys);

        // Skewed access: a handful of hot keys dominate, half the key space
        // misses entirely.
        let distr = Zipf::new(size as f32 * 2.0 - 1.0, 1.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(0x21F);
        let lookups: Vec<Key> = (0..size)
            .map(|_| (rng.sample(distr) as u64).to_le_bytes())
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("grouped/{size}"), |b| {
            b.iter(|| {
                for key in &lookups {
                    black_box(grouped.search(key));
                }
            })
        });
        group.bench_function(format!("columnar/{size}"), |b| {
            b.iter(|| {
                for key in &lookups {
                    black_box(columnar.search(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove_reinsert_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_reinsert_churn");

    for size in SIZES {
        let keys = keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("backward_shift/{size}"), |b| {
            b.iter_batched(
                || filled_table::<Grouped<Key, u64>>(&keys),
                |mut table| {
                    for key in keys.iter().step_by(2) {
                        table.remove(key).unwrap();
                    }
                    for key in keys.iter().step_by(2) {
                        table.insert(*key, 0).unwrap();
                    }
                    table
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("tombstone/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut table: Table<Key, u64, Grouped<Key, u64>, TombstoneMark> =
                        Table::new().unwrap();
                    for (i, key) in keys.iter().enumerate() {
                        table.insert(*key, i as u64).unwrap();
                    }
                    table
                },
                |mut table| {
                    for key in keys.iter().step_by(2) {
                        table.remove(key).unwrap();
                    }
                    for key in keys.iter().step_by(2) {
                        table.insert(*key, 0).unwrap();
                    }
                    table
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_hashers(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashers");

    let mut rng = SmallRng::seed_from_u64(0xD16E57);
    let payload: Vec<u8> = (0..4_096).map(|_| rng.random()).collect();

    let hashers: [(&str, &dyn KeyHasher); 5] = [
        ("fnv1a", &Fnv1a),
        ("djb2", &Djb2),
        ("sdbm", &Sdbm),
        ("murmur3", &Murmur3),
        ("crc32", &Crc32),
    ];

    group.throughput(Throughput::Bytes(payload.len() as u64));
    for (name, hasher) in hashers {
        group.bench_function(name, |b| b.iter(|| black_box(hasher.digest(&payload))));
    }

    group.finish();
}

fn bench_mixed_zipf_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_zipf_workload");

    for size in SIZES {
        let distr = Zipf::new(size as f32 * 2.0 - 1.0, 1.0).unwrap();

        group.throughput(Throughput::Elements(size as u64 * 3));
        group.bench_function(format!("backward_shift/{size}"), |b| {
            b.iter_batched(
                || SmallRng::seed_from_u64(0xC0FFEE),
                |mut rng| {
                    let mut table: Table<Key, u64, Grouped<Key, u64>, BackwardShift> =
                        Table::new().unwrap();
                    for _ in 0..size * 3 {
                        let key = (rng.sample(distr) as u64).to_le_bytes();
                        match rng.random_range(0..3u8) {
                            0 => {
                                let _ = table.insert(key, 1);
                            }
                            1 => {
                                black_box(table.search(&key));
                            }
                            _ => {
                                let _ = table.remove(&key);
                            }
                        }
                    }
                    table
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_search_hit,
    bench_search_zipf,
    bench_remove_reinsert_churn,
    bench_hashers,
    bench_mixed_zipf_workload,
);

criterion_main!(benches);
