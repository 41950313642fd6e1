use chained_hashmap::HashMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_put_with_resizes(c: &mut Criterion) {
    c.bench_function("chained_put_10k_from_16", |b| {
        let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
        b.iter_batched(
            || (HashMap::<String, u64>::new(), keys.clone()),
            |(mut m, keys)| {
                for (i, k) in keys.into_iter().enumerate() {
                    m.put(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_put_update(c: &mut Criterion) {
    c.bench_function("chained_put_update_existing", |b| {
        let mut m = HashMap::new();
        let keys: Vec<_> = lcg(3).take(1_000).map(key).collect();
        for k in &keys {
            m.put(k.clone(), 0u64);
        }
        let mut it = keys.iter().cycle();
        let mut n = 0u64;
        b.iter(|| {
            n += 1;
            let k = it.next().unwrap().clone();
            black_box(m.put(k, n));
        })
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chained_get_hit", |b| {
        let mut m = HashMap::new();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.put(k.clone(), i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k.as_str()).unwrap());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chained_get_miss", |b| {
        let mut m = HashMap::new();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.put(key(x), i as u64);
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in map
            let k = key(miss.next().unwrap());
            black_box(m.get(k.as_str()));
        })
    });
}

fn bench_iterate(c: &mut Criterion) {
    c.bench_function("chained_iterate_10k", |b| {
        let m: HashMap<String, u64> = lcg(13).take(10_000).map(|x| (key(x), x)).collect();
        b.iter(|| black_box(m.values().fold(0u64, |acc, v| acc.wrapping_add(*v))))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_put_with_resizes, bench_put_update, bench_get_hit, bench_get_miss, bench_iterate
}
criterion_main!(benches);
