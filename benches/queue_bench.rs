use chained_hashmap::{LinkedList, Queue};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn bench_enqueue_dequeue(c: &mut Criterion) {
    c.bench_function("queue_enqueue_dequeue_10k", |b| {
        b.iter_batched(
            Queue::<u64>::new,
            |mut q| {
                for i in 0..10_000u64 {
                    q.enqueue(i);
                }
                let mut sum = 0u64;
                while let Ok(v) = q.dequeue() {
                    sum = sum.wrapping_add(v);
                }
                black_box(sum)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_rotate(c: &mut Criterion) {
    c.bench_function("queue_rotate_1k", |b| {
        let mut q: Queue<u64> = (0..1_000).collect();
        b.iter(|| {
            q.rotate();
            black_box(q.peek().ok());
        })
    });
}

fn bench_list_prepend_vs_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_build_1k");
    group.bench_function("prepend", |b| {
        b.iter(|| {
            let mut l = LinkedList::new();
            for i in 0..1_000u64 {
                l.prepend(i);
            }
            black_box(l)
        })
    });
    group.bench_function("append", |b| {
        b.iter(|| {
            let mut l = LinkedList::new();
            for i in 0..1_000u64 {
                l.append(i);
            }
            black_box(l)
        })
    });
    group.finish();
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_enqueue_dequeue, bench_rotate, bench_list_prepend_vs_append
}
criterion_main!(benches);
