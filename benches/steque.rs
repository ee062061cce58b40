use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::collections::VecDeque;
use steque::{ArraySteque, LinkedSteque};

fn bench_push_pop(c: &mut Criterion) {
    let n = 1024;
    let mut group = c.benchmark_group("Push then Pop 1024");
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut d = VecDeque::new();
            for i in 0..n {
                d.push_front(black_box(i as i32));
            }
            while let Some(x) = d.pop_front() {
                black_box(x);
            }
        })
    });

    group.bench_function("ArraySteque<i32>", |b| {
        b.iter(|| {
            let mut s: ArraySteque<i32> = ArraySteque::new();
            for i in 0..n {
                let _ = s.push(black_box(i as i32));
            }
            while let Ok(x) = s.pop() {
                black_box(x);
            }
        })
    });

    group.bench_function("LinkedSteque<i32>", |b| {
        b.iter(|| {
            let mut s: LinkedSteque<i32> = LinkedSteque::new();
            for i in 0..n {
                let _ = s.push(black_box(i as i32));
            }
            while let Ok(x) = s.pop() {
                black_box(x);
            }
        })
    });
    group.finish();
}

fn bench_enqueue(c: &mut Criterion) {
    for n in [64usize, 1024] {
        let mut group = c.benchmark_group(format!("Enqueue {n}"));
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        // O(N) per enqueue: the occupied prefix shifts every time.
        group.bench_function("ArraySteque<i32>", |b| {
            b.iter(|| {
                let mut s: ArraySteque<i32> = ArraySteque::new();
                for i in 0..n {
                    let _ = s.enqueue(black_box(i as i32));
                }
                s
            })
        });

        group.bench_function("ArraySteque<i32> (extend)", |b| {
            b.iter(|| {
                let mut s: ArraySteque<i32> = ArraySteque::new();
                s.extend((0..n).map(|i| black_box(i as i32)));
                s
            })
        });

        group.bench_function("LinkedSteque<i32>", |b| {
            b.iter(|| {
                let mut s: LinkedSteque<i32> = LinkedSteque::new();
                for i in 0..n {
                    let _ = s.enqueue(black_box(i as i32));
                }
                s
            })
        });
        group.finish();
    }
}

fn bench_iter(c: &mut Criterion) {
    let n = 1024;
    let array: ArraySteque<i32> = (0..n).collect();
    let linked: LinkedSteque<i32> = (0..n).collect();

    let mut group = c.benchmark_group("Iterate 1024");
    group.bench_function("ArraySteque<i32>", |b| {
        b.iter(|| array.iter().map(|x| black_box(*x) as i64).sum::<i64>())
    });
    group.bench_function("LinkedSteque<i32>", |b| {
        b.iter(|| linked.iter().map(|x| black_box(*x) as i64).sum::<i64>())
    });
    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_enqueue, bench_iter);
criterion_main!(benches);
