use {
    criterion::{criterion_group, criterion_main, Criterion},
    std::hint::black_box,
    upshot_result::{success, try_catch, Outcome},
};

fn chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    group.bench_function("map_flat_map_success", |b| {
        b.iter(|| {
            Outcome::<u64, &str>::success(black_box(10))
                .map(|x| x + 1)
                .flat_map(|x| {
                    if x > 0 {
                        Outcome::success(x)
                    } else {
                        Outcome::failure("neg")
                    }
                })
        })
    });

    group.bench_function("map_flat_map_failure", |b| {
        b.iter(|| {
            Outcome::<u64, &str>::failure(black_box("io-error"))
                .map(|x| x + 1)
                .flat_map(Outcome::success)
        })
    });

    group.bench_function("concrete_success", |b| {
        b.iter(|| success(black_box(10u64)).map(|x| x * 2).flat_map(success))
    });

    group.finish();
}

fn capture(c: &mut Criterion) {
    c.bench_function("try_catch_returns", |b| {
        b.iter(|| try_catch(|| black_box(42u64)))
    });
}

criterion_group!(benches, chain, capture);
criterion_main!(benches);
