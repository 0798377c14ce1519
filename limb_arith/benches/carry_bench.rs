use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use limb_arith::{
    add_limbs, add_with_carry, add_with_carry_portable, capability::log_capabilities,
    sub_limbs, sub_with_borrow, sub_with_borrow_portable, Limb,
};
use rand::{distributions::Standard, prelude::Distribution, thread_rng, Rng};

fn bench_width<T>(c: &mut Criterion)
where
    T: Limb,
    Standard: Distribution<T>,
{
    let mut rng = thread_rng();
    let width = T::WIDTH;
    let cap = limb_arith::capability::<T>();

    c.bench_function(&format!("add_with_carry {width} ({})", cap.add), |b| {
        b.iter_batched(
            || (rng.gen::<T>(), rng.gen::<T>(), T::ONE),
            |(x, y, carry)| add_with_carry(black_box(x), black_box(y), black_box(carry)),
            BatchSize::SmallInput,
        );
    });

    c.bench_function(&format!("add_with_carry {width} (portable)"), |b| {
        b.iter_batched(
            || (rng.gen::<T>(), rng.gen::<T>(), T::ONE),
            |(x, y, carry)| add_with_carry_portable(black_box(x), black_box(y), black_box(carry)),
            BatchSize::SmallInput,
        );
    });

    c.bench_function(&format!("sub_with_borrow {width} ({})", cap.sub), |b| {
        b.iter_batched(
            || (rng.gen::<T>(), rng.gen::<T>(), T::ONE),
            |(x, y, borrow)| sub_with_borrow(black_box(x), black_box(y), black_box(borrow)),
            BatchSize::SmallInput,
        );
    });

    c.bench_function(&format!("sub_with_borrow {width} (portable)"), |b| {
        b.iter_batched(
            || (rng.gen::<T>(), rng.gen::<T>(), T::ONE),
            |(x, y, borrow)| {
                sub_with_borrow_portable(black_box(x), black_box(y), black_box(borrow))
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_limbs(c: &mut Criterion) {
    let mut rng = thread_rng();

    c.bench_function("add_limbs 4x64", |b| {
        b.iter_batched(
            || (rng.gen::<[u64; 4]>(), rng.gen::<[u64; 4]>()),
            |(mut x, y)| add_limbs(black_box(&mut x), black_box(&y), 0),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("sub_limbs 4x64", |b| {
        b.iter_batched(
            || (rng.gen::<[u64; 4]>(), rng.gen::<[u64; 4]>()),
            |(mut x, y)| sub_limbs(black_box(&mut x), black_box(&y), 0),
            BatchSize::SmallInput,
        );
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    log_capabilities();

    bench_width::<u32>(c);
    bench_width::<u64>(c);
    bench_width::<u128>(c);
    bench_limbs(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
