use cordicmaths::cordic;
use criterion::{black_box, Criterion};

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range};

fn bench_sin(c: &mut Criterion) {
    let inputs = gen_range(256, -10.0, 10.0, 0x5eed_0001);
    let mut group = c.benchmark_group("sin/uniform");
    bench_inputs(&mut group, &inputs, cordic::sin, f64::sin);
    group.finish();
}

fn bench_sincos(c: &mut Criterion) {
    let inputs = gen_range(256, -10.0, 10.0, 0x5eed_0002);
    let mut group = c.benchmark_group("sincos/uniform");
    group.bench_function("cordic", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &inputs {
                let (s, co) = cordic::sincos(black_box(x));
                acc += s + co;
            }
            black_box(acc)
        })
    });
    group.bench_function("std", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &inputs {
                let x = black_box(x);
                acc += x.sin() + x.cos();
            }
            black_box(acc)
        })
    });
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_sin(&mut c);
    bench_sincos(&mut c);
    c.final_summary();
}
