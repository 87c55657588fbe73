use cordicmaths::cordic;
use criterion::Criterion;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range};

fn bench_exp(c: &mut Criterion) {
    let smoke = [-100.0, -10.0, -1.0, -1e-6, 0.0, 1e-6, 1.0, 10.0, 100.0];
    let mut group = c.benchmark_group("exp/smoke");
    bench_inputs(&mut group, &smoke, cordic::exp, f64::exp);
    group.finish();

    let inputs = gen_range(256, -50.0, 50.0, 0x5eed_0005);
    let mut group = c.benchmark_group("exp/uniform");
    bench_inputs(&mut group, &inputs, cordic::exp, f64::exp);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_exp(&mut c);
    c.final_summary();
}
