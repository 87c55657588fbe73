use cordicmaths::cordic;
use criterion::Criterion;

mod bench_util;
use bench_util::{bench_inputs, configure_criterion, gen_range};

fn bench_ln(c: &mut Criterion) {
    let smoke = [1e-9, 1e-3, 0.5, 1.0, 2.0, 10.0, 1e3, 1e9];
    let mut group = c.benchmark_group("ln/smoke");
    bench_inputs(&mut group, &smoke, cordic::ln, f64::ln);
    group.finish();

    let inputs = gen_range(256, 1e-3, 1e3, 0x5eed_0006);
    let mut group = c.benchmark_group("ln/uniform");
    bench_inputs(&mut group, &inputs, cordic::ln, f64::ln);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_ln(&mut c);
    c.final_summary();
}
