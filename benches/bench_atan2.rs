use cordicmaths::cordic;
use criterion::Criterion;

mod bench_util;
use bench_util::{bench_inputs, bench_inputs2, configure_criterion, gen_pairs, gen_range};

fn bench_atan(c: &mut Criterion) {
    let inputs = gen_range(256, -1e3, 1e3, 0x5eed_0003);
    let mut group = c.benchmark_group("atan/uniform");
    bench_inputs(&mut group, &inputs, cordic::atan, f64::atan);
    group.finish();
}

fn bench_atan2(c: &mut Criterion) {
    let inputs = gen_pairs(256, -100.0, 100.0, 0x5eed_0004);
    let mut group = c.benchmark_group("atan2/uniform");
    bench_inputs2(&mut group, &inputs, cordic::atan2, f64::atan2);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_atan(&mut c);
    bench_atan2(&mut c);
    c.final_summary();
}
