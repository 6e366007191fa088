use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metar_taf::{parse_metar, parse_metars, parse_taf, propagate, unify};

const METAR: &str = "METAR EDDF 051820Z 22030G45KT 190V250 0800 R25L/P1500U +TSRA VV002 \
    12/11 Q0998 WS R25L BECMG 4000 NSW RMK WIND SHEAR";
const TAF: &str = "TAF EGLL 041100Z 0412/0518 24010KT 9999 SCT030 \
    BECMG 0412/0414 24015KT TEMPO 0420/0424 4000 RA PROB30 TEMPO 0422/0502 1500 TSRA \
    FM050600 27012KT CAVOK BECMG 0510/0512 30008KT";

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("parse_metar", |b| b.iter(|| parse_metar(black_box(METAR))));
    c.bench_function("parse_taf", |b| b.iter(|| parse_taf(black_box(TAF))));

    let metars = vec![METAR; 1_000];
    c.bench_function("parse_metars_1000", |b| b.iter(|| parse_metars(black_box(metars.as_slice()))));
}

fn bench_timeline(c: &mut Criterion) {
    let taf = parse_taf(TAF).expect("benchmark TAF parses");
    c.bench_function("propagate", |b| b.iter(|| propagate(black_box(&taf))));
    c.bench_function("propagate_unify", |b| {
        b.iter(|| unify(&propagate(black_box(&taf))))
    });
}

criterion_group!(benches, bench_parsing, bench_timeline);
criterion_main!(benches);
