use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rsfec::{LocatorAlgorithm, ReedSolomon};
use std::hint::black_box;

fn message(rs: &ReedSolomon) -> Vec<u16> {
    let mask = rs.codeword_size() as u16;
    (0..rs.message_size())
        .map(|i| (i as u16).wrapping_mul(0x9E37) & mask)
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (m, t) in [(4, 3), (8, 16), (12, 32)] {
        let rs = ReedSolomon::new(m, t).unwrap();
        let message = message(&rs);
        let id = format!("RS({}, {})", rs.codeword_size(), rs.message_size());
        group.bench_with_input(BenchmarkId::from_parameter(id), &message, |b, message| {
            b.iter(|| rs.generate_codeword(black_box(message)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for algorithm in [
        LocatorAlgorithm::BerlekampMassey,
        LocatorAlgorithm::PetersonGorensteinZierler,
    ] {
        let rs = ReedSolomon::builder(8, 16)
            .locator(algorithm)
            .build()
            .unwrap();
        let mut received = rs.generate_codeword(&message(&rs));
        for i in 0..16 {
            received[i * 13] ^= 0x3C;
        }
        group.bench_with_input(
            BenchmarkId::new("RS(255, 223) 16 errors", format!("{:?}", algorithm)),
            &received,
            |b, received| {
                b.iter(|| {
                    let mut codeword = received.clone();
                    rs.recover_codeword(black_box(&mut codeword)).unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
