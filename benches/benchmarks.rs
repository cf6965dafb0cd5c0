use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bioinfotools::index::bwt;
use bioinfotools::search::{self, SearchOpt, SearchStrategy};

/// 确定性的伪随机 DNA（xorshift64），每 1000 bp 重复植入一次 `motif`，
/// 使搜索基准有稳定数量的命中。
fn random_dna(len: usize, motif: &[u8]) -> Vec<u8> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut seq: Vec<u8> = (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b"ACGT"[(state >> 62) as usize]
        })
        .collect();
    for start in (0..len.saturating_sub(motif.len())).step_by(1000) {
        seq[start..start + motif.len()].copy_from_slice(motif);
    }
    seq
}

const MOTIF: &[u8] = b"GATTACAGATTACACCGGTA";

fn bench_prefix_arrays(c: &mut Criterion) {
    let reference = random_dna(100_000, MOTIF);

    c.bench_function("z_array_100k", |b| {
        b.iter(|| {
            black_box(search::z_array(black_box(&reference)));
        })
    });
    c.bench_function("lps_array_100k", |b| {
        b.iter(|| {
            black_box(search::lps_array(black_box(&reference)));
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let reference = random_dna(100_000, MOTIF);
    let pattern = reference[5_000..5_020].to_vec();

    for strategy in [SearchStrategy::Naive, SearchStrategy::Z, SearchStrategy::Kmp] {
        let opt = SearchOpt { strategy, ..SearchOpt::default() };
        c.bench_function(&format!("search_{:?}_20bp_100k", strategy).to_lowercase(), |b| {
            b.iter(|| {
                black_box(search::find_all(black_box(&pattern), black_box(&reference), opt).ok());
            })
        });
    }
}

fn bench_bwt(c: &mut Criterion) {
    let reference = random_dna(10_000, MOTIF);
    let encoded = bwt::encode_with_sa(&reference, bwt::DEFAULT_SENTINEL).unwrap_or_default();

    c.bench_function("bwt_encode_rotations_10k", |b| {
        b.iter(|| {
            black_box(bwt::encode(black_box(&reference), bwt::DEFAULT_SENTINEL).ok());
        })
    });
    c.bench_function("bwt_encode_sa_10k", |b| {
        b.iter(|| {
            black_box(bwt::encode_with_sa(black_box(&reference), bwt::DEFAULT_SENTINEL).ok());
        })
    });
    c.bench_function("bwt_decode_10k", |b| {
        b.iter(|| {
            black_box(bwt::decode(black_box(&encoded), bwt::DEFAULT_SENTINEL).ok());
        })
    });
}

criterion_group!(benches, bench_prefix_arrays, bench_search, bench_bwt);
criterion_main!(benches);
