#![allow(missing_docs)]

use std::hint::black_box;

use criterion::*;
use rand::prelude::*;

use tinyalign::edit_distance;

/// Two random strings of length `len` over the DNA alphabet.
fn random_pair(len: usize, seed: u64) -> (Vec<u8>, Vec<u8>) {
    let alphabet = b"ATCGN";
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sample = || (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect::<Vec<_>>();
    let x = sample();
    let y = sample();
    (x, y)
}

fn big_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("Levenshtein");

    for d in 2..=4 {
        let len = 10_usize.pow(d);
        let (x, y) = random_pair(len, 42);

        let id = BenchmarkId::new("unbanded", len);
        group.bench_with_input(id, &len, |b, _| {
            b.iter(|| black_box(edit_distance::<_, u32>(&x, &y, None)));
        });

        for maxdiff in [10, 100] {
            let id = BenchmarkId::new(format!("banded-{maxdiff}"), len);
            group.bench_with_input(id, &len, |b, _| {
                b.iter(|| black_box(edit_distance::<_, u32>(&x, &y, Some(maxdiff))));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, big_levenshtein);
criterion_main!(benches);
