use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use percolation_grid::Percolation;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn rand_sites<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let mut res: Vec<_> =
        (1..=n).flat_map(|i| (1..=n).map(move |j| (i, j))).collect();
    res.shuffle(rng);
    res
}

fn open_until_percolates(n: usize, query: &[(usize, usize)]) -> usize {
    let mut perc = Percolation::new(n).unwrap();
    for &(i, j) in query {
        perc.open(i, j).unwrap();
        if perc.percolates() {
            break;
        }
    }
    perc.open_count()
}

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold");

    let mut rng = ChaCha20Rng::from_seed([
        0x55, 0xEF, 0xE0, 0x3C, 0x71, 0xDA, 0xFC, 0xAB, 0x5C, 0x1A, 0x9F, 0xEB,
        0xA4, 0x9E, 0x61, 0xE6, 0x1E, 0x7E, 0x29, 0x77, 0x38, 0x9A, 0xF5, 0x67,
        0xF5, 0xDD, 0x07, 0x06, 0xAE, 0xE4, 0x5A, 0xDC,
    ]);

    for n in [64, 256, 1024] {
        let query = rand_sites(n, &mut rng);
        let opened = open_until_percolates(n, &query);
        eprintln!("n = {n}: {:.4}", opened as f64 / (n * n) as f64);

        group.bench_function(BenchmarkId::new("weighted", n), |b| {
            b.iter(|| black_box(open_until_percolates(n, &query)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_threshold);
criterion_main!(benches);
