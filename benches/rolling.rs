use criterion::{black_box, criterion_group, criterion_main, Criterion};
use montecarlo::{Analyzer, Die, Game};
use rand::{rngs::StdRng, SeedableRng};

fn loaded_d6() -> Die<i64> {
    let mut die = Die::parse("d6").unwrap();
    die.set_weight(&6, 5.0).unwrap();
    die
}

pub fn benchmark_rolling(c: &mut Criterion) {
    c.bench_function("roll d6 10000 times", |b| {
        let die = loaded_d6();
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            die.roll_with(black_box(10_000), &mut rng).unwrap();
        });
    });
    c.bench_function("roll d100 10000 times", |b| {
        let die = Die::parse("d100").unwrap();
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            die.roll_with(black_box(10_000), &mut rng).unwrap();
        });
    });
}

pub fn benchmark_playing(c: &mut Criterion) {
    c.bench_function("play 5d6 1000 times", |b| {
        let dice = vec![loaded_d6(); 5];
        b.iter(|| {
            let mut game = Game::new(dice.clone()).unwrap();
            let mut rng = StdRng::seed_from_u64(1);
            game.play_with(black_box(1000), &mut rng).unwrap();
        });
    });
}

pub fn benchmark_analysing(c: &mut Criterion) {
    let mut game = Game::new(vec![loaded_d6(); 5]).unwrap();
    game.play_with(1000, &mut StdRng::seed_from_u64(1)).unwrap();

    c.bench_function("analyse 5d6 1000 rolls", |b| {
        b.iter(|| {
            let analyzer = Analyzer::new(black_box(&game)).unwrap();
            analyzer.jackpot();
            analyzer.combo();
            analyzer.face_counts_per_roll();
        });
    });
}

criterion_group!(benches, benchmark_rolling, benchmark_playing, benchmark_analysing);
criterion_main!(benches);
