#[macro_use]
extern crate bencher;

use bencher::Bencher;
use minimax_solver::stonehenge::{Stonehenge, StonehengeOptions};
use minimax_solver::*;

fn side_two() -> Stonehenge {
    Stonehenge::new(StonehengeOptions::new().with_side_length(2)).unwrap()
}

fn bench_recursive(b: &mut Bencher) {
    let game = side_two();
    b.iter(|| {
        let mut s = RecursiveMinimax::new();
        let m = s.choose_move(&game);
        assert!(m.is_some());
    });
}

fn bench_iterative(b: &mut Bencher) {
    let game = side_two();
    b.iter(|| {
        let mut s = IterativeMinimax::new();
        let m = s.choose_move(&game);
        assert!(m.is_some());
    });
}

fn bench_rough_outcome(b: &mut Bencher) {
    let game = side_two();
    b.iter(|| {
        let mut s = RoughOutcome::new();
        let m = s.choose_move(&game);
        assert!(m.is_some());
    });
}

benchmark_group!(benches, bench_recursive, bench_iterative, bench_rough_outcome);
benchmark_main!(benches);
