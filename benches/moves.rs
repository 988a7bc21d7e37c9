use divan::{black_box, Bencher};
use rubiks_cube::{Cube, Movement};

fn main() {
    divan::main();
}

#[divan::bench(args = Movement::ALL)]
fn make_move(bencher: Bencher, movement: &Movement) {
    let cube = Cube::solved().make_moves(&Movement::ALL);
    bencher.bench_local(|| black_box(cube).make_move(*movement));
}

#[divan::bench]
fn make_and_reverse_all(bencher: Bencher) {
    let cube = Cube::solved();
    bencher.bench_local(|| {
        black_box(cube)
            .make_moves(&Movement::ALL)
            .reverse_moves(&Movement::ALL)
    });
}

#[divan::bench]
fn check(bencher: Bencher) {
    let cube = Cube::solved().make_moves(&Movement::ALL);
    bencher.bench_local(|| black_box(cube).check().is_ok());
}
