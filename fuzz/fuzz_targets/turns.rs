#![no_main]
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use rubiks_cube::{Cube, Face, Movement, Turn};

fuzz_target!(|input: (Vec<Movement>, Face)| {
    let (setup, face) = input;
    let cube = Cube::solved().make_moves(&setup);

    let clockwise = Movement::new(face, Turn::Clockwise);
    let counterclockwise = Movement::new(face, Turn::Counterclockwise);
    let double = cube.make_move(Movement::new(face, Turn::Double));
    assert_eq!(cube.make_move(clockwise).make_move(clockwise), double);
    assert_eq!(
        cube.make_move(counterclockwise).make_move(counterclockwise),
        double
    );
    assert_eq!(double.make_move(Movement::new(face, Turn::Double)), cube);
    assert_eq!(cube[face.opposite()], double[face.opposite()]);
});
