#![no_main]
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use rubiks_cube::{Cube, Movement};

fuzz_target!(|input: (Vec<Movement>, Vec<Movement>)| {
    let (setup, moves) = input;
    // Start from somewhere other than solved so that we aren't only ever testing
    // moves on a solved cube.
    let cube = Cube::solved().make_moves(&setup);
    cube.check().unwrap();

    let scrambled = cube.make_moves(&moves);
    scrambled.check().unwrap();
    assert_eq!(scrambled.reverse_moves(&moves), cube);

    // Making the moves one at a time has to give the same result.
    let stepped = moves
        .iter()
        .fold(cube, |cube, &movement| cube.make_move(movement));
    assert_eq!(stepped, scrambled);
});
