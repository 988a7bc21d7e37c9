//! A model of a 3x3x3 Rubik's cube and the face turns that can be made on it.
//!
//! The cube is a plain value: each of the six faces holds a 3x3 `Surface` of
//! labelled `Tile`s, and making a `Movement` returns a new `Cube` with the
//! tiles shuffled around. There's no solver or scrambler in here, just the
//! bookkeeping of where every tile ends up.

mod cube;
mod geometry;
mod moves;

pub use cube::*;
pub use geometry::*;
pub use moves::*;
