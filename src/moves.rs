//! Turns of a single face, and the movements built out of them.

use std::fmt::{self, Display, Formatter};

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::Face;

/// How far to spin a face, as seen looking straight at it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Arbitrary,
)]
pub enum Turn {
    Clockwise,
    Counterclockwise,
    Double,
}

use Turn::*;

impl Turn {
    pub const ALL: [Turn; 3] = [Clockwise, Counterclockwise, Double];

    /// Returns the turn which undoes this one.
    pub fn reversed(self) -> Turn {
        match self {
            Clockwise => Counterclockwise,
            Counterclockwise => Clockwise,
            Double => Double,
        }
    }
}

impl Display for Turn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Clockwise => "clockwise",
            Counterclockwise => "counterclockwise",
            Double => "double",
        })
    }
}

/// A single turn of a single face.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Arbitrary,
)]
pub enum Movement {
    Front(Turn),
    Back(Turn),
    Up(Turn),
    Down(Turn),
    Left(Turn),
    Right(Turn),
}

impl Movement {
    /// Every possible movement: each face turned clockwise, then each face
    /// turned counterclockwise, then each face turned twice.
    pub const ALL: [Movement; 18] = [
        Movement::Front(Clockwise),
        Movement::Back(Clockwise),
        Movement::Up(Clockwise),
        Movement::Down(Clockwise),
        Movement::Left(Clockwise),
        Movement::Right(Clockwise),
        Movement::Front(Counterclockwise),
        Movement::Back(Counterclockwise),
        Movement::Up(Counterclockwise),
        Movement::Down(Counterclockwise),
        Movement::Left(Counterclockwise),
        Movement::Right(Counterclockwise),
        Movement::Front(Double),
        Movement::Back(Double),
        Movement::Up(Double),
        Movement::Down(Double),
        Movement::Left(Double),
        Movement::Right(Double),
    ];

    pub fn new(face: Face, turn: Turn) -> Self {
        match face {
            Face::Front => Movement::Front(turn),
            Face::Back => Movement::Back(turn),
            Face::Up => Movement::Up(turn),
            Face::Down => Movement::Down(turn),
            Face::Left => Movement::Left(turn),
            Face::Right => Movement::Right(turn),
        }
    }

    /// The face this movement turns.
    pub fn face(self) -> Face {
        match self {
            Movement::Front(_) => Face::Front,
            Movement::Back(_) => Face::Back,
            Movement::Up(_) => Face::Up,
            Movement::Down(_) => Face::Down,
            Movement::Left(_) => Face::Left,
            Movement::Right(_) => Face::Right,
        }
    }

    /// How far this movement turns its face.
    pub fn turn(self) -> Turn {
        match self {
            Movement::Front(turn)
            | Movement::Back(turn)
            | Movement::Up(turn)
            | Movement::Down(turn)
            | Movement::Left(turn)
            | Movement::Right(turn) => turn,
        }
    }

    /// Returns the movement which undoes this one: the same face, turned the
    /// other way.
    pub fn reversed(self) -> Self {
        Self::new(self.face(), self.turn().reversed())
    }
}

impl Display for Movement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{} {}", self.face(), self.turn()))
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;
    use rustc_hash::FxHashSet;

    use crate::{Face, Movement, Turn};

    #[test]
    fn reversed_turns() {
        assert_eq!(Turn::Clockwise.reversed(), Turn::Counterclockwise);
        assert_eq!(Turn::Counterclockwise.reversed(), Turn::Clockwise);
        assert_eq!(Turn::Double.reversed(), Turn::Double);
        for turn in Turn::ALL {
            assert_eq!(turn.reversed().reversed(), turn);
        }
    }

    #[test]
    fn movement_parts() {
        for (face, turn) in iproduct!(Face::ALL, Turn::ALL) {
            let movement = Movement::new(face, turn);
            assert_eq!(movement.face(), face);
            assert_eq!(movement.turn(), turn);
            assert_eq!(movement.reversed().face(), face);
            assert_eq!(movement.reversed().turn(), turn.reversed());
        }
        assert_eq!(
            Movement::new(Face::Left, Turn::Double),
            Movement::Left(Turn::Double)
        );
    }

    #[test]
    fn all_movements() {
        let all: FxHashSet<_> = Movement::ALL.into_iter().collect();
        assert_eq!(all.len(), 18);
        let expected: FxHashSet<_> = iproduct!(Face::ALL, Turn::ALL)
            .map(|(face, turn)| Movement::new(face, turn))
            .collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn display() {
        assert_eq!(
            Movement::Up(Turn::Counterclockwise).to_string(),
            "up counterclockwise"
        );
        assert_eq!(Movement::Back(Turn::Double).to_string(), "back double");
    }
}
