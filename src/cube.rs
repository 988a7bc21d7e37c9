//! The whole cube, and the moves that can be made on it.

use std::fmt::{self, Display, Formatter, Write};
use std::ops::Index;

use anyhow::bail;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{Face, Movement, Strip, Surface, Tile, Turn};
use Face::*;
use Strip::*;
use Turn::*;

/// The state of a 3x3x3 cube: the tiles on each of its six faces.
///
/// A `Cube` is a value; making a move on it gives back a new cube and leaves
/// the original alone. Every move is a permutation of the tiles, so as long as
/// a cube started out valid (each of the 54 tiles exactly once) it stays that
/// way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cube {
    front: Surface,
    back: Surface,
    up: Surface,
    down: Surface,
    left: Surface,
    right: Surface,
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl Cube {
    /// Creates a cube out of six surfaces, without checking that they make up a
    /// valid cube.
    pub fn new(
        front: Surface,
        back: Surface,
        up: Surface,
        down: Surface,
        left: Surface,
        right: Surface,
    ) -> Self {
        Self {
            front,
            back,
            up,
            down,
            left,
            right,
        }
    }

    /// Creates a cube out of six surfaces, returning an error if the surfaces
    /// don't contain each tile exactly once.
    pub fn try_new(
        front: Surface,
        back: Surface,
        up: Surface,
        down: Surface,
        left: Surface,
        right: Surface,
    ) -> anyhow::Result<Self> {
        let cube = Self::new(front, back, up, down, left, right);
        cube.check()?;
        Ok(cube)
    }

    /// Returns a solved cube, where every face has its own tiles in their home
    /// positions.
    pub fn solved() -> Self {
        Self {
            front: Surface::solved(Front),
            back: Surface::solved(Back),
            up: Surface::solved(Up),
            down: Surface::solved(Down),
            left: Surface::solved(Left),
            right: Surface::solved(Right),
        }
    }

    /// Returns the surface currently on `face`.
    pub fn surface(&self, face: Face) -> &Surface {
        match face {
            Front => &self.front,
            Back => &self.back,
            Up => &self.up,
            Down => &self.down,
            Left => &self.left,
            Right => &self.right,
        }
    }

    /// Returns an iterator over every tile on the cube, face by face in the
    /// order of `Face::ALL`.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        Face::ALL
            .into_iter()
            .flat_map(move |face| self.surface(face).tiles().iter().copied())
    }

    /// Checks that every one of the 54 tiles appears on the cube exactly once.
    pub fn check(&self) -> anyhow::Result<()> {
        let mut seen = FxHashSet::default();
        for face in Face::ALL {
            for (index, &tile) in self.surface(face).tiles().iter().enumerate() {
                if !seen.insert(tile) {
                    // There are only 54 spots, so a doubled up tile means another is missing.
                    let missing = Tile::ALL
                        .into_iter()
                        .find(|&tile| self.tiles().all(|other| other != tile));
                    let position = char::from(b'a' + index as u8);
                    match missing {
                        Some(missing) => bail!(
                            "tile {tile} appears twice (again at {position} on the {face} face), \
                             and tile {missing} is missing"
                        ),
                        None => bail!(
                            "tile {tile} appears twice (again at {position} on the {face} face)"
                        ),
                    }
                }
            }
        }
        Ok(())
    }

    /// Turns the front face.
    pub fn make_front(&self, turn: Turn) -> Cube {
        let front = self.front.turned(turn);
        let (up, right, down, left) = match turn {
            Clockwise => (
                self.up.replaced(Ghi, self.left.strip(Ifc)),
                self.right.replaced(Adg, self.up.strip(Ghi)),
                self.down.replaced(Abc, self.right.strip(Gda)),
                self.left.replaced(Cfi, self.down.strip(Abc)),
            ),
            Counterclockwise => (
                self.up.replaced(Ghi, self.right.strip(Adg)),
                self.right.replaced(Adg, self.down.strip(Cba)),
                self.down.replaced(Abc, self.left.strip(Cfi)),
                self.left.replaced(Cfi, self.up.strip(Ihg)),
            ),
            Double => (
                self.up.replaced(Ghi, self.down.strip(Cba)),
                self.right.replaced(Adg, self.left.strip(Ifc)),
                self.down.replaced(Abc, self.up.strip(Ihg)),
                self.left.replaced(Cfi, self.right.strip(Gda)),
            ),
        };
        Cube {
            front,
            up,
            right,
            down,
            left,
            ..*self
        }
    }

    /// Turns the back face.
    pub fn make_back(&self, turn: Turn) -> Cube {
        let back = self.back.turned(turn);
        let (up, right, down, left) = match turn {
            Clockwise => (
                self.up.replaced(Abc, self.right.strip(Cfi)),
                self.right.replaced(Cfi, self.down.strip(Ihg)),
                self.down.replaced(Ghi, self.left.strip(Adg)),
                self.left.replaced(Adg, self.up.strip(Cba)),
            ),
            Counterclockwise => (
                self.up.replaced(Abc, self.left.strip(Gda)),
                self.right.replaced(Cfi, self.up.strip(Abc)),
                self.down.replaced(Ghi, self.right.strip(Ifc)),
                self.left.replaced(Adg, self.down.strip(Ghi)),
            ),
            Double => (
                self.up.replaced(Abc, self.down.strip(Ihg)),
                self.right.replaced(Cfi, self.left.strip(Gda)),
                self.down.replaced(Ghi, self.up.strip(Cba)),
                self.left.replaced(Adg, self.right.strip(Ifc)),
            ),
        };
        Cube {
            back,
            up,
            right,
            down,
            left,
            ..*self
        }
    }

    /// Turns the up face.
    pub fn make_up(&self, turn: Turn) -> Cube {
        let up = self.up.turned(turn);
        let (front, left, back, right) = match turn {
            Clockwise => (
                self.front.replaced(Abc, self.right.strip(Abc)),
                self.left.replaced(Abc, self.front.strip(Abc)),
                self.back.replaced(Abc, self.left.strip(Abc)),
                self.right.replaced(Abc, self.back.strip(Abc)),
            ),
            Counterclockwise => (
                self.front.replaced(Abc, self.left.strip(Abc)),
                self.left.replaced(Abc, self.back.strip(Abc)),
                self.back.replaced(Abc, self.right.strip(Abc)),
                self.right.replaced(Abc, self.front.strip(Abc)),
            ),
            Double => (
                self.front.replaced(Abc, self.back.strip(Abc)),
                self.left.replaced(Abc, self.right.strip(Abc)),
                self.back.replaced(Abc, self.front.strip(Abc)),
                self.right.replaced(Abc, self.left.strip(Abc)),
            ),
        };
        Cube {
            up,
            front,
            left,
            back,
            right,
            ..*self
        }
    }

    /// Turns the down face.
    pub fn make_down(&self, turn: Turn) -> Cube {
        let down = self.down.turned(turn);
        let (front, left, back, right) = match turn {
            Clockwise => (
                self.front.replaced(Ghi, self.left.strip(Ghi)),
                self.left.replaced(Ghi, self.back.strip(Ghi)),
                self.back.replaced(Ghi, self.right.strip(Ghi)),
                self.right.replaced(Ghi, self.front.strip(Ghi)),
            ),
            Counterclockwise => (
                self.front.replaced(Ghi, self.right.strip(Ghi)),
                self.left.replaced(Ghi, self.front.strip(Ghi)),
                self.back.replaced(Ghi, self.left.strip(Ghi)),
                self.right.replaced(Ghi, self.back.strip(Ghi)),
            ),
            Double => (
                self.front.replaced(Ghi, self.back.strip(Ghi)),
                self.left.replaced(Ghi, self.right.strip(Ghi)),
                self.back.replaced(Ghi, self.front.strip(Ghi)),
                self.right.replaced(Ghi, self.left.strip(Ghi)),
            ),
        };
        Cube {
            down,
            front,
            left,
            back,
            right,
            ..*self
        }
    }

    /// Turns the right face.
    pub fn make_right(&self, turn: Turn) -> Cube {
        let right = self.right.turned(turn);
        let (front, up, back, down) = match turn {
            Clockwise => (
                self.front.replaced(Cfi, self.down.strip(Cfi)),
                self.up.replaced(Cfi, self.front.strip(Cfi)),
                self.back.replaced(Adg, self.up.strip(Ifc)),
                self.down.replaced(Cfi, self.back.strip(Gda)),
            ),
            Counterclockwise => (
                self.front.replaced(Cfi, self.up.strip(Cfi)),
                self.up.replaced(Cfi, self.back.strip(Gda)),
                self.back.replaced(Adg, self.down.strip(Ifc)),
                self.down.replaced(Cfi, self.front.strip(Cfi)),
            ),
            Double => (
                self.front.replaced(Cfi, self.back.strip(Gda)),
                self.up.replaced(Cfi, self.down.strip(Cfi)),
                self.back.replaced(Adg, self.front.strip(Ifc)),
                self.down.replaced(Cfi, self.up.strip(Cfi)),
            ),
        };
        Cube {
            right,
            front,
            up,
            back,
            down,
            ..*self
        }
    }

    /// Turns the left face.
    pub fn make_left(&self, turn: Turn) -> Cube {
        let left = self.left.turned(turn);
        let (front, up, back, down) = match turn {
            Clockwise => (
                self.front.replaced(Adg, self.up.strip(Adg)),
                self.up.replaced(Adg, self.back.strip(Ifc)),
                self.back.replaced(Cfi, self.down.strip(Gda)),
                self.down.replaced(Adg, self.front.strip(Adg)),
            ),
            Counterclockwise => (
                self.front.replaced(Adg, self.down.strip(Adg)),
                self.up.replaced(Adg, self.front.strip(Adg)),
                self.back.replaced(Cfi, self.up.strip(Gda)),
                self.down.replaced(Adg, self.back.strip(Ifc)),
            ),
            Double => (
                self.front.replaced(Adg, self.back.strip(Ifc)),
                self.up.replaced(Adg, self.down.strip(Adg)),
                self.back.replaced(Cfi, self.front.strip(Gda)),
                self.down.replaced(Adg, self.up.strip(Adg)),
            ),
        };
        Cube {
            left,
            front,
            up,
            back,
            down,
            ..*self
        }
    }

    /// Makes a single movement.
    pub fn make_move(&self, movement: Movement) -> Cube {
        trace!("making move: {movement}");
        match movement {
            Movement::Front(turn) => self.make_front(turn),
            Movement::Back(turn) => self.make_back(turn),
            Movement::Up(turn) => self.make_up(turn),
            Movement::Down(turn) => self.make_down(turn),
            Movement::Left(turn) => self.make_left(turn),
            Movement::Right(turn) => self.make_right(turn),
        }
    }

    /// Undoes a single movement, by turning the same face the other way.
    pub fn reverse_move(&self, movement: Movement) -> Cube {
        self.make_move(movement.reversed())
    }

    /// Makes a sequence of movements, in order.
    pub fn make_moves(&self, movements: &[Movement]) -> Cube {
        debug!("making {} moves", movements.len());
        movements
            .iter()
            .fold(*self, |cube, &movement| cube.make_move(movement))
    }

    /// Undoes a sequence of movements made by `make_moves`.
    ///
    /// Moves on neighbouring faces don't commute, so this has to go through
    /// `movements` backwards as well as reversing each one.
    pub fn reverse_moves(&self, movements: &[Movement]) -> Cube {
        debug!("reversing {} moves", movements.len());
        movements
            .iter()
            .rev()
            .fold(*self, |cube, &movement| cube.reverse_move(movement))
    }
}

impl Index<Face> for Cube {
    type Output = Surface;

    fn index(&self, face: Face) -> &Self::Output {
        self.surface(face)
    }
}

/// Where each face goes in the unfolded net drawn by `Display`, as (face, row,
/// column) of its top-left tile.
const NET_LAYOUT: [(Face, usize, usize); 6] = [
    (Up, 0, 3),
    (Left, 3, 0),
    (Front, 3, 3),
    (Right, 3, 6),
    (Back, 3, 9),
    (Down, 6, 3),
];

/// Displays the cube unfolded into a cross-shaped net, with up above and down
/// below the front face:
///
/// ```text
///          |Ua|Ub|Uc|
///          |  ...   |
/// |La|..|Lc|Fa|..|Fc|Ra|..|Rc|Ba|..|Bc|
///          |  ...   |
///          |Da|Db|Dc|
/// ```
///
/// Every row is 12 cells wide; cells with no tile in them are left blank.
impl Display for Cube {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut net = [[None; 12]; 9];
        for (face, top, left) in NET_LAYOUT {
            for (y, row) in self.surface(face).rows().enumerate() {
                for (x, &tile) in row.iter().enumerate() {
                    net[top + y][left + x] = Some(tile);
                }
            }
        }

        for (i, row) in net.iter().enumerate() {
            if i != 0 {
                f.write_char('\n')?;
            }
            f.write_char('|')?;
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{tile:2}|")?,
                    None => f.write_str("  |")?,
                }
            }
        }
        Ok(())
    }
}
