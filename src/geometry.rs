//! Types for dealing with the stickers on the surface of a cube.

use std::fmt::{self, Display, Formatter};
use std::iter::zip;

use arbitrary::Arbitrary;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::Turn;

/// One of the six faces of the cube.
///
/// Faces don't move: turning a face moves the tiles sitting on it, but the face
/// itself stays where it is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Arbitrary,
)]
#[repr(u8)]
pub enum Face {
    Front,
    Back,
    Up,
    Down,
    Left,
    Right,
}

use Face::*;

impl Display for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Front => "front",
            Back => "back",
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        })
    }
}

impl Face {
    pub const ALL: [Face; 6] = [Front, Back, Up, Down, Left, Right];

    /// Returns the face opposite to this one.
    pub fn opposite(self) -> Face {
        match self {
            Front => Back,
            Back => Front,
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// The letter this face's tiles are named with.
    fn initial(self) -> char {
        match self {
            Front => 'F',
            Back => 'B',
            Up => 'U',
            Down => 'D',
            Left => 'L',
            Right => 'R',
        }
    }
}

/// A single sticker on the cube.
///
/// Every tile is named after the spot it occupies on a solved cube: the face it
/// starts on, followed by its position on that face (see `Surface` for how the
/// positions are laid out). So `Fa` starts in the top-left corner of the front
/// face, `Ue` is the centre of the up face, and so on.
///
/// Moves only ever change where a tile is, never which tile it is.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Tile {
    Fa, Fb, Fc, Fd, Fe, Ff, Fg, Fh, Fi,
    Ba, Bb, Bc, Bd, Be, Bf, Bg, Bh, Bi,
    Ua, Ub, Uc, Ud, Ue, Uf, Ug, Uh, Ui,
    Da, Db, Dc, Dd, De, Df, Dg, Dh, Di,
    La, Lb, Lc, Ld, Le, Lf, Lg, Lh, Li,
    Ra, Rb, Rc, Rd, Re, Rf, Rg, Rh, Ri,
}

impl Tile {
    /// Every tile on the cube, grouped by home face in the order of
    /// `Face::ALL`.
    #[rustfmt::skip]
    pub const ALL: [Tile; 54] = {
        use Tile::*;
        [
            Fa, Fb, Fc, Fd, Fe, Ff, Fg, Fh, Fi,
            Ba, Bb, Bc, Bd, Be, Bf, Bg, Bh, Bi,
            Ua, Ub, Uc, Ud, Ue, Uf, Ug, Uh, Ui,
            Da, Db, Dc, Dd, De, Df, Dg, Dh, Di,
            La, Lb, Lc, Ld, Le, Lf, Lg, Lh, Li,
            Ra, Rb, Rc, Rd, Re, Rf, Rg, Rh, Ri,
        ]
    };

    /// Returns the tile which starts out at `index` (0 to 8, row-major) on
    /// `face`, or `None` if `index` is off the face.
    pub fn new(face: Face, index: usize) -> Option<Self> {
        if index >= 9 {
            return None;
        }
        Some(Self::ALL[face as usize * 9 + index])
    }

    /// The face this tile is on when the cube is solved.
    pub fn face(self) -> Face {
        Face::ALL[self as usize / 9]
    }

    /// The position this tile is at on its face when the cube is solved.
    pub fn index(self) -> usize {
        self as usize % 9
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let position = char::from(b'a' + *self as u8 % 9);
        f.pad(&format!("{}{position}", self.face().initial()))
    }
}

/// Three tiles along one edge of a `Surface`, read in a particular order.
///
/// The names spell out the positions involved in the order they're read, so
/// `Abc` is the top row from left to right and `Cba` is the same row from right
/// to left. Having both directions around means the move code never has to
/// think about flipping rows around when it moves them between faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strip {
    Abc,
    Cba,
    Ghi,
    Ihg,
    Adg,
    Gda,
    Cfi,
    Ifc,
}

impl Strip {
    /// The positions this strip covers, in reading order.
    pub fn positions(self) -> [usize; 3] {
        match self {
            Strip::Abc => [0, 1, 2],
            Strip::Cba => [2, 1, 0],
            Strip::Ghi => [6, 7, 8],
            Strip::Ihg => [8, 7, 6],
            Strip::Adg => [0, 3, 6],
            Strip::Gda => [6, 3, 0],
            Strip::Cfi => [2, 5, 8],
            Strip::Ifc => [8, 5, 2],
        }
    }

    /// Returns the same strip read in the opposite direction.
    pub fn reversed(self) -> Strip {
        match self {
            Strip::Abc => Strip::Cba,
            Strip::Cba => Strip::Abc,
            Strip::Ghi => Strip::Ihg,
            Strip::Ihg => Strip::Ghi,
            Strip::Adg => Strip::Gda,
            Strip::Gda => Strip::Adg,
            Strip::Cfi => Strip::Ifc,
            Strip::Ifc => Strip::Cfi,
        }
    }
}

/// The 3x3 grid of tiles currently on one face of the cube.
///
/// Positions are named `a` to `i`, row by row:
///
/// ```text
/// a b c
/// d e f
/// g h i
/// ```
///
/// Each face is laid out as you'd see it looking straight at it from outside
/// the cube, with the back face rotated around the vertical axis and the up and
/// down faces folded over the top and bottom of the front face.
///
/// Surfaces are values: every operation returns a new surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Surface {
    tiles: [Tile; 9],
}

/// Where each position's tile comes from after a clockwise turn.
const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
/// Where each position's tile comes from after a counterclockwise turn.
const COUNTERCLOCKWISE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];
/// Where each position's tile comes from after a half turn.
const DOUBLE: [usize; 9] = [8, 7, 6, 5, 4, 3, 2, 1, 0];

impl Surface {
    /// Creates a surface out of 9 tiles, in row-major order.
    pub const fn new(tiles: [Tile; 9]) -> Self {
        Self { tiles }
    }

    /// Returns the surface `face` has on a solved cube.
    pub fn solved(face: Face) -> Self {
        Self {
            tiles: std::array::from_fn(|index| Tile::ALL[face as usize * 9 + index]),
        }
    }

    /// Returns the tiles on this surface in row-major order.
    pub fn tiles(&self) -> &[Tile; 9] {
        &self.tiles
    }

    /// Returns an iterator over the rows of the surface, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + DoubleEndedIterator + ExactSizeIterator {
        self.tiles.chunks_exact(3)
    }

    /// Returns this surface spun around its centre by `turn`.
    pub fn turned(&self, turn: Turn) -> Self {
        let sources = match turn {
            Turn::Clockwise => CLOCKWISE,
            Turn::Counterclockwise => COUNTERCLOCKWISE,
            Turn::Double => DOUBLE,
        };
        Self {
            tiles: sources.map(|source| self.tiles[source]),
        }
    }

    /// Reads the tiles along `strip`.
    pub fn strip(&self, strip: Strip) -> [Tile; 3] {
        strip.positions().map(|position| self.tiles[position])
    }

    /// Returns a copy of this surface with the tiles along `strip` replaced by
    /// `tiles`, in the strip's reading order.
    ///
    /// Nothing outside of the strip is touched.
    pub fn replaced(&self, strip: Strip, tiles: [Tile; 3]) -> Self {
        let mut result = *self;
        for (position, tile) in zip(strip.positions(), tiles) {
            result.tiles[position] = tile;
        }
        result
    }
}

/// Displays the surface as 3 rows of `|`-separated tile names.
impl Display for Surface {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.rows().map(|row| row.iter().join("|")).join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use itertools::iproduct;

    use crate::{Face, Strip, Surface, Tile, Turn};
    use Face::*;
    use Tile::*;
    use Turn::*;

    #[test]
    fn tile_names() {
        for face in Face::ALL {
            for index in 0..9 {
                let tile = Tile::new(face, index).unwrap();
                assert_eq!(tile.face(), face);
                assert_eq!(tile.index(), index);
            }
            assert_eq!(Tile::new(face, 9), None);
            assert_eq!(Tile::new(face, usize::MAX), None);
        }
        assert_eq!(Tile::new(Front, 0), Some(Fa));
        assert_eq!(Tile::new(Up, 4), Some(Ue));
        assert_eq!(Tile::new(Right, 8), Some(Ri));
        assert_eq!(Bh.to_string(), "Bh");
        assert_eq!(format!("{:>4}", Dc), "  Dc");
    }

    #[test]
    fn opposite() {
        for face in Face::ALL {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn turns() {
        let front = Surface::solved(Front);
        assert_eq!(
            front.turned(Clockwise),
            Surface::new([Fg, Fd, Fa, Fh, Fe, Fb, Fi, Ff, Fc])
        );
        assert_eq!(
            front.turned(Counterclockwise),
            Surface::new([Fc, Ff, Fi, Fb, Fe, Fh, Fa, Fd, Fg])
        );
        assert_eq!(
            front.turned(Double),
            Surface::new([Fi, Fh, Fg, Ff, Fe, Fd, Fc, Fb, Fa])
        );
    }

    #[test]
    fn turn_algebra() {
        for (face, turn) in iproduct!(Face::ALL, Turn::ALL) {
            let surface = Surface::solved(face);
            let turned = surface.turned(turn);
            assert_eq!(turned.tiles()[4], surface.tiles()[4]);
            assert_eq!(turned.turned(turn.reversed()), surface);
        }
        let surface = Surface::solved(Left);
        assert_eq!(
            surface.turned(Clockwise).turned(Clockwise),
            surface.turned(Double)
        );
        assert_eq!(
            surface.turned(Counterclockwise).turned(Counterclockwise),
            surface.turned(Double)
        );
        let mut spun = surface;
        for _ in 0..4 {
            spun = spun.turned(Clockwise);
        }
        assert_eq!(spun, surface);
    }

    #[test]
    fn strips() {
        let up = Surface::solved(Up);
        assert_eq!(up.strip(Strip::Abc), [Ua, Ub, Uc]);
        assert_eq!(up.strip(Strip::Cba), [Uc, Ub, Ua]);
        assert_eq!(up.strip(Strip::Ghi), [Ug, Uh, Ui]);
        assert_eq!(up.strip(Strip::Ihg), [Ui, Uh, Ug]);
        assert_eq!(up.strip(Strip::Adg), [Ua, Ud, Ug]);
        assert_eq!(up.strip(Strip::Gda), [Ug, Ud, Ua]);
        assert_eq!(up.strip(Strip::Cfi), [Uc, Uf, Ui]);
        assert_eq!(up.strip(Strip::Ifc), [Ui, Uf, Uc]);
    }

    #[test]
    fn replaced() {
        let down = Surface::solved(Down);
        assert_eq!(
            down.replaced(Strip::Abc, [La, Lb, Lc]),
            Surface::new([La, Lb, Lc, Dd, De, Df, Dg, Dh, Di])
        );
        assert_eq!(
            down.replaced(Strip::Cfi, [La, Lb, Lc]),
            Surface::new([Da, Db, La, Dd, De, Lb, Dg, Dh, Lc])
        );
        // Writing through a reversed strip lays the tiles down backwards.
        assert_eq!(
            down.replaced(Strip::Cba, [La, Lb, Lc]),
            down.replaced(Strip::Abc, [Lc, Lb, La])
        );

        let strips = [
            Strip::Abc,
            Strip::Cba,
            Strip::Ghi,
            Strip::Ihg,
            Strip::Adg,
            Strip::Gda,
            Strip::Cfi,
            Strip::Ifc,
        ];
        for strip in strips {
            let tiles = [Ra, Rb, Rc];
            let replaced = down.replaced(strip, tiles);
            assert_eq!(replaced.strip(strip), tiles);
            assert_eq!(replaced.strip(strip.reversed()), [Rc, Rb, Ra]);
            let changed = zip(replaced.tiles(), down.tiles())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 3);
            assert_eq!(replaced.tiles()[4], De);
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            Surface::solved(Back).to_string(),
            "Ba|Bb|Bc\nBd|Be|Bf\nBg|Bh|Bi"
        );
    }
}
