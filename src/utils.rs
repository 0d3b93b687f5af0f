use super::*;

pub type Id = usize;

/// Grid coordinates, each component in `-1..=1`.
pub type Pos = (i8, i8, i8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
    Void,
}

impl Color {
    pub const COL_SET: [Color; 6] = [White, Yellow, Orange, Red, Green, Blue];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            White => "  ".on_bright_white(),
            Yellow => "  ".on_bright_yellow(),
            Orange => "  ".on_yellow(),
            Red => "  ".on_bright_red(),
            Green => "  ".on_bright_green(),
            Blue => "  ".on_bright_blue(),
            Void => "  ".on_black(),
        }
        .fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

pub fn pos_2_arr((x, y, z): Pos) -> [i8; 3] {
    [x, y, z]
}

impl Axis {
    pub fn coord(self, pos: Pos) -> i8 {
        pos_2_arr(pos)[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const FACE_SET: [Face; 6] = [Up, Down, Left, Right, Front, Back];

    /// Canonical sticker color of the face in the solved state.
    pub const fn color(self) -> Color {
        Color::COL_SET[self as usize]
    }

    pub const fn axis(self) -> Axis {
        match self {
            Left | Right => Axis::X,
            Up | Down => Axis::Y,
            Front | Back => Axis::Z,
        }
    }

    /// Coordinate of the layer adjacent to the face on its axis.
    pub const fn layer(self) -> i8 {
        match self {
            Right | Up | Front => 1,
            Left | Down | Back => -1,
        }
    }

    pub const fn normal(self) -> Pos {
        match self {
            Up => (0, 1, 0),
            Down => (0, -1, 0),
            Left => (-1, 0, 0),
            Right => (1, 0, 0),
            Front => (0, 0, 1),
            Back => (0, 0, -1),
        }
    }

    pub fn from_normal(normal: Pos) -> Option<Face> {
        Self::FACE_SET.into_iter().find(|f| f.normal() == normal)
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Some(match letter {
            'U' => Up,
            'D' => Down,
            'L' => Left,
            'R' => Right,
            'F' => Front,
            'B' => Back,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Up => "U",
            Down => "D",
            Left => "L",
            Right => "R",
            Front => "F",
            Back => "B",
        }
        .fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Cw,
    Ccw,
    Half,
}

impl Turn {
    pub const TURN_SET: [Turn; 3] = [Cw, Ccw, Half];

    /// Clockwise quarter turns, modulo 4.
    pub const fn quarters(self) -> u8 {
        match self {
            Cw => 1,
            Half => 2,
            Ccw => 3,
        }
    }

    pub const fn from_quarters(quarters: u8) -> Option<Turn> {
        match quarters % 4 {
            1 => Some(Cw),
            2 => Some(Half),
            3 => Some(Ccw),
            _ => None,
        }
    }

    pub const fn inverse(self) -> Turn {
        match self {
            Cw => Ccw,
            Ccw => Cw,
            Half => Half,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Cw => "",
            Ccw => "'",
            Half => "2",
        }
        .fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move(pub Face, pub Turn);

impl Move {
    /// Faces in `U D L R F B` order, each with no modifier, `'` and `2`.
    /// Scramble draws index this table, so the order is fixed.
    pub const MOV_SET: [Move; 18] = [
        Move(Up, Cw),
        Move(Up, Ccw),
        Move(Up, Half),
        Move(Down, Cw),
        Move(Down, Ccw),
        Move(Down, Half),
        Move(Left, Cw),
        Move(Left, Ccw),
        Move(Left, Half),
        Move(Right, Cw),
        Move(Right, Ccw),
        Move(Right, Half),
        Move(Front, Cw),
        Move(Front, Ccw),
        Move(Front, Half),
        Move(Back, Cw),
        Move(Back, Ccw),
        Move(Back, Half),
    ];

    pub const fn inverse(self) -> Move {
        Move(self.0, self.1.inverse())
    }

    pub fn painted(&self) -> String {
        format!(
            "{}{}",
            self.0.to_string().bright_yellow(),
            self.1.to_string().bright_red()
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, fm: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fm, "{}{}", self.0, self.1)
    }
}

impl std::str::FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation::parse_move(s, 0)
    }
}

pub fn format_moves(movs: &[Move]) -> String {
    movs.iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}
