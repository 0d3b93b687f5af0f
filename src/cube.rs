use super::*;

/// One of the 27 small cubes.
///
/// `home` is the position the cubie occupies in the solved state and never
/// changes; `pos` follows the cubie around as layers turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cubie {
    pub home: Pos,
    pub pos: Pos,
    stickers: [Option<Color>; 6],
}

impl Cubie {
    /// Stable identity string, derived from the home position.
    pub fn id(&self) -> String {
        format!("{},{},{}", self.home.0, self.home.1, self.home.2)
    }

    pub fn color(&self, face: Face) -> Option<Color> {
        self.stickers[face as usize]
    }

    pub fn stickers(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::FACE_SET
            .into_iter()
            .filter_map(|face| self.color(face).map(|col| (face, col)))
    }

    pub fn sticker_count(&self) -> usize {
        self.stickers.iter().flatten().count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    subs: [Cubie; 27],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, fm: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut result = String::with_capacity(0x100);
        let [up, down, left, front, right, back] =
            [Up, Down, Left, Front, Right, Back].map(|face| self.facelets(face));

        for line in up.chunks(3) {
            result.push_str(&format!("         {}\n", Self::row_2_str(line)));
        }
        result.push('\n');
        for (l, (f, (r, b))) in left
            .chunks(3)
            .zip(front.chunks(3).zip(right.chunks(3).zip(back.chunks(3))))
        {
            result.push_str(&format!(
                " {}  {}  {}  {}\n",
                Self::row_2_str(l),
                Self::row_2_str(f),
                Self::row_2_str(r),
                Self::row_2_str(b),
            ));
        }
        result.push('\n');
        for line in down.chunks(3) {
            result.push_str(&format!("         {}\n", Self::row_2_str(line)));
        }
        write!(fm, "{}", result)
    }
}

impl Cube {
    /// Face cycles of a counterclockwise quarter turn, as seen from the
    /// positive end of each axis. Faces on the axis itself are fixed.
    pub const FACE_CHAINS: [[Face; 4]; 3] = [
        [Up, Front, Down, Back],
        [Front, Right, Back, Left],
        [Up, Left, Down, Right],
    ];

    pub fn new() -> Self {
        let subs = std::array::from_fn(|id| {
            let pos = Self::id_2_pos(id);
            let mut stickers = [None; 6];

            for face in Face::FACE_SET {
                if face.axis().coord(pos) == face.layer() {
                    stickers[face as usize] = Some(face.color());
                }
            }
            Cubie {
                home: pos,
                pos,
                stickers,
            }
        });

        Self { subs }
    }

    pub fn pos_2_id((x, y, z): Pos) -> Id {
        ((x + 1) * 9 + (y + 1) * 3 + (z + 1)) as Id
    }

    pub fn id_2_pos(id: Id) -> Pos {
        let id = id as i8;

        (id / 9 - 1, id / 3 % 3 - 1, id % 3 - 1)
    }

    /// Cubies indexed by their home position (see [`Cube::pos_2_id`]).
    pub fn cubies(&self) -> &[Cubie; 27] {
        &self.subs
    }

    /// The cubie currently sitting at `pos`.
    pub fn at(&self, pos: Pos) -> Option<&Cubie> {
        self.subs.iter().find(|sub| sub.pos == pos)
    }

    /// The nine stickers of `face` in reading order, as laid out in the
    /// unfolded net.
    pub fn facelets(&self, face: Face) -> [Color; 9] {
        std::array::from_fn(|i| {
            let (row, col) = ((i / 3) as i8, (i % 3) as i8);
            let pos = match face {
                Up => (col - 1, 1, row - 1),
                Down => (col - 1, -1, 1 - row),
                Front => (col - 1, 1 - row, 1),
                Back => (1 - col, 1 - row, -1),
                Left => (-1, 1 - row, col - 1),
                Right => (1, 1 - row, 1 - col),
            };

            self.at(pos).and_then(|sub| sub.color(face)).unwrap_or(Void)
        })
    }

    fn row_2_str(row: &[Color]) -> String {
        row.iter().map(|col| col.to_string()).collect()
    }

    /// Quarter turn of a position around `axis`, counterclockwise as seen
    /// from the positive end of the axis when `ccw` is set.
    pub fn rotate_pos((x, y, z): Pos, axis: Axis, ccw: bool) -> Pos {
        match (axis, ccw) {
            (X, true) => (x, -z, y),
            (X, false) => (x, z, -y),
            (Y, true) => (z, y, -x),
            (Y, false) => (-z, y, x),
            (Z, true) => (-y, x, z),
            (Z, false) => (y, -x, z),
        }
    }

    /// Face-key relabeling matching [`Cube::rotate_pos`].
    pub fn rotate_dir(dir: Face, axis: Axis, ccw: bool) -> Face {
        let chain = &Self::FACE_CHAINS[axis as usize];

        match chain.iter().position(|f| *f == dir) {
            Some(i) => chain[(i + if ccw { 1 } else { 3 }) % 4],
            None => dir,
        }
    }

    fn rotate_sub(sub: &mut Cubie, axis: Axis, ccw: bool) {
        let mut stickers = [None; 6];

        for (face, col) in sub.stickers() {
            stickers[Self::rotate_dir(face, axis, ccw) as usize] = Some(col);
        }
        sub.stickers = stickers;
        sub.pos = Self::rotate_pos(sub.pos, axis, ccw);
    }

    fn rotate(&mut self, mov: Move) {
        let Move(face, turn) = mov;
        let axis = face.axis();
        let layer = face.layer();

        for _ in 0..if turn == Half { 2 } else { 1 } {
            // clockwise on a positive face is clockwise against its axis
            let ccw = (layer < 0) != (turn == Ccw);

            for sub in self
                .subs
                .iter_mut()
                .filter(|sub| axis.coord(sub.pos) == layer)
            {
                Self::rotate_sub(sub, axis, ccw);
            }
        }
    }

    /// Returns the state after `mov`; `self` is left untouched.
    pub fn apply(&self, mov: Move) -> Cube {
        let mut result = self.clone();

        tracing::trace!(%mov, "apply move");
        result.rotate(mov);
        result
    }

    pub fn apply_moves(&self, movs: &[Move]) -> Cube {
        movs.iter().fold(self.clone(), |mut cube, mov| {
            cube.rotate(*mov);
            cube
        })
    }

    pub fn apply_token(&self, token: &str) -> CubeResult<Cube> {
        self.apply_tokens(&[token])
    }

    pub fn apply_tokens(&self, tokens: &[&str]) -> CubeResult<Cube> {
        let mut result = self.clone();

        for (index, token) in tokens.iter().enumerate() {
            if let Some(face) = token.chars().next() {
                if Face::from_letter(face).is_none() {
                    return Err(InvalidMoveError { face }.into());
                }
            }
            result.rotate(notation::parse_move(token, index)?);
        }
        Ok(result)
    }

    /// Color histogram of a cubie, indexed by `Color as usize`.
    fn col_counts(sub: &Cubie) -> [u8; 7] {
        let mut counts = [0; 7];

        for (_, col) in sub.stickers() {
            counts[col as usize] += 1;
        }
        counts
    }

    /// Checks the structural invariants: 27 distinct in-grid positions,
    /// stickers on exactly the outer faces of the current position, and the
    /// colors of the cubie that started at `home`.
    pub fn is_well_formed(&self) -> bool {
        let solved = Self::new();
        let mut seen = [false; 27];

        for (sub, home) in self.subs.iter().zip(solved.subs.iter()) {
            if pos_2_arr(sub.pos).iter().any(|c| !(-1..=1).contains(c)) {
                return false;
            }
            let id = Self::pos_2_id(sub.pos);
            if seen[id] || sub.home != home.home {
                return false;
            }
            seen[id] = true;

            let outer = Face::FACE_SET
                .into_iter()
                .all(|f| sub.color(f).is_some() == (f.axis().coord(sub.pos) == f.layer()));
            if !outer || Self::col_counts(sub) != Self::col_counts(home) {
                return false;
            }
        }
        true
    }

    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Cube> {
        let cube: Cube = bincode::deserialize(bytes)?;

        if !cube.is_well_formed() {
            return Err(Box::new(bincode::ErrorKind::Custom(
                "malformed cube state".to_string(),
            )));
        }
        Ok(cube)
    }
}
