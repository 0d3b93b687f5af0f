//! CFOP milestone checks.
//!
//! Every check is sticker-local: a sticker counts as placed when its color
//! is the solved color of the face key it currently sits on.

use super::*;

/// Furthest CFOP milestone a state has reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Unsolved,
    Cross,
    FirstTwoLayers,
    Oll,
    Solved,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stage::Unsolved => "unsolved",
            Stage::Cross => "cross",
            Stage::FirstTwoLayers => "first two layers",
            Stage::Oll => "last layer oriented",
            Stage::Solved => "solved",
        }
        .fmt(f)
    }
}

impl Cubie {
    fn is_placed(&self) -> bool {
        self.stickers().all(|(face, col)| face.color() == col)
    }
}

impl Cube {
    pub fn is_solved(&self) -> bool {
        self.cubies().iter().all(Cubie::is_placed)
    }

    /// The four edges around `face` show the face color on that face.
    /// Side stickers are not checked.
    pub fn is_cross_solved(&self, face: Face) -> bool {
        let axis = face.axis();

        self.cubies()
            .iter()
            .filter(|sub| {
                let coords = pos_2_arr(sub.pos);
                axis.coord(sub.pos) == face.layer()
                    && coords.iter().filter(|c| **c != 0).count() == 2
            })
            .all(|sub| sub.color(face) == Some(face.color()))
    }

    /// Cross on Down, the face CFOP starts from.
    pub fn is_down_cross_solved(&self) -> bool {
        self.is_cross_solved(Down)
    }

    pub fn is_first_two_layers_solved(&self) -> bool {
        self.cubies()
            .iter()
            .filter(|sub| sub.pos.1 != 1)
            .all(Cubie::is_placed)
    }

    /// Every Up sticker of the top layer is white; permutation is ignored.
    pub fn is_oll_solved(&self) -> bool {
        self.cubies()
            .iter()
            .filter(|sub| sub.pos.1 == 1)
            .all(|sub| sub.color(Up).map_or(true, |col| col == Up.color()))
    }

    /// Milestones are checked in solving order, with the cross on Down.
    pub fn stage(&self) -> Stage {
        if self.is_solved() {
            Stage::Solved
        } else if !self.is_down_cross_solved() {
            Stage::Unsolved
        } else if !self.is_first_two_layers_solved() {
            Stage::Cross
        } else if !self.is_oll_solved() {
            Stage::FirstTwoLayers
        } else {
            Stage::Oll
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(text: &str) -> Cube {
        Cube::new().apply_moves(&parse_moves(text).unwrap())
    }

    #[test]
    fn test_solved_state_passes_everything() {
        let cube = Cube::new();

        assert!(cube.is_solved());
        for face in Face::FACE_SET {
            assert!(cube.is_cross_solved(face));
        }
        assert!(cube.is_first_two_layers_solved());
        assert!(cube.is_oll_solved());
        assert_eq!(cube.stage(), Stage::Solved);
    }

    #[test]
    fn test_top_turn_keeps_lower_milestones() {
        let cube = after("U");

        assert!(!cube.is_solved());
        assert!(cube.is_cross_solved(Down));
        assert!(cube.is_down_cross_solved());
        assert!(cube.is_first_two_layers_solved());
        assert!(cube.is_oll_solved());
        assert!(!cube.is_cross_solved(Front));
        assert_eq!(cube.stage(), Stage::Oll);
    }

    #[test]
    fn test_last_layer_algorithms() {
        // T permutation only permutes the last layer
        let cube = after("R U R' U' R' F R2 U' R' U' R U R' F'");
        assert_eq!(cube.stage(), Stage::Oll);

        // Sune twists three corners
        let cube = after("R U R' U R U2 R'");
        assert!(!cube.is_oll_solved());
        assert_eq!(cube.stage(), Stage::FirstTwoLayers);

        let cube = after("F R U R' U' F'");
        assert!(!cube.is_oll_solved());
        assert_eq!(cube.stage(), Stage::FirstTwoLayers);
    }

    #[test]
    fn test_broken_first_two_layers() {
        let cube = after("R U R' U'");

        assert!(cube.is_cross_solved(Down));
        assert!(!cube.is_first_two_layers_solved());
        assert_eq!(cube.stage(), Stage::Cross);
    }

    #[test]
    fn test_broken_cross() {
        let cube = after("R");

        assert!(!cube.is_cross_solved(Down));
        assert!(!cube.is_down_cross_solved());
        assert!(cube.is_cross_solved(Right));
        assert_eq!(cube.stage(), Stage::Unsolved);
    }

    #[test]
    fn test_stage_order() {
        assert!(Stage::Unsolved < Stage::Cross);
        assert!(Stage::Oll < Stage::Solved);
        assert_eq!(Stage::FirstTwoLayers.to_string(), "first two layers");
    }
}
