//! Rubik's Cube state and move engine.
//!
//! Models a 3x3x3 cube as 27 cubies on a `{-1, 0, 1}` grid, applies face
//! turns written in standard notation, generates reproducible scrambles and
//! reports CFOP solve milestones.

pub mod cube;
pub mod error;
pub mod notation;
pub mod scramble;
pub mod solver;
pub mod utils;

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub use cube::*;
pub use error::*;
pub use notation::{parse_moves, simplify_moves};
pub use scramble::{random_scramble, Scramble};
pub use solver::Stage;
pub use utils::*;

use Axis::*;
use Color::*;
use Face::*;
use Turn::*;
