//! Seeded scrambles.
//!
//! The generator is mulberry32, a 32-bit integer mixing function. It is
//! reproduced bit for bit so a given seed yields the same scramble on every
//! implementation that uses the same algorithm and move table.

use super::*;
use crossbeam::thread;
use rand::{RngCore, SeedableRng};

#[derive(Clone, Debug)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Uniform index in `0..n`, equal to `floor(next / 2^32 * n)`.
    pub fn below(&mut self, n: usize) -> usize {
        ((self.next_u32() as u64 * n as u64) >> 32) as usize
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;

        ((self.next_u32() as u64) << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes()[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scramble {
    pub movs: Vec<Move>,
    pub cube: Cube,
}

/// Draws `mov_nb` moves from [`Move::MOV_SET`], redrawing whenever the
/// candidate turns the same face or the same axis as the previous move.
pub fn random_scramble(mov_nb: usize, seed: u32) -> Scramble {
    let mut rng = Mulberry32::new(seed);
    let mut movs = Vec::with_capacity(mov_nb);
    let mut lst_mv: Option<Move> = None;
    let mut rejected = 0;

    while movs.len() < mov_nb {
        let mv = Move::MOV_SET[rng.below(Move::MOV_SET.len())];

        if let Some(Move(face, _)) = lst_mv {
            if face == mv.0 || face.axis() == mv.0.axis() {
                rejected += 1;
                continue;
            }
        }
        lst_mv = Some(mv);
        movs.push(mv);
    }
    tracing::debug!(seed, mov_nb, rejected, "generated scramble");

    let cube = Cube::new().apply_moves(&movs);
    Scramble { movs, cube }
}

/// One scramble per seed. Seeds are split into one contiguous chunk per
/// available core and each chunk runs on a scoped thread. Results come back
/// in seed order and match [`random_scramble`] exactly.
pub fn batch(mov_nb: usize, seeds: &[u32]) -> Vec<Scramble> {
    let workers = std::thread::available_parallelism().map_or(1, |n| n.get());
    let chunk_sz = ((seeds.len() + workers - 1) / workers).max(1);

    tracing::debug!(mov_nb, count = seeds.len(), workers, "batch scramble");
    thread::scope(|s| {
        let thrds = seeds
            .chunks(chunk_sz)
            .map(|chunk| {
                s.spawn(move |_| {
                    chunk
                        .iter()
                        .map(|&seed| random_scramble(mov_nb, seed))
                        .collect::<Vec<Scramble>>()
                })
            })
            .collect::<Vec<_>>();

        thrds
            .into_iter()
            .flat_map(|thrd| match thrd.join() {
                Ok(scrambles) => scrambles,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}
