/*!
A simple pseudorandom number generator.

A translation of the minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented against the [rand_core] traits.

PCG32 was chosen as the default source of (pseudo)random numbers as it is small, fast, and seedable, which keeps solves reproducible for a fixed [random_seed](crate::config::Config::random_seed).
The [context](crate::context) is generic over any [Rng](rand::Rng), with PCG32 fixed only in the canonical [Context](crate::context::Context) alias.
*/

use rand_core::{impls, RngCore, SeedableRng};

/// State and increment of a PCG32 generator.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let mut a = MinimalPCG32::from_seed(91648253_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(91648253_u64.to_le_bytes());
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seed_sensitivity() {
        let mut a = MinimalPCG32::from_seed(1_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let a_run: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let b_run: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(a_run, b_run);
    }
}
