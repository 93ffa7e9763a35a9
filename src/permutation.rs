//! The CubeHash round function.
//!
//! The state is 32 words of 32 bits, viewed as the vertices of a 5-dimensional hypercube:
//! word `k` sits at the coordinate given by the binary expansion of `k`.
//! Every step of a round either combines the two halves `k < 16` and `k >= 16`,
//! or swaps words across one axis of the hypercube (xoring the index with 8, 2, 4 and 1 in turn).
//! There is no data-dependent branching or memory access.
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::params::Params;

/// Number of 32-bit words in the state.
pub const STATE_WORDS: usize = 32;
/// Size of the state in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 4;

const HALF: usize = STATE_WORDS / 2;

/// The 1024-bit CubeHash state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CubeState([u32; STATE_WORDS]);

impl Default for CubeState {
    fn default() -> Self {
        Self([0u32; STATE_WORDS])
    }
}

impl CubeState {
    /// Seed a state with the digest length, block size and rounds of `params`,
    /// then apply the initialization rounds.
    ///
    /// The first word holds the digest length in bytes, as in the published CubeHash definition.
    pub fn new(params: &Params) -> Self {
        let mut state = Self::default();
        state.0[0] = params.digest_len() as u32;
        state.0[1] = params.block_bytes() as u32;
        state.0[2] = params.rounds();
        state.permute(params.init_rounds());
        state
    }

    /// Apply a single round.
    #[inline]
    pub fn round(&mut self) {
        let x = &mut self.0;
        let (lo, hi) = x.split_at_mut(HALF);

        add_into(hi, lo);
        swap_across(lo, 8);
        lo.iter_mut().for_each(|w| *w = w.rotate_left(7));
        xor_into(lo, hi);
        swap_across(hi, 2);

        add_into(hi, lo);
        swap_across(lo, 4);
        lo.iter_mut().for_each(|w| *w = w.rotate_left(11));
        xor_into(lo, hi);
        swap_across(hi, 1);
    }

    /// Apply `rounds` consecutive rounds.
    pub fn permute(&mut self, rounds: u32) {
        for _ in 0..rounds {
            self.round();
        }
    }

    /// Xor `block` into the leading bytes of the state, reading the words in little-endian order.
    ///
    /// `block` may have any length up to [`STATE_BYTES`], multiple of 4 or not.
    pub fn xor_block(&mut self, block: &[u8]) {
        assert!(block.len() <= STATE_BYTES);
        for (word, chunk) in self.0.iter_mut().zip(block.chunks(4)) {
            let mut bytes = [0u8; 4];
            bytes[..chunk.len()].copy_from_slice(chunk);
            *word ^= u32::from_le_bytes(bytes);
        }
    }

    /// Xor a full message block into the state and apply `rounds` rounds.
    pub fn absorb(&mut self, block: &[u8], rounds: u32) {
        self.xor_block(block);
        self.permute(rounds);
    }

    /// Flip the bit marking the start of finalization.
    pub fn xor_finalization_flag(&mut self) {
        self.0[STATE_WORDS - 1] ^= 1;
    }

    /// Mark the end of the message and apply the `final_rounds` finalization rounds.
    ///
    /// The padded last block must already have been absorbed.
    pub fn finish(&mut self, final_rounds: u32) {
        self.xor_finalization_flag();
        self.permute(final_rounds);
    }

    /// Write the leading `out.len()` bytes of the state, in little-endian word order.
    pub fn write_output(&self, out: &mut [u8]) {
        assert!(out.len() <= STATE_BYTES);
        for (chunk, word) in out.chunks_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
        }
    }
}

impl AsRef<[u32]> for CubeState {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

fn add_into(dst: &mut [u32], src: &[u32]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = d.wrapping_add(*s);
    }
}

fn xor_into(dst: &mut [u32], src: &[u32]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}

/// Swap every word `k` of `half` with word `k ^ mask`.
fn swap_across(half: &mut [u32], mask: usize) {
    for k in 0..half.len() {
        if k & mask == 0 {
            half.swap(k, k ^ mask);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A naive transcription of the reference round,
    /// going through a temporary buffer for every swap.
    fn reference_round(x: &mut [u32; 32]) {
        let mut y = [0u32; 16];
        for i in 0..16 {
            x[i + 16] = x[i + 16].wrapping_add(x[i]);
        }
        for i in 0..16 {
            y[i ^ 8] = x[i];
        }
        for i in 0..16 {
            x[i] = y[i].rotate_left(7);
        }
        for i in 0..16 {
            x[i] ^= x[i + 16];
        }
        for i in 0..16 {
            y[i ^ 2] = x[i + 16];
        }
        x[16..].copy_from_slice(&y);
        for i in 0..16 {
            x[i + 16] = x[i + 16].wrapping_add(x[i]);
        }
        for i in 0..16 {
            y[i ^ 4] = x[i];
        }
        for i in 0..16 {
            x[i] = y[i].rotate_left(11);
        }
        for i in 0..16 {
            x[i] ^= x[i + 16];
        }
        for i in 0..16 {
            y[i ^ 1] = x[i + 16];
        }
        x[16..].copy_from_slice(&y);
    }

    #[test]
    fn test_round_matches_reference() {
        let mut words = [0u32; 32];
        for (i, w) in words.iter_mut().enumerate() {
            *w = (i as u32).wrapping_mul(0x9e37_79b9) ^ 0xdead_beef;
        }
        let mut state = CubeState(words);
        for _ in 0..8 {
            reference_round(&mut words);
            state.round();
            assert_eq!(state.as_ref(), &words[..]);
        }
    }

    /// The round is not the identity, even on the all-zero state after seeding.
    #[test]
    fn test_round_mixes() {
        let mut state = CubeState::default();
        state.round();
        assert_eq!(state.as_ref(), &[0u32; 32][..], "zero is a fixed point");

        state.0[0] = 1;
        state.round();
        assert_ne!(state.as_ref(), &[0u32; 32][..]);
        assert!(state.as_ref().iter().filter(|&&w| w != 0).count() > 1);
    }

    #[test]
    fn test_seed() {
        let params = Params::try_new(1, 8, 1, 1, 256).unwrap();
        let mut expected = CubeState::default();
        expected.0[..3].copy_from_slice(&[32, 1, 8]);
        expected.round();
        assert_eq!(CubeState::new(&params).as_ref(), expected.as_ref());
    }

    #[test]
    fn test_xor_block_little_endian() {
        let mut state = CubeState::default();
        state.xor_block(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(state.0[0], 0x0403_0201);
        assert_eq!(state.0[1], 0x0000_0605);
        assert!(state.0[2..].iter().all(|&w| w == 0));

        state.xor_block(&[0x01]);
        assert_eq!(state.0[0], 0x0403_0200);
    }

    #[test]
    fn test_write_output() {
        let mut state = CubeState::default();
        state.0[0] = 0x0403_0201;
        state.0[1] = 0x0807_0605;
        let mut out = [0u8; 7];
        state.write_output(&mut out);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_finalization_flag() {
        let mut state = CubeState::default();
        state.xor_finalization_flag();
        assert_eq!(state.0[31], 1);
        state.xor_finalization_flag();
        assert_eq!(state.0[31], 0);
    }
}
