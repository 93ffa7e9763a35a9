//! Fixed-parameter CubeHash variants implementing the [`digest`] traits.
//!
//! These are the CubeHash16+16/32+32-h members of the family, with the digest size chosen at compile time.
//! They can be used wherever a [`digest::Digest`] is expected:
//!
//! ```
//! use cubehash::{CubeHash256, Params};
//! use cubehash::digest::Digest;
//!
//! let digest = CubeHash256::digest(b"abc");
//! let params = Params::configure(None, None, None, None, Some(256));
//! assert_eq!(digest.as_slice(), cubehash::digest(b"abc", params).as_slice());
//! ```
use core::{fmt, marker::PhantomData};

use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, UpdateCore,
    },
    typenum::{IsLessOrEqual, LeEq, NonZero, Unsigned, U16, U20, U28, U32, U48, U64},
    HashMarker, Output, Reset,
};
use generic_array::ArrayLength;

use crate::params::Params;
use crate::permutation::CubeState;

const PADDING_START: u8 = 0x80;

/// Core hasher state of CubeHash16+16/32+32, generic over the output size in bytes.
#[derive(Clone)]
pub struct CubeHashCore<OutSize> {
    state: CubeState,
    params: Params,
    _out: PhantomData<OutSize>,
}

/// CubeHash16+16/32+32-128 hasher state.
pub type CubeHash128 = CoreWrapper<CubeHashCore<U16>>;
/// CubeHash16+16/32+32-160 hasher state.
pub type CubeHash160 = CoreWrapper<CubeHashCore<U20>>;
/// CubeHash16+16/32+32-224 hasher state.
pub type CubeHash224 = CoreWrapper<CubeHashCore<U28>>;
/// CubeHash16+16/32+32-256 hasher state.
pub type CubeHash256 = CoreWrapper<CubeHashCore<U32>>;
/// CubeHash16+16/32+32-384 hasher state.
pub type CubeHash384 = CoreWrapper<CubeHashCore<U48>>;
/// CubeHash16+16/32+32-512 hasher state.
pub type CubeHash512 = CoreWrapper<CubeHashCore<U64>>;

impl<OutSize> Default for CubeHashCore<OutSize>
where
    OutSize: ArrayLength<u8> + NonZero + IsLessOrEqual<U64> + 'static,
    LeEq<OutSize, U64>: NonZero,
{
    #[inline]
    fn default() -> Self {
        let params = Params::with_digest_len(OutSize::USIZE);
        Self {
            state: CubeState::new(&params),
            params,
            _out: PhantomData,
        }
    }
}

impl<OutSize> HashMarker for CubeHashCore<OutSize> {}

impl<OutSize> BlockSizeUser for CubeHashCore<OutSize> {
    type BlockSize = U32;
}

impl<OutSize> BufferKindUser for CubeHashCore<OutSize> {
    type BufferKind = Eager;
}

impl<OutSize> UpdateCore for CubeHashCore<OutSize> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.state.absorb(block.as_ref(), self.params.rounds());
        }
    }
}

impl<OutSize> OutputSizeUser for CubeHashCore<OutSize>
where
    OutSize: ArrayLength<u8> + NonZero + IsLessOrEqual<U64> + 'static,
    LeEq<OutSize, U64>: NonZero,
{
    type OutputSize = OutSize;
}

impl<OutSize> FixedOutputCore for CubeHashCore<OutSize>
where
    OutSize: ArrayLength<u8> + NonZero + IsLessOrEqual<U64> + 'static,
    LeEq<OutSize, U64>: NonZero,
{
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let rounds = self.params.rounds();
        let state = &mut self.state;
        buffer.digest_pad(PADDING_START, &[], |block| state.absorb(block.as_ref(), rounds));
        state.finish(self.params.final_rounds());
        state.write_output(out);
    }
}

impl<OutSize> Reset for CubeHashCore<OutSize>
where
    OutSize: ArrayLength<u8> + NonZero + IsLessOrEqual<U64> + 'static,
    LeEq<OutSize, U64>: NonZero,
{
    #[inline]
    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<OutSize> AlgorithmName for CubeHashCore<OutSize>
where
    OutSize: ArrayLength<u8> + NonZero + IsLessOrEqual<U64> + 'static,
    LeEq<OutSize, U64>: NonZero,
{
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubeHash{}", OutSize::USIZE * 8)
    }
}

impl<OutSize> fmt::Debug for CubeHashCore<OutSize> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubeHashCore<{}> {{ ... }}", self.params)
    }
}
