use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{CubeHashError, CubeHashResult};
use crate::params::{Params, MAX_BLOCK_BYTES};
use crate::permutation::CubeState;

/// Padding byte written right after the last message byte.
const PADDING_START: u8 = 0x80;

/// A streaming CubeHash computation over a single message.
///
/// The hasher absorbs the message through any number of [`CubeHash::update`] calls,
/// and produces the digest with exactly one call to [`CubeHash::finalize`].
/// The digest does not depend on how the message was split across updates:
///
/// ```
/// use cubehash::{CubeHash, Params};
///
/// let mut hasher = CubeHash::new(Params::default());
/// hasher.update(b"yellow ").unwrap();
/// hasher.update(b"submarine").unwrap();
/// let digest = hasher.finalize().unwrap();
///
/// assert_eq!(digest, cubehash::digest(b"yellow submarine", Params::default()));
/// assert!(hasher.update(b"more").is_err());
/// ```
///
/// All internal memory has a fixed size and is wiped when the hasher is dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct CubeHash {
    state: CubeState,
    #[zeroize(skip)]
    params: Params,
    /// Message bytes not yet forming a full block.
    buffer: [u8; MAX_BLOCK_BYTES],
    /// Number of bytes filled in `buffer`, always less than the block size.
    filled_bytes: usize,
    finalized: bool,
}

impl Default for CubeHash {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

impl CubeHash {
    /// Initialize a hasher, mixing `params` into a fresh state.
    pub fn new(params: Params) -> Self {
        log::trace!("Initializing {}", params);
        Self {
            state: CubeState::new(&params),
            params,
            buffer: [0u8; MAX_BLOCK_BYTES],
            filled_bytes: 0,
            finalized: false,
        }
    }

    /// The parameters this hasher was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Size of the digest, in bytes.
    pub fn digest_len(&self) -> usize {
        self.params.digest_len()
    }

    /// Whether [`CubeHash::finalize`] has already been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn check_not_finalized(&self) -> CubeHashResult<()> {
        if self.finalized {
            log::debug!("Rejecting operation on finalized {}", self.params);
            Err(CubeHashError::UseAfterFinalize)
        } else {
            Ok(())
        }
    }

    /// Absorb more message bytes.
    ///
    /// Full blocks are mixed into the state immediately; the remainder is buffered.
    pub fn update(&mut self, input: &[u8]) -> CubeHashResult<()> {
        self.check_not_finalized()?;
        self.update_unchecked(input);
        Ok(())
    }

    /// Absorb message bytes without checking the hasher is still live.
    pub(crate) fn update_unchecked(&mut self, mut input: &[u8]) {
        let block_bytes = self.params.block_bytes();

        // Complete a partially filled block first.
        if self.filled_bytes > 0 {
            let chunk_len = usize::min(input.len(), block_bytes - self.filled_bytes);
            let (chunk, rest) = input.split_at(chunk_len);
            self.buffer[self.filled_bytes..self.filled_bytes + chunk_len].copy_from_slice(chunk);
            self.filled_bytes += chunk_len;
            input = rest;

            if self.filled_bytes < block_bytes {
                return;
            }
            self.state.absorb(&self.buffer[..block_bytes], self.params.rounds());
            self.filled_bytes = 0;
        }

        let mut blocks = input.chunks_exact(block_bytes);
        for block in &mut blocks {
            self.state.absorb(block, self.params.rounds());
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.filled_bytes = rest.len();
    }

    /// Pad the buffered bytes, run the finalization rounds, and write the digest into `out`.
    ///
    /// # Panics
    ///
    /// If `out` is not exactly [`CubeHash::digest_len`] bytes long.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> CubeHashResult<()> {
        self.check_not_finalized()?;
        self.finalize_unchecked(out);
        Ok(())
    }

    /// Finalize without checking the hasher is still live.
    pub(crate) fn finalize_unchecked(&mut self, out: &mut [u8]) {
        assert_eq!(out.len(), self.digest_len(), "Invalid digest buffer size");
        let block_bytes = self.params.block_bytes();

        self.buffer[self.filled_bytes] = PADDING_START;
        self.buffer[self.filled_bytes + 1..block_bytes].zeroize();
        self.state.absorb(&self.buffer[..block_bytes], self.params.rounds());
        self.state.finish(self.params.final_rounds());
        self.state.write_output(out);

        self.buffer.zeroize();
        self.filled_bytes = 0;
        self.finalized = true;
    }

    /// Pad the buffered bytes, run the finalization rounds, and return the digest.
    ///
    /// The hasher becomes inert: further calls to [`CubeHash::update`] or
    /// [`CubeHash::finalize`] return [`CubeHashError::UseAfterFinalize`].
    pub fn finalize(&mut self) -> CubeHashResult<Vec<u8>> {
        let mut digest = vec![0u8; self.digest_len()];
        self.finalize_into(&mut digest)?;
        Ok(digest)
    }
}

impl std::io::Write for CubeHash {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl core::fmt::Debug for CubeHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CubeHash")
            .field("params", &self.params)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}
