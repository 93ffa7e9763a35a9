//!
//! CubeHash is a family of sponge-like hash functions designed by Daniel J. Bernstein.
//! Each member is described by five parameters, written `CubeHashi+r/b+f-h`:
//! the number of initialization rounds `i`,
//! the number of rounds `r` applied after every `b`-byte message block,
//! the number of finalization rounds `f`,
//! and the digest size `h` in bits.
//!
//!
//! # Overview
//!
//! The library does three things:
//!
//! - Validate parameters ([`Params`]), either leniently, substituting defaults for invalid values, or strictly;
//! - Hash a message incrementally ([`CubeHash`]) or in one go ([`digest()`], [`digest_hex`]);
//! - Provide the canonical CubeHash16+16/32+32 variants as [`digest::Digest`] implementations ([`CubeHash256`], [`CubeHash512`], ...).
//!
//! The internal state is 32 words of 32 bits.
//! It is seeded with `h/8`, `b`, `r` and mixed with `i` rounds.
//! Each message block is xored into the leading bytes of the state and followed by `r` rounds.
//! The last, partial block is padded with a single `0x80` byte followed by zeros (always at least one byte of padding),
//! then a flag is flipped in the last word and `f` rounds finish the computation.
//! The digest consists of the first `h/8` bytes of the state, in little-endian order.
//!
//! ```
//! use cubehash::{CubeHash, Params};
//!
//! // CubeHash16+16/32+32-512 is the default.
//! let params = Params::configure(None, None, None, None, None);
//! assert_eq!(params, Params::default());
//!
//! let mut hasher = CubeHash::new(params);
//! hasher.update(b"hello").unwrap();
//! let digest = hasher.finalize().unwrap();
//! assert_eq!(digest.len(), 64);
//! assert_eq!(hex::encode(&digest), cubehash::digest_hex("hello", params));
//! ```
//!
//! Parameters outside of their range are replaced by their default, one by one.
//! Use [`Params::try_new`] to reject them instead:
//!
//! ```
//! use cubehash::{CubeHashError, Params};
//!
//! let lenient = Params::configure(Some(-1), Some(8), None, None, Some(513));
//! assert_eq!((lenient.init_rounds(), lenient.rounds(), lenient.digest_bits()), (16, 8, 512));
//!
//! let strict = Params::try_new(16, 8, 32, 32, 513);
//! assert_eq!(strict, Err(CubeHashError::InvalidParameter { name: "h", value: 513 }));
//! ```
//!
//! # Acknowledgements
//!
//! The algorithm follows the [CubeHash specification] submitted to the NIST SHA-3 competition.
//!
//! [CubeHash specification]: https://cubehash.cr.yp.to/

/// Built-in errors.
mod errors;
/// Fixed-size variants implementing the [`digest`] traits.
mod fixed;
/// Streaming hasher.
mod hasher;
/// One-shot helpers.
mod oneshot;
/// Parameter validation.
mod params;
/// The CubeHash round function and state.
pub mod permutation;

pub use ::digest;
pub use errors::{CubeHashError, CubeHashResult};
pub use fixed::{
    CubeHash128, CubeHash160, CubeHash224, CubeHash256, CubeHash384, CubeHash512, CubeHashCore,
};
pub use hasher::CubeHash;
pub use oneshot::{digest, digest_hex, text_to_bytes};
pub use params::{Params, MAX_BLOCK_BYTES, MAX_DIGEST_BITS};
