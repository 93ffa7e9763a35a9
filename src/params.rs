use core::fmt;

use crate::errors::{CubeHashError, CubeHashResult};

/// Largest supported block size, in bytes.
pub const MAX_BLOCK_BYTES: usize = 128;
/// Largest supported digest size, in bits.
pub const MAX_DIGEST_BITS: usize = 512;

const DEFAULT_INIT_ROUNDS: u32 = 16;
const DEFAULT_ROUNDS: u32 = 16;
const DEFAULT_BLOCK_BYTES: usize = 32;
const DEFAULT_FINAL_ROUNDS: u32 = 32;
const DEFAULT_DIGEST_BITS: usize = 512;

/// The parameters of a member of the CubeHash family, written `CubeHashi+r/b+f-h`.
///
/// - `i`: number of initialization rounds, `i > 0`;
/// - `r`: number of rounds per message block, `r > 0`;
/// - `b`: number of bytes per message block, `0 < b <= 128`;
/// - `f`: number of finalization rounds, `f > 0`;
/// - `h`: digest size in bits, `8 <= h <= 512` and a multiple of 8.
///
/// A [`Params`] instance is always valid.
/// It can be built leniently with [`Params::configure`], replacing invalid values with defaults,
/// or strictly with [`Params::try_new`].
///
/// ```
/// use cubehash::Params;
///
/// let params = Params::configure(None, Some(8), Some(1), None, Some(256));
/// assert_eq!(params.to_string(), "CubeHash16+8/1+32-256");
/// assert_eq!(params.digest_len(), 32);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params {
    init_rounds: u32,
    rounds: u32,
    block_bytes: usize,
    final_rounds: u32,
    digest_bits: usize,
}

impl Default for Params {
    /// CubeHash16+16/32+32-512.
    fn default() -> Self {
        Self {
            init_rounds: DEFAULT_INIT_ROUNDS,
            rounds: DEFAULT_ROUNDS,
            block_bytes: DEFAULT_BLOCK_BYTES,
            final_rounds: DEFAULT_FINAL_ROUNDS,
            digest_bits: DEFAULT_DIGEST_BITS,
        }
    }
}

fn rounds_from(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|&v| v > 0)
}

fn block_bytes_from(value: i64) -> Option<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&v| v > 0 && v <= MAX_BLOCK_BYTES)
}

fn digest_bits_from(value: i64) -> Option<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&v| (8..=MAX_DIGEST_BITS).contains(&v) && v % 8 == 0)
}

/// Validate `value` with `check`, falling back to `default` when it is missing or invalid.
fn or_default<T: fmt::Display + Copy>(
    name: &'static str,
    value: Option<i64>,
    check: fn(i64) -> Option<T>,
    default: T,
) -> T {
    match value {
        None => default,
        Some(v) => check(v).unwrap_or_else(|| {
            log::warn!(
                "CubeHash parameter {} = {} is out of range, using default {}",
                name,
                v,
                default
            );
            default
        }),
    }
}

/// Validate `value` with `check`, reporting the parameter on failure.
fn or_invalid<T>(name: &'static str, value: i64, check: fn(i64) -> Option<T>) -> CubeHashResult<T> {
    check(value).ok_or(CubeHashError::InvalidParameter { name, value })
}

impl Params {
    /// Build a parameter set, replacing every missing or invalid value with its default.
    ///
    /// Each parameter is checked independently: an invalid `b` does not affect the supplied `r`.
    /// This never fails.
    pub fn configure(
        i: Option<i64>,
        r: Option<i64>,
        b: Option<i64>,
        f: Option<i64>,
        h: Option<i64>,
    ) -> Self {
        Self {
            init_rounds: or_default("i", i, rounds_from, DEFAULT_INIT_ROUNDS),
            rounds: or_default("r", r, rounds_from, DEFAULT_ROUNDS),
            block_bytes: or_default("b", b, block_bytes_from, DEFAULT_BLOCK_BYTES),
            final_rounds: or_default("f", f, rounds_from, DEFAULT_FINAL_ROUNDS),
            digest_bits: or_default("h", h, digest_bits_from, DEFAULT_DIGEST_BITS),
        }
    }

    /// Build a parameter set, rejecting the first invalid value.
    pub fn try_new(i: i64, r: i64, b: i64, f: i64, h: i64) -> CubeHashResult<Self> {
        Ok(Self {
            init_rounds: or_invalid("i", i, rounds_from)?,
            rounds: or_invalid("r", r, rounds_from)?,
            block_bytes: or_invalid("b", b, block_bytes_from)?,
            final_rounds: or_invalid("f", f, rounds_from)?,
            digest_bits: or_invalid("h", h, digest_bits_from)?,
        })
    }

    /// The canonical parameters truncated to a `digest_len`-byte digest.
    pub(crate) fn with_digest_len(digest_len: usize) -> Self {
        debug_assert!(digest_len > 0 && digest_len * 8 <= MAX_DIGEST_BITS);
        Self {
            digest_bits: digest_len * 8,
            ..Self::default()
        }
    }

    /// Number of rounds applied once after seeding the state.
    pub fn init_rounds(&self) -> u32 {
        self.init_rounds
    }

    /// Number of rounds applied after each absorbed block.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Number of message bytes absorbed per block.
    pub fn block_bytes(&self) -> usize {
        self.block_bytes
    }

    /// Number of rounds applied once at finalization.
    pub fn final_rounds(&self) -> u32 {
        self.final_rounds
    }

    /// Digest size in bits.
    pub fn digest_bits(&self) -> usize {
        self.digest_bits
    }

    /// Digest size in bytes.
    pub fn digest_len(&self) -> usize {
        self.digest_bits / 8
    }

    /// Length of the hexadecimal encoding of the digest.
    pub fn digest_hex_len(&self) -> usize {
        self.digest_bits / 4
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CubeHash{}+{}/{}+{}-{}",
            self.init_rounds, self.rounds, self.block_bytes, self.final_rounds, self.digest_bits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = Params::configure(None, None, None, None, None);
        assert_eq!(params, Params::default());
        assert_eq!(params.init_rounds(), 16);
        assert_eq!(params.rounds(), 16);
        assert_eq!(params.block_bytes(), 32);
        assert_eq!(params.final_rounds(), 32);
        assert_eq!(params.digest_bits(), 512);
        assert_eq!(params.digest_len(), 64);
        assert_eq!(params.digest_hex_len(), 128);
    }

    /// Invalid values are replaced one by one, leaving valid neighbours untouched.
    #[test]
    fn test_substitution_is_per_parameter() {
        let params = Params::configure(Some(-1), Some(8), Some(64), Some(10), Some(256));
        assert_eq!(params.init_rounds(), 16);
        assert_eq!(params.rounds(), 8);
        assert_eq!(params.block_bytes(), 64);
        assert_eq!(params.final_rounds(), 10);
        assert_eq!(params.digest_bits(), 256);

        let params = Params::configure(Some(1), Some(0), Some(129), Some(-5), Some(513));
        assert_eq!(params.init_rounds(), 1);
        assert_eq!(params.rounds(), 16);
        assert_eq!(params.block_bytes(), 32);
        assert_eq!(params.final_rounds(), 32);
        assert_eq!(params.digest_bits(), 512);
    }

    #[test]
    fn test_digest_bits_bounds() {
        for (h, expected) in [
            (0, 512),
            (4, 512),
            (8, 8),
            (12, 512),
            (160, 160),
            (512, 512),
            (520, 512),
        ] {
            assert_eq!(
                Params::configure(None, None, None, None, Some(h)).digest_bits(),
                expected
            );
        }
    }

    #[test]
    fn test_block_bytes_bounds() {
        for (b, expected) in [(0, 32), (1, 1), (33, 33), (128, 128), (129, 32)] {
            assert_eq!(
                Params::configure(None, None, Some(b), None, None).block_bytes(),
                expected
            );
        }
    }

    /// Values that do not fit in 32 bits are not silently truncated.
    #[test]
    fn test_rounds_overflow() {
        let params = Params::configure(Some(1 << 40), None, None, None, None);
        assert_eq!(params.init_rounds(), 16);
    }

    #[test]
    fn test_strict_constructor() {
        assert_eq!(
            Params::try_new(16, 16, 32, 32, 512).unwrap(),
            Params::default()
        );
        assert_eq!(
            Params::try_new(16, 16, 32, 32, 513),
            Err(CubeHashError::InvalidParameter {
                name: "h",
                value: 513
            })
        );
        assert_eq!(
            Params::try_new(0, 16, 200, 32, 512),
            Err(CubeHashError::InvalidParameter { name: "i", value: 0 })
        );
        assert_eq!(
            Params::try_new(16, 16, 200, 32, 512),
            Err(CubeHashError::InvalidParameter {
                name: "b",
                value: 200
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Params::default().to_string(), "CubeHash16+16/32+32-512");
        let params = Params::try_new(160, 16, 32, 160, 256).unwrap();
        assert_eq!(params.to_string(), "CubeHash160+16/32+160-256");
    }
}
