//! Random string and identifier generation
//!
//! Two families of helpers live here:
//!
//! - non-cryptographic helpers that take an injected [`rand::Rng`], so callers
//!   (and tests) decide whether the source is seeded or thread-local;
//! - cryptographic helpers that read the operating system random source.

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

use crate::error::{Result, SheetgenError};
use crate::utils::common::unix_millis;

const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Characters used by the alphanumeric generators (62 symbols)
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Characters used for slug suffixes
const LOWER_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default random part length of [`short_unique_id`]
pub const DEFAULT_SHORT_RANDOM_LENGTH: usize = 6;

/// Default prefix of [`unique_slug`]
pub const DEFAULT_SLUG_PREFIX: &str = "item";

/// Default random part length of [`unique_slug`]
pub const DEFAULT_SLUG_RANDOM_LENGTH: usize = 8;

/// Character classes enabled for [`random_string`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    /// Include uppercase letters (A-Z)
    pub upper: bool,
    /// Include lowercase letters (a-z)
    pub lower: bool,
    /// Include digits (0-9)
    pub digits: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
        }
    }
}

impl CharClasses {
    fn pool(&self) -> String {
        let mut pool = String::new();
        if self.upper {
            pool.push_str(UPPER_LETTERS);
        }
        if self.lower {
            pool.push_str(LOWER_LETTERS);
        }
        if self.digits {
            pool.push_str(DIGITS);
        }
        pool
    }
}

fn sample_bytes<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

fn os_random_bytes(count: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; count];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| SheetgenError::RandomSource(e.to_string()))?;
    Ok(bytes)
}

/// Generate a random string from the enabled character classes
///
/// Characters are drawn uniformly from the concatenation of the enabled
/// classes. Fails with `InvalidArgument` when every class is disabled.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use sheetgen::utils::{random_string, CharClasses};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let digits = CharClasses { upper: false, lower: false, digits: true };
/// let s = random_string(&mut rng, 12, &digits).unwrap();
/// assert_eq!(s.len(), 12);
/// assert!(s.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, length: usize, classes: &CharClasses) -> Result<String> {
    let pool = classes.pool();
    if pool.is_empty() {
        return Err(SheetgenError::invalid(
            "at least one character class must be enabled",
        ));
    }
    Ok(sample_bytes(rng, pool.as_bytes(), length))
}

/// Random string over `A-Z a-z 0-9` that cannot fail
pub fn random_alphanumeric<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    sample_bytes(rng, ALPHANUMERIC, length)
}

/// Generate an alphanumeric string from the OS random source
///
/// Each random byte is reduced modulo 62 onto the alphanumeric alphabet.
/// Since 256 is not a multiple of 62 the first eight symbols (`A`..`H`) are
/// slightly more likely than the rest. The skew is kept as is.
pub fn secure_random_string(length: usize) -> Result<String> {
    let bytes = os_random_bytes(length)?;
    Ok(bytes
        .iter()
        .map(|b| ALPHANUMERIC[*b as usize % ALPHANUMERIC.len()] as char)
        .collect())
}

/// Random UUID v4 in canonical `8-4-4-4-12` lowercase form
pub fn unique_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// `<unix_millis>_<secure random alphanumeric>`
pub fn short_unique_id(random_length: usize) -> Result<String> {
    Ok(format!(
        "{}_{}",
        unix_millis(),
        secure_random_string(random_length)?
    ))
}

/// `<prefix>-<unix_millis>-<lowercase alphanumeric>`
pub fn unique_slug<R: Rng + ?Sized>(rng: &mut R, prefix: &str, random_length: usize) -> String {
    format!(
        "{}-{}-{}",
        prefix,
        unix_millis(),
        sample_bytes(rng, LOWER_ALPHANUMERIC, random_length)
    )
}

/// Lowercase hex string of exactly `length` characters
///
/// `length` must be even since every random byte yields two characters.
pub fn hex_string(length: usize) -> Result<String> {
    if length % 2 != 0 {
        return Err(SheetgenError::invalid(format!(
            "hex string length must be even, got {}",
            length
        )));
    }
    Ok(hex::encode(os_random_bytes(length / 2)?))
}

/// Base64 alphabet string of exactly `length` characters
///
/// Encodes `ceil(length * 3 / 4)` random bytes and truncates the encoding, so
/// the final character may come from a partial base64 group.
pub fn base64_string(length: usize) -> Result<String> {
    let bytes = os_random_bytes((length * 3).div_ceil(4))?;
    let mut encoded = STANDARD_NO_PAD.encode(bytes);
    encoded.truncate(length);
    Ok(encoded)
}

/// Random string drawn uniformly from the characters of `charset`
pub fn custom_random_string<R: Rng + ?Sized>(rng: &mut R, length: usize, charset: &str) -> Result<String> {
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return Err(SheetgenError::invalid("charset must not be empty"));
    }
    Ok((0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect())
}

/// Record identifier such as `prod_3F2A...` (prefix, underscore, 32 hex chars)
pub fn prefixed_id(prefix: &str) -> String {
    format!(
        "{}_{}",
        prefix,
        uuid::Uuid::new_v4().simple().to_string().to_uppercase()
    )
}
