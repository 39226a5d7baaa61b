use super::{ValidationFailure, ValidationResult};
use argon2::{Algorithm, Argon2, Params, Version};
use once_cell::sync::Lazy;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHasher, SaltString};
use regex::Regex;

const PASSWORD_RULES: [&str; 5] = [
    "has 10 characters or more",
    "has less than 72 bytes",
    "has a lowercase letter",
    "has an uppercase letter",
    "has a digit or special character",
];
const MIN_LENGTH: usize = 0;
const MAX_BYTES: usize = 1;
const LOWERCASE: usize = 2;
const UPPERCASE: usize = 3;
const OTHER: usize = 4;

const MIN_CHARACTERS: usize = 10;
const BYTE_CEILING: usize = 72;

// General categories, so letters that are merely lowercase-like (ª, ⅰ, ⓐ)
// count as special characters.
static LOWERCASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Ll}").unwrap());
static UPPERCASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Lu}").unwrap());
static OTHER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{Ll}\p{Lu}]").unwrap());

/// Salted Argon2id password hasher producing PHC strings.
///
pub struct Hasher {
    argon: Argon2<'static>,
}

impl Hasher {
    /// Return a hasher with the given cost parameters.
    ///
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;
        Ok(Hasher {
            argon: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash the cleartext with a fresh random salt.
    ///
    pub fn hash(&self, cleartext: &str) -> Result<String, password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(self
            .argon
            .hash_password(cleartext.as_bytes(), &salt)?
            .to_string())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Hasher {
            argon: Argon2::default(),
        }
    }
}

/// Validate a candidate password, returning its hash.
///
/// Every rule is evaluated and hashing is attempted whatever the outcome; a
/// hashing error marks the byte ceiling rule as failed.
///
pub fn validate_password(cleartext: &str, hasher: &Hasher) -> Result<String, ValidationFailure> {
    let mut result = ValidationResult::new(&PASSWORD_RULES);

    result.set_failed(MIN_LENGTH, cleartext.chars().count() < MIN_CHARACTERS);
    result.set_failed(MAX_BYTES, cleartext.len() >= BYTE_CEILING);

    let hash = hasher.hash(cleartext);
    if hash.is_err() {
        result.set_failed(MAX_BYTES, true);
    }

    result.set_failed(LOWERCASE, !LOWERCASE_RE.is_match(cleartext));
    result.set_failed(UPPERCASE, !UPPERCASE_RE.is_match(cleartext));
    result.set_failed(OTHER, !OTHER_RE.is_match(cleartext));

    match hash {
        Ok(hash) => result.into_result(hash),
        Err(_) => Err(ValidationFailure(result)),
    }
}
