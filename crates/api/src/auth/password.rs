//! Argon2id password hashing and verification (the credential verifier).
//!
//! All password hashes use the Argon2id variant with a cryptographically
//! random salt generated via [`OsRng`]. The PHC string format is used for
//! storage so that algorithm parameters and salt are embedded in the hash
//! itself -- hashes written under older cost settings keep verifying after
//! the configuration changes.
//!
//! Hashing cost parameters are NOT process-wide state: they live in a
//! [`HashingConfig`] and the [`Hasher`] built from it is owned by the
//! application state.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Argon2id cost parameters.
#[derive(Debug, Clone)]
pub struct HashingConfig {
    /// Memory cost in KiB.
    pub m_cost_kib: u32,
    /// Number of iterations.
    pub t_cost: u32,
    /// Degree of parallelism.
    pub p_cost: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            m_cost_kib: Params::DEFAULT_M_COST,
            t_cost: Params::DEFAULT_T_COST,
            p_cost: Params::DEFAULT_P_COST,
        }
    }
}

impl HashingConfig {
    /// Load hashing parameters from environment variables.
    ///
    /// | Env Var            | Required | Default              |
    /// |--------------------|----------|----------------------|
    /// | `ARGON2_M_COST_KIB`| no       | argon2 crate default |
    /// | `ARGON2_T_COST`    | no       | argon2 crate default |
    /// | `ARGON2_P_COST`    | no       | argon2 crate default |
    ///
    /// # Panics
    ///
    /// Panics if a variable is set but is not a valid u32.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let m_cost_kib: u32 = std::env::var("ARGON2_M_COST_KIB")
            .unwrap_or_else(|_| defaults.m_cost_kib.to_string())
            .parse()
            .expect("ARGON2_M_COST_KIB must be a valid u32");

        let t_cost: u32 = std::env::var("ARGON2_T_COST")
            .unwrap_or_else(|_| defaults.t_cost.to_string())
            .parse()
            .expect("ARGON2_T_COST must be a valid u32");

        let p_cost: u32 = std::env::var("ARGON2_P_COST")
            .unwrap_or_else(|_| defaults.p_cost.to_string())
            .parse()
            .expect("ARGON2_P_COST must be a valid u32");

        Self {
            m_cost_kib,
            t_cost,
            p_cost,
        }
    }
}

/// Stateless password hasher/verifier holding its Argon2id instance.
#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
}

impl Hasher {
    /// Build a hasher from explicit cost parameters.
    ///
    /// Fails if the parameters are outside the ranges the argon2 crate
    /// accepts (e.g. zero iterations).
    pub fn new(config: &HashingConfig) -> Result<Self, argon2::Error> {
        let params = Params::new(config.m_cost_kib, config.t_cost, config.p_cost, None)?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Returns the PHC-formatted hash string (includes algorithm, params,
    /// salt, and hash). Two calls with the same plaintext produce different
    /// strings; only [`Hasher::verify`] relates them.
    pub fn hash(&self, password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored PHC-formatted hash.
    ///
    /// Returns `false` on any mismatch, including a malformed or empty
    /// `hash` string -- never an error, so callers cannot distinguish
    /// "wrong password" from "unparseable hash".
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Validate that a password meets minimum strength requirements.
///
/// Currently enforces a minimum character length. Returns `Ok(())` when the
/// password is acceptable, or `Err` with a human-readable explanation.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.len() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}
