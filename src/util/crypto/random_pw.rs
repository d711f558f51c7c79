use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::errors::code_error::{CodeError, CoreResult, code_err};

const CHARSET_LEN: usize = 76;
const RANDOM_PW_CHARSET: &[u8; CHARSET_LEN] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

const PASSWORD_LENGTH: usize = 12;

// Largest multiple of CHARSET_LEN that fits in a byte; bytes at or above this
// would skew the modulo toward the start of the charset and must be redrawn.
const REJECTION_LIMIT: u16 = (256 / CHARSET_LEN as u16) * CHARSET_LEN as u16;

/// Generates a 12-character one-time password for a new account, drawn
/// uniformly from the fixed charset using OS randomness.
///
/// Fails with [`CodeError::ENTROPY_SOURCE_UNAVAILABLE`] if the OS cannot
/// supply random bytes; there is no fallback source.
pub fn generate_secure_password() -> CoreResult<String> {
    sample_password(&mut OsRng)
}

fn sample_password<R: TryRngCore>(rng: &mut R) -> CoreResult<String> {
    let mut password = String::with_capacity(PASSWORD_LENGTH);
    let mut buf = [0u8; 64];

    while password.len() < PASSWORD_LENGTH {
        rng.try_fill_bytes(&mut buf).map_err(|e| {
            code_err(
                CodeError::ENTROPY_SOURCE_UNAVAILABLE,
                anyhow::anyhow!(e.to_string()),
            )
        })?;

        for &byte in buf.iter() {
            if byte as u16 >= REJECTION_LIMIT {
                continue;
            }
            password.push(RANDOM_PW_CHARSET[byte as usize % CHARSET_LEN] as char);
            if password.len() == PASSWORD_LENGTH {
                break;
            }
        }
    }

    Ok(password)
}
