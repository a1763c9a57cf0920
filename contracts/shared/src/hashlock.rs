use soroban_sdk::{Bytes, BytesN, Env};

use crate::escrow::Error;

/// Computes the hash-lock commitment for a secret.
///
/// keccak256 over the secret's raw bytes. Both escrows of a swap must use
/// this same function regardless of which chain they live on; the reveal on
/// one side is only useful if it opens the other.
pub fn commitment(env: &Env, secret: &Bytes) -> BytesN<32> {
    env.crypto().keccak256(secret).into()
}

/// Checks a revealed secret against a stored hash-lock.
pub fn verify(env: &Env, secret: &Bytes, hash_lock: &BytesN<32>) -> Result<(), Error> {
    if commitment(env, secret) != *hash_lock {
        return Err(Error::InvalidSecret);
    }
    Ok(())
}
