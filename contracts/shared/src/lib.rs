#![no_std]

// Shared library for the HTLC atomic swap contracts
// Contains the hash-lock primitive, the ownership-guarded escrow state
// machine, and the asset adapter dispatch used by all four swap contracts

pub mod asset;
pub mod escrow;
pub mod hashlock;

// Re-export commonly used types for easier imports
pub use asset::{Asset, MultiTokenClient, NonFungibleClient};
pub use escrow::{Deadline, DepositTerms, Error, Escrow, LockParams, SwapState, SwapTerms};
