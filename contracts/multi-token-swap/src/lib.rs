#![no_std]

// Multi-Token Swap Contract
// Escrows a semi-fungible token batch for one side of a cross-chain atomic swap

mod multitokenswap;

// Re-export the contract
pub use multitokenswap::AtomicMultiTokenSwap;
