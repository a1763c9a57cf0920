#![no_std]

// Native Value Swap Contract
// Escrows the chain's native asset for one side of a cross-chain atomic swap

mod nativeswap;

// Re-export the contract
pub use nativeswap::AtomicNativeSwap;
