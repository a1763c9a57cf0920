#![no_std]

// Non-Fungible Token Swap Contract
// Escrows a single NFT for one side of a cross-chain atomic swap

mod nftswap;

// Re-export the contract
pub use nftswap::AtomicNftSwap;
