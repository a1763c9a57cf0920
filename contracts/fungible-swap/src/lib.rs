#![no_std]

// Fungible Token Swap Contract
// Escrows a fungible token amount for one side of a cross-chain atomic swap

mod fungibleswap;

// Re-export the contract
pub use fungibleswap::AtomicFungibleSwap;
