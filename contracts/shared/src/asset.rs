use soroban_sdk::{contractclient, contracttype, token, Address, Env};

use crate::escrow::Error;

/// The escrowed asset, tagged by transfer capability.
///
/// One state machine, four transfer semantics: the lifecycle code never
/// matches on this enum, only `lock` and `release` do.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    /// Native value via the chain's Stellar Asset Contract: `(token, amount)`.
    Native(Address, i128),
    /// Fungible token pulled through a pre-granted allowance: `(token, amount)`.
    Fungible(Address, i128),
    /// A single non-fungible token: `(token, id)`.
    NonFungible(Address, u32),
    /// A semi-fungible batch: `(token, id, value)`.
    MultiToken(Address, u32, i128),
}

/// Interface consumed on non-fungible token contracts.
///
/// `transfer_from` requires a prior per-token or blanket approval granted
/// to the escrow contract.
#[contractclient(name = "NonFungibleClient")]
pub trait NonFungibleToken {
    fn transfer(env: Env, from: Address, to: Address, id: u32);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, id: u32);
}

/// Interface consumed on multi-token (semi-fungible) contracts.
///
/// `transfer_from` requires a blanket operator approval for the escrow
/// contract.
#[contractclient(name = "MultiTokenClient")]
pub trait MultiToken {
    fn transfer(env: Env, from: Address, to: Address, id: u32, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, id: u32, amount: i128);
}

/// Moves the asset from `from` into escrow custody.
pub fn lock(env: &Env, asset: &Asset, from: &Address) -> Result<(), Error> {
    let escrow = env.current_contract_address();
    match asset {
        Asset::Native(token, amount) => {
            // Direct transfer; authorization rides the owner's call tree,
            // no allowance step.
            token::Client::new(env, token).transfer(from, &escrow, amount);
        }
        Asset::Fungible(token, amount) => {
            let client = token::Client::new(env, token);
            let before = client.balance(&escrow);
            client.transfer_from(&escrow, from, &escrow, amount);
            // Non-standard tokens may burn a fee or silently short the
            // transfer; the escrow must end up with exactly the amount.
            if client.balance(&escrow) - before != *amount {
                return Err(Error::BalanceCheckFailed);
            }
        }
        Asset::NonFungible(token, id) => {
            NonFungibleClient::new(env, token).transfer_from(&escrow, from, &escrow, id);
        }
        Asset::MultiToken(token, id, value) => {
            MultiTokenClient::new(env, token).transfer_from(&escrow, from, &escrow, id, value);
        }
    }
    Ok(())
}

/// Moves the asset from escrow custody to `to`.
pub fn release(env: &Env, asset: &Asset, to: &Address) -> Result<(), Error> {
    let escrow = env.current_contract_address();
    match asset {
        Asset::Native(token, amount) | Asset::Fungible(token, amount) => {
            token::Client::new(env, token).transfer(&escrow, to, amount);
        }
        Asset::NonFungible(token, id) => {
            NonFungibleClient::new(env, token).transfer(&escrow, to, id);
        }
        Asset::MultiToken(token, id, value) => {
            MultiTokenClient::new(env, token).transfer(&escrow, to, id, value);
        }
    }
    Ok(())
}
