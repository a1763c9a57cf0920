use shared::{escrow, Asset, DepositTerms, Error, Escrow, LockParams, SwapState, SwapTerms};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

#[contract]
pub struct AtomicNftSwap;

#[contractimpl]
impl AtomicNftSwap {
    pub fn __constructor(
        env: Env,
        owner: Address,
        counterparty: Address,
        token: Address,
        id: u32,
        terms: Option<SwapTerms>,
    ) -> Result<(), Error> {
        escrow::install(&env, owner, counterparty, Asset::NonFungible(token, id), terms)
    }

    /// Transfers the token id from the owner into escrow custody. The owner
    /// must have approved the escrow contract on the token beforehand.
    pub fn deposit(env: Env, from: Address, terms: Option<DepositTerms>) -> Result<(), Error> {
        escrow::deposit(&env, from, terms)
    }

    pub fn confirm_swap(env: Env, caller: Address, secret: Bytes) -> Result<(), Error> {
        escrow::confirm(&env, caller, secret)
    }

    pub fn withdrawal(env: Env, caller: Address) -> Result<(), Error> {
        escrow::withdraw(&env, caller)
    }

    pub fn swap(env: Env) -> Escrow {
        escrow::installed(&env)
    }

    pub fn state(env: Env) -> SwapState {
        escrow::current_state(&env)
    }

    pub fn lock(env: Env) -> Option<LockParams> {
        escrow::lock_params(&env)
    }
}
