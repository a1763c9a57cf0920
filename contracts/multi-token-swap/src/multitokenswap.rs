use shared::{escrow, Asset, DepositTerms, Error, Escrow, LockParams, SwapState, SwapTerms};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

#[contract]
pub struct AtomicMultiTokenSwap;

#[contractimpl]
impl AtomicMultiTokenSwap {
    /// `value` units of token `id` are escrowed as one batch.
    pub fn __constructor(
        env: Env,
        owner: Address,
        counterparty: Address,
        token: Address,
        id: u32,
        value: i128,
        terms: Option<SwapTerms>,
    ) -> Result<(), Error> {
        escrow::install(&env, owner, counterparty, Asset::MultiToken(token, id, value), terms)
    }

    /// Transfers the batch from the owner into escrow custody. The owner
    /// must have granted the escrow contract blanket operator approval on
    /// the token beforehand.
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
