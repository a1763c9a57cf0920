use shared::{escrow, Asset, DepositTerms, Error, Escrow, LockParams, SwapState, SwapTerms};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

#[contract]
pub struct AtomicFungibleSwap;

#[contractimpl]
impl AtomicFungibleSwap {
    pub fn __constructor(
        env: Env,
        owner: Address,
        counterparty: Address,
        token: Address,
        amount: i128,
        terms: Option<SwapTerms>,
    ) -> Result<(), Error> {
        escrow::install(&env, owner, counterparty, Asset::Fungible(token, amount), terms)
    }

    /// Pulls the configured amount from the owner through a pre-granted
    /// allowance and verifies the escrow's balance grew by exactly that
    /// amount.
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
