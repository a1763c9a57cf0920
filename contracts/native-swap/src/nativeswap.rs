use shared::{escrow, Asset, DepositTerms, Error, Escrow, LockParams, SwapState, SwapTerms};
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

#[contract]
pub struct AtomicNativeSwap;

#[contractimpl]
impl AtomicNativeSwap {
    /// `token` is the Stellar Asset Contract address of the chain's native
    /// asset. Passing `terms` fixes the hash-lock and deadline at
    /// construction (Flow A); omitting them defers both to `deposit`
    /// (Flow B).
    pub fn __constructor(
        env: Env,
        owner: Address,
        counterparty: Address,
        token: Address,
        amount: i128,
        terms: Option<SwapTerms>,
    ) -> Result<(), Error> {
        escrow::install(&env, owner, counterparty, Asset::Native(token, amount), terms)
    }

    /// Locks the owner's native value. `amount` is the value attached to
    /// the call and must equal the amount fixed at construction.
    pub fn deposit(
        env: Env,
        from: Address,
        amount: i128,
        terms: Option<DepositTerms>,
    ) -> Result<(), Error> {
        let configured = escrow::installed(&env);
        if from != configured.owner {
            return Err(Error::OnlyPartyACanDeposit);
        }
        if let Asset::Native(_, expected) = &configured.asset {
            if amount != *expected {
                return Err(Error::IncorrectDepositAmount);
            }
        }
        escrow::deposit(&env, from, terms)
    }

    /// Releases the locked value to the counterparty in exchange for the
    /// secret, which is published in the contract's event log.
    pub fn confirm_swap(env: Env, caller: Address, secret: Bytes) -> Result<(), Error> {
        escrow::confirm(&env, caller, secret)
    }

    /// Refunds the owner once the deadline has passed without confirmation.
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
