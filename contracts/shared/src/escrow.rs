use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Bytes, BytesN, Env};

use crate::asset::{self, Asset};
use crate::hashlock;

// Storage keys
#[contracttype]
pub enum DataKey {
    Escrow,
    State,
    Lock,
}

// Errors
//
// Soroban surfaces numeric codes; the revert strings an EVM counterpart
// escrow uses for the same condition are kept on each variant so operators
// can map failures between the two sides.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// "UNAUTHORIZED"
    Unauthorized = 1,
    /// "Only Party A can deposit"
    OnlyPartyACanDeposit = 2,
    /// "Incorrect deposit amount"
    IncorrectDepositAmount = 3,
    /// "Swap not yet expired"
    SwapNotYetExpired = 4,
    /// "Party B already confirmed the deposit"
    AlreadyConfirmed = 5,
    AlreadyDeposited = 6,
    AlreadyWithdrawn = 7,
    NotDeposited = 8,
    InvalidSecret = 9,
    DeadlineNotInFuture = 10,
    LockAlreadySet = 11,
    LockNotSet = 12,
    BalanceCheckFailed = 13,
    InvalidAmount = 14,
    DeadlineOverflow = 15,
}

/// Escrow lifecycle. `Deposited` is entered exactly once; `Confirmed` and
/// `Withdrawn` are terminal and mutually exclusive.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SwapState {
    Uninitialized,
    Deposited,
    Confirmed,
    Withdrawn,
}

/// The two designated counterparties and the asset between them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Escrow {
    pub owner: Address,
    pub counterparty: Address,
    pub asset: Asset,
}

/// Refund deadline, resolved to an absolute ledger timestamp at install.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Deadline {
    /// Absolute ledger timestamp.
    At(u64),
    /// Seconds from the installing ledger's timestamp.
    In(u64),
}

/// Swap terms fixed at construction (Flow A).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapTerms {
    pub hash_lock: BytesN<32>,
    pub deadline: Deadline,
}

/// Swap terms supplied at deposit time (Flow B). `initiator` marks the
/// party that picked the secret: only that side must justify the deadline,
/// the follower copies whatever the initiator's escrow already published.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositTerms {
    pub hash_lock: BytesN<32>,
    pub deadline: u64,
    pub initiator: bool,
}

/// Resolved commitment and deadline, set exactly once.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockParams {
    pub hash_lock: BytesN<32>,
    pub deadline: u64,
}

/// Writes the escrow configuration at construction time.
///
/// `terms` present selects Flow A (hash-lock and deadline fixed here);
/// absent, the owner supplies them with the deposit (Flow B). Amounts must
/// be positive and a relative deadline must fit the ledger clock; both are
/// rejected here rather than at deposit time.
pub fn install(
    env: &Env,
    owner: Address,
    counterparty: Address,
    asset: Asset,
    terms: Option<SwapTerms>,
) -> Result<(), Error> {
    match &asset {
        Asset::Native(_, amount) | Asset::Fungible(_, amount) => {
            if *amount <= 0 {
                return Err(Error::InvalidAmount);
            }
        }
        Asset::MultiToken(_, _, value) => {
            if *value <= 0 {
                return Err(Error::InvalidAmount);
            }
        }
        Asset::NonFungible(_, _) => {}
    }
    let escrow = Escrow {
        owner,
        counterparty,
        asset,
    };
    env.storage().instance().set(&DataKey::Escrow, &escrow);
    env.storage().instance().set(&DataKey::State, &SwapState::Uninitialized);
    if let Some(terms) = terms {
        let deadline = match terms.deadline {
            Deadline::At(at) => at,
            Deadline::In(seconds) => env
                .ledger()
                .timestamp()
                .checked_add(seconds)
                .ok_or(Error::DeadlineOverflow)?,
        };
        let lock = LockParams {
            hash_lock: terms.hash_lock,
            deadline,
        };
        env.storage().instance().set(&DataKey::Lock, &lock);
    }
    Ok(())
}

pub fn installed(env: &Env) -> Escrow {
    env.storage()
        .instance()
        .get(&DataKey::Escrow)
        .unwrap_or_else(|| panic!("escrow not installed"))
}

pub fn current_state(env: &Env) -> SwapState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or(SwapState::Uninitialized)
}

pub fn lock_params(env: &Env) -> Option<LockParams> {
    env.storage().instance().get(&DataKey::Lock)
}

/// One-time transition `Uninitialized -> Deposited`.
///
/// Pulls the asset from the owner into escrow custody. Flow B resolves the
/// lock parameters here; the initiator side must supply a deadline that is
/// still in the future.
pub fn deposit(env: &Env, from: Address, terms: Option<DepositTerms>) -> Result<(), Error> {
    let escrow = installed(env);
    from.require_auth();
    if from != escrow.owner {
        return Err(Error::OnlyPartyACanDeposit);
    }
    if current_state(env) != SwapState::Uninitialized {
        return Err(Error::AlreadyDeposited);
    }
    match (lock_params(env), terms) {
        (Some(_), None) => {}
        (Some(_), Some(_)) => return Err(Error::LockAlreadySet),
        (None, Some(terms)) => {
            if terms.initiator && terms.deadline <= env.ledger().timestamp() {
                return Err(Error::DeadlineNotInFuture);
            }
            let lock = LockParams {
                hash_lock: terms.hash_lock,
                deadline: terms.deadline,
            };
            env.storage().instance().set(&DataKey::Lock, &lock);
        }
        (None, None) => return Err(Error::LockNotSet),
    }
    asset::lock(env, &escrow.asset, &from)?;
    env.storage().instance().set(&DataKey::State, &SwapState::Deposited);
    env.events()
        .publish((symbol_short!("Deposited"), escrow.owner), escrow.asset);
    Ok(())
}

/// Terminal transition `Deposited -> Confirmed`.
///
/// Releases the asset to the counterparty and publishes the revealed secret
/// in the event log, which is the only cross-chain signal the other party's
/// watcher consumes. There is deliberately no deadline check here: a
/// deposited, not-yet-withdrawn escrow stays claimable, and the race with
/// `withdraw` is settled by whichever transaction commits first.
pub fn confirm(env: &Env, caller: Address, secret: Bytes) -> Result<(), Error> {
    let escrow = installed(env);
    caller.require_auth();
    if caller != escrow.counterparty {
        return Err(Error::Unauthorized);
    }
    match current_state(env) {
        SwapState::Deposited => {}
        SwapState::Uninitialized => return Err(Error::NotDeposited),
        SwapState::Confirmed => return Err(Error::AlreadyConfirmed),
        SwapState::Withdrawn => return Err(Error::AlreadyWithdrawn),
    }
    let lock = lock_params(env).ok_or(Error::LockNotSet)?;
    hashlock::verify(env, &secret, &lock.hash_lock)?;
    // State committed before the external transfer.
    env.storage().instance().set(&DataKey::State, &SwapState::Confirmed);
    asset::release(env, &escrow.asset, &escrow.counterparty)?;
    env.events()
        .publish((symbol_short!("Confirmed"), escrow.counterparty), secret);
    Ok(())
}

/// Terminal transition `Deposited -> Withdrawn`, available to the owner
/// once the deadline has passed and the counterparty has not confirmed.
pub fn withdraw(env: &Env, caller: Address) -> Result<(), Error> {
    let escrow = installed(env);
    caller.require_auth();
    if caller != escrow.owner {
        return Err(Error::Unauthorized);
    }
    match current_state(env) {
        SwapState::Deposited => {}
        SwapState::Uninitialized => return Err(Error::NotDeposited),
        SwapState::Confirmed => return Err(Error::AlreadyConfirmed),
        SwapState::Withdrawn => return Err(Error::AlreadyWithdrawn),
    }
    let lock = lock_params(env).ok_or(Error::LockNotSet)?;
    if env.ledger().timestamp() < lock.deadline {
        return Err(Error::SwapNotYetExpired);
    }
    // State committed before the external transfer.
    env.storage().instance().set(&DataKey::State, &SwapState::Withdrawn);
    asset::release(env, &escrow.asset, &escrow.owner)?;
    env.events()
        .publish((symbol_short!("Withdrawn"), escrow.owner), escrow.asset);
    Ok(())
}
