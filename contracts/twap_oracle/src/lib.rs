//! TWAP Oracle Contract
//!
//! Derives a manipulation-resistant time-weighted average price from an AMM
//! pool's cumulative price counter. The oracle caches the last observation it
//! read; each `update` divides the counter delta by the elapsed time and
//! replaces the cache. The TWAP value itself is derived on demand and never
//! stored as ground truth.

#![no_std]

mod errors;
pub mod types;

use errors::*;
use types::{DataKey, PriceObservation};

use soroban_sdk::{contract, contractclient, contractimpl, Address, Env, Symbol};


// ─── Pool collaborator interface ───────────────────────────────────────────

/// Narrow view of the AMM pool: only its cumulative price counter is read.
#[contractclient(name = "PoolClient")]
pub trait PoolInterface {
    /// Current cumulative price counter and the timestamp it was taken at.
    fn cumulative_price(e: Env) -> PriceObservation;
}

// ─── Helpers ───────────────────────────────────────────────────────────────

fn get_pool(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Pool)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct TwapOracle;

#[contractimpl]
impl TwapOracle {
    /// One-time initialization. Stores the pool address and seeds the
    /// observation cache with the pool's current reading; a TWAP can only be
    /// computed against a prior observation.
    pub fn initialize(e: Env, pool: Address) {
        if e.storage().instance().has(&DataKey::Pool) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        let seed = PoolClient::new(&e, &pool).cumulative_price();
        e.storage().instance().set(&DataKey::Pool, &pool);
        e.storage()
            .instance()
            .set(&DataKey::LastObservation, &seed);
    }

    /// Compute the TWAP over the window since the last cached observation,
    /// then replace the cache with the pool's current reading.
    ///
    /// Panics "insufficient price history" if no time has elapsed since the
    /// previous observation. Tolerates the pool's cumulative counter wrapping
    /// around its modulus; the result is always non-negative.
    pub fn update(e: Env) -> i128 {
        let pool = get_pool(&e);
        let prev: PriceObservation = e
            .storage()
            .instance()
            .get(&DataKey::LastObservation)
            .unwrap_or_else(|| panic!("{}", ERR_NO_HISTORY));

        let now = PoolClient::new(&e, &pool).cumulative_price();
        let elapsed = now
            .timestamp
            .checked_sub(prev.timestamp)
            .unwrap_or_else(|| panic!("{}", ERR_NO_HISTORY));
        if elapsed == 0 {
            panic!("{}", ERR_NO_HISTORY);
        }

        // Modular delta: a wrapped counter still yields the true accumulation.
        let delta = now.cumulative.wrapping_sub(prev.cumulative);
        let price: i128 = (delta / elapsed as u128)
            .try_into()
            .unwrap_or_else(|_| panic!("{}", ERR_PRICE_OVERFLOW));

        e.storage().instance().set(&DataKey::LastObservation, &now);

        e.events()
            .publish((Symbol::new(&e, "twap_updated"),), (price, elapsed));

        price
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// The last cached observation.
    pub fn last_observation(e: Env) -> PriceObservation {
        e.storage()
            .instance()
            .get(&DataKey::LastObservation)
            .unwrap_or_else(|| panic!("{}", ERR_NO_HISTORY))
    }

    /// The configured pool address.
    pub fn pool(e: Env) -> Address {
        get_pool(&e)
    }
}
