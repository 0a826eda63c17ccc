use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Empty, Order, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

/// Upper bound on the platform fee, 50%.
pub const MAX_FEE_BPS: u16 = 5_000;
pub const BPS_DENOM: u128 = 10_000;
pub const MAX_EXCLUSIONS: usize = 100;
pub const MAX_LABEL_LEN: usize = 128;

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
pub struct Config {
    /// Only identity allowed to call `EmergencyWithdraw`.
    pub admin: Addr,
    /// Receives the platform fee. `None` iff `fee_bps == 0`.
    pub fee_recipient: Option<Addr>,
    pub denom: String,
    pub fee_bps: u16,
    pub claim_rule: ClaimRule,
}

/// Which eligibility predicate a claim has to satisfy on top of the
/// creator and exclusion checks.
#[cw_serde]
pub enum ClaimRule {
    /// Creator and exclusion snapshot only.
    Exclusion,
    /// A kill proof naming the target as victim and the claimant as killer.
    KillProof,
}

// BOUNTY_ID: next id to hand out, starts at 0
pub const BOUNTY_ID: Item<u64> = Item::new("bounty_id");

// ESCROWED: sum of `amount` over every Open bounty
pub const ESCROWED: Item<Uint128> = Item::new("escrowed");

// BOUNTIES: key(bounty_id) -> Bounty
pub const BOUNTIES: Map<u64, Bounty> = Map::new("bounties");

// TARGET_INDEX: key(target_key, bounty_id) -> Empty
// Append-only. Ascending ids under a prefix give creation order.
pub const TARGET_INDEX: Map<(&str, u64), Empty> = Map::new("target_index");

// USED_PROOFS: key(event_id) -> bounty_id that consumed it
pub const USED_PROOFS: Map<&str, u64> = Map::new("used_proofs");

#[cw_serde]
pub enum Target {
    Address { address: String },
    Location { id: u64 },
}

impl Target {
    /// Returns the target with its address normalized by the host API, so
    /// that the same target always maps to the same index key.
    pub fn validate(&self, api: &dyn Api) -> Result<Target, ContractError> {
        match self {
            Target::Address { address } => {
                let addr = api
                    .addr_validate(address)
                    .map_err(|err| ContractError::InvalidTarget {
                        reason: err.to_string(),
                    })?;
                Ok(Target::Address {
                    address: addr.into_string(),
                })
            }
            Target::Location { id: 0 } => Err(ContractError::InvalidTarget {
                reason: "location id must be non-zero".to_string(),
            }),
            Target::Location { id } => Ok(Target::Location { id: *id }),
        }
    }

    pub fn storage_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Address { address } => write!(f, "addr:{}", address),
            Target::Location { id } => write!(f, "loc:{}", id),
        }
    }
}

#[cw_serde]
pub enum BountyStatus {
    Open,
    Claimed { by: Addr, at: Timestamp },
    Cancelled { at: Timestamp },
}

#[cw_serde]
pub struct Bounty {
    pub id: u64,
    pub creator: Addr,
    pub target: Target,
    /// Display name for the target, never part of its identity.
    pub label: Option<String>,
    /// Net payable amount, after the platform fee.
    pub amount: Uint128,
    pub fee: Uint128,
    pub created_at: Timestamp,
    pub status: BountyStatus,
    /// Sorted and de-duplicated at creation, never written again.
    pub excluded: Vec<Addr>,
}

impl Bounty {
    pub fn is_open(&self) -> bool {
        self.status == BountyStatus::Open
    }

    pub fn claimed_by(&self) -> Option<&Addr> {
        match &self.status {
            BountyStatus::Claimed { by, .. } => Some(by),
            _ => None,
        }
    }

    pub fn is_excluded(&self, addr: &Addr) -> bool {
        self.excluded.binary_search(addr).is_ok()
    }
}

pub fn next_bounty_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let bounty_id = BOUNTY_ID.load(storage)?;
    BOUNTY_ID.save(storage, &(bounty_id + 1))?;
    Ok(bounty_id)
}

/// Stores a new bounty and appends it to its target's index.
pub fn insert_bounty(storage: &mut dyn Storage, bounty: &Bounty) -> StdResult<()> {
    BOUNTIES.save(storage, bounty.id, bounty)?;
    let key = bounty.target.storage_key();
    TARGET_INDEX.save(storage, (key.as_str(), bounty.id), &Empty {})
}

pub fn load_bounty(storage: &dyn Storage, bounty_id: u64) -> Result<Bounty, ContractError> {
    BOUNTIES
        .may_load(storage, bounty_id)?
        .ok_or(ContractError::BountyNotFound { bounty_id })
}

pub fn bounty_ids_on_target(storage: &dyn Storage, target: &Target) -> StdResult<Vec<u64>> {
    let key = target.storage_key();
    TARGET_INDEX
        .prefix(key.as_str())
        .keys(storage, None, None, Order::Ascending)
        .collect()
}

pub fn lock_funds(storage: &mut dyn Storage, amount: Uint128) -> Result<Uint128, ContractError> {
    let escrowed = ESCROWED.load(storage)?.checked_add(amount)?;
    ESCROWED.save(storage, &escrowed)?;
    Ok(escrowed)
}

pub fn release_funds(storage: &mut dyn Storage, amount: Uint128) -> Result<Uint128, ContractError> {
    let escrowed = ESCROWED.load(storage)?.checked_sub(amount)?;
    ESCROWED.save(storage, &escrowed)?;
    Ok(escrowed)
}
