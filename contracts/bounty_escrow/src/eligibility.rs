use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::msg::KillProof;
use crate::state::{Bounty, Target, USED_PROOFS};

/// Checks that `candidate` may collect `bounty`: it must still be open, the
/// candidate must not be its creator and must not appear in the exclusion
/// snapshot taken at creation.
pub fn check_claim(bounty: &Bounty, candidate: &Addr) -> Result<(), ContractError> {
    if !bounty.is_open() {
        return Err(ContractError::BountyNotOpen {
            bounty_id: bounty.id,
        });
    }
    if *candidate == bounty.creator {
        return Err(ContractError::SelfClaim {});
    }
    if bounty.is_excluded(candidate) {
        return Err(ContractError::Excluded {});
    }
    Ok(())
}

pub fn can_claim(bounty: &Bounty, candidate: &Addr) -> bool {
    check_claim(bounty, candidate).is_ok()
}

/// Checks a kill proof against the bounty and the registry of consumed
/// event ids. Does not record the event id; see [`consume_proof`].
pub fn check_kill_proof(
    storage: &dyn Storage,
    bounty: &Bounty,
    claimant: &Addr,
    proof: &KillProof,
) -> Result<(), ContractError> {
    match &bounty.target {
        Target::Address { address } if *address == proof.victim => {}
        _ => return Err(ContractError::VictimMismatch {}),
    }
    if proof.killer != claimant.as_str() {
        return Err(ContractError::KillerMismatch {});
    }
    if proof.occurred_at <= bounty.created_at {
        return Err(ContractError::StaleProof {});
    }
    if proof.event_id.is_empty() {
        return Err(ContractError::EmptyEventId {});
    }
    if let Some(bounty_id) = USED_PROOFS.may_load(storage, proof.event_id.as_str())? {
        return Err(ContractError::ProofReused {
            event_id: proof.event_id.clone(),
            bounty_id,
        });
    }
    Ok(())
}

/// Marks the proof's event id as spent by `bounty_id`.
pub fn consume_proof(
    storage: &mut dyn Storage,
    proof: &KillProof,
    bounty_id: u64,
) -> Result<(), ContractError> {
    USED_PROOFS.save(storage, proof.event_id.as_str(), &bounty_id)?;
    Ok(())
}
