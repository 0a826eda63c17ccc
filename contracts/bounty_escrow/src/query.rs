use cosmwasm_std::{Deps, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::eligibility;
use crate::fee::{split_deposit, FeeSplit};
use crate::msg::{
    BountiesResponse, BountyIdsResponse, CanClaimResponse, ConfigResponse, ProofUsedResponse,
    TotalValueResponse,
};
use crate::state::{
    bounty_ids_on_target, Bounty, Target, BOUNTIES, BOUNTY_ID, CONFIG, ESCROWED, USED_PROOFS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        fee_recipient: config.fee_recipient,
        denom: config.denom,
        fee_bps: config.fee_bps,
        claim_rule: config.claim_rule,
        next_bounty_id: BOUNTY_ID.load(deps.storage)?,
    })
}

pub fn bounty(deps: Deps, bounty_id: u64) -> StdResult<Bounty> {
    BOUNTIES.load(deps.storage, bounty_id)
}

pub fn list_bounties(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<BountiesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let bounties = BOUNTIES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, bounty)| bounty))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(BountiesResponse { bounties })
}

fn normalize(deps: Deps, target: &Target) -> StdResult<Target> {
    target
        .validate(deps.api)
        .map_err(|err| StdError::generic_err(err.to_string()))
}

fn open_bounties_on_target(deps: Deps, target: &Target) -> StdResult<Vec<Bounty>> {
    let target = normalize(deps, target)?;
    let mut open = vec![];
    for bounty_id in bounty_ids_on_target(deps.storage, &target)? {
        let bounty = BOUNTIES.load(deps.storage, bounty_id)?;
        if bounty.is_open() {
            open.push(bounty);
        }
    }
    Ok(open)
}

pub fn bounties_on_target(deps: Deps, target: Target) -> StdResult<BountyIdsResponse> {
    let target = normalize(deps, &target)?;
    Ok(BountyIdsResponse {
        ids: bounty_ids_on_target(deps.storage, &target)?,
    })
}

pub fn active_bounties_on_target(deps: Deps, target: Target) -> StdResult<BountyIdsResponse> {
    let ids = open_bounties_on_target(deps, &target)?
        .into_iter()
        .map(|bounty| bounty.id)
        .collect();
    Ok(BountyIdsResponse { ids })
}

pub fn total_active_value(deps: Deps, target: Target) -> StdResult<TotalValueResponse> {
    let mut total = Uint128::zero();
    for bounty in open_bounties_on_target(deps, &target)? {
        total = total.checked_add(bounty.amount)?;
    }
    Ok(TotalValueResponse { total })
}

pub fn can_claim(deps: Deps, bounty_id: u64, candidate: String) -> StdResult<CanClaimResponse> {
    let candidate = deps.api.addr_validate(&candidate)?;
    let eligible = match BOUNTIES.may_load(deps.storage, bounty_id)? {
        Some(bounty) => eligibility::can_claim(&bounty, &candidate),
        None => false,
    };
    Ok(CanClaimResponse { eligible })
}

pub fn proof_used(deps: Deps, event_id: String) -> StdResult<ProofUsedResponse> {
    Ok(ProofUsedResponse {
        bounty_id: USED_PROOFS.may_load(deps.storage, event_id.as_str())?,
    })
}

pub fn split_preview(deps: Deps, gross: Uint128) -> StdResult<FeeSplit> {
    let config = CONFIG.load(deps.storage)?;
    split_deposit(gross, config.fee_bps).map_err(|err| StdError::generic_err(err.to_string()))
}

pub fn escrowed(deps: Deps) -> StdResult<TotalValueResponse> {
    Ok(TotalValueResponse {
        total: ESCROWED.load(deps.storage)?,
    })
}
