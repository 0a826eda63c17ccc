use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, Event, MessageInfo,
    Response, StdResult, Uint128,
};

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::eligibility::{check_claim, check_kill_proof, consume_proof};
use crate::error::ContractError;
use crate::fee::split_deposit;
use crate::msg::{ExecuteMsg, InstantiateMsg, KillProof, QueryMsg};
use crate::query;
use crate::state::{
    insert_bounty, load_bounty, lock_funds, next_bounty_id, release_funds, Bounty, BountyStatus,
    ClaimRule, Config, Target, BOUNTIES, BOUNTY_ID, CONFIG, ESCROWED, MAX_EXCLUSIONS,
    MAX_FEE_BPS, MAX_LABEL_LEN,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.fee_bps > MAX_FEE_BPS {
        return Err(ContractError::InvalidFeeRate {
            fee_bps: msg.fee_bps,
            max: MAX_FEE_BPS,
        });
    }
    if msg.denom.trim().is_empty() {
        return Err(ContractError::InvalidDenom {});
    }

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender.clone(),
    };
    let fee_recipient = match (msg.fee_bps, msg.fee_recipient) {
        (0, _) => None,
        (_, Some(recipient)) => Some(deps.api.addr_validate(&recipient)?),
        (_, None) => return Err(ContractError::MissingFeeRecipient {}),
    };

    let config = Config {
        admin,
        fee_recipient,
        denom: msg.denom,
        fee_bps: msg.fee_bps,
        claim_rule: msg.claim_rule,
    };
    CONFIG.save(deps.storage, &config)?;
    BOUNTY_ID.save(deps.storage, &0)?;
    ESCROWED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("sender", info.sender)
        .add_attribute("admin", config.admin)
        .add_attribute("denom", config.denom)
        .add_attribute("fee_bps", config.fee_bps.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Create {
            target,
            label,
            excluded,
        } => create_bounty(deps, env, info, target, label, excluded),
        ExecuteMsg::Claim { bounty_id, proof } => claim_bounty(deps, env, info, bounty_id, proof),
        ExecuteMsg::Cancel { bounty_id } => cancel_bounty(deps, env, info, bounty_id),
        ExecuteMsg::EmergencyWithdraw {} => emergency_withdraw(deps, env, info),
    }
}

// Returns the single coin of `denom` attached to the call
fn must_pay(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    let sent = match info.funds.as_slice() {
        [coin] => coin,
        _ => return Err(ContractError::InvalidFunds {}),
    };
    if sent.denom != denom {
        return Err(ContractError::WrongDenom {
            expected: denom.to_string(),
        });
    }
    if sent.amount.is_zero() {
        return Err(ContractError::ZeroDeposit {});
    }
    Ok(sent.amount)
}

fn ensure_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if config.admin != *sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

// Create(target, label, excluded):
//     Receive tokens, validate against denom
//     Validate target, label and exclusion list
//     Split off the platform fee
//     Create entry in BOUNTIES and TARGET_INDEX
//     Send the fee to the fee recipient
fn create_bounty(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    target: Target,
    label: Option<String>,
    excluded: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let gross = must_pay(&info, &config.denom)?;

    let target = target.validate(deps.api)?;
    match &target {
        Target::Address { address } if address == info.sender.as_str() => {
            return Err(ContractError::SelfTarget {});
        }
        Target::Location { .. } if config.claim_rule == ClaimRule::KillProof => {
            return Err(ContractError::InvalidTarget {
                reason: "kill-proof bounties must target an address".to_string(),
            });
        }
        _ => {}
    }

    if let Some(label) = &label {
        if label.len() > MAX_LABEL_LEN {
            return Err(ContractError::LabelTooLong { max: MAX_LABEL_LEN });
        }
    }

    if excluded.len() > MAX_EXCLUSIONS {
        return Err(ContractError::TooManyExclusions {
            max: MAX_EXCLUSIONS,
        });
    }
    let mut excluded = excluded
        .iter()
        .map(|addr| deps.api.addr_validate(addr))
        .collect::<StdResult<Vec<Addr>>>()?;
    excluded.sort();
    excluded.dedup();

    let split = split_deposit(gross, config.fee_bps)?;

    let bounty = Bounty {
        id: next_bounty_id(deps.storage)?,
        creator: info.sender.clone(),
        target,
        label,
        amount: split.amount,
        fee: split.fee,
        created_at: env.block.time,
        status: BountyStatus::Open,
        excluded,
    };
    insert_bounty(deps.storage, &bounty)?;
    lock_funds(deps.storage, bounty.amount)?;

    let excluded_attr = bounty
        .excluded
        .iter()
        .map(Addr::as_str)
        .collect::<Vec<_>>()
        .join(",");
    let mut res = Response::new()
        .add_attribute("action", "create_bounty")
        .add_attribute("bounty_id", bounty.id.to_string())
        .add_event(
            Event::new("bounty_created")
                .add_attribute("bounty_id", bounty.id.to_string())
                .add_attribute("target", bounty.target.to_string())
                .add_attribute("creator", bounty.creator.as_str())
                .add_attribute("amount", bounty.amount)
                .add_attribute("excluded", excluded_attr),
        )
        .set_data(to_json_binary(&bounty.id)?);

    if !split.fee.is_zero() {
        let recipient = config
            .fee_recipient
            .ok_or(ContractError::MissingFeeRecipient {})?;
        res = res
            .add_message(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: coins(split.fee.u128(), &config.denom),
            })
            .add_event(
                Event::new("fee_transferred")
                    .add_attribute("bounty_id", bounty.id.to_string())
                    .add_attribute("recipient", recipient)
                    .add_attribute("amount", split.fee),
            );
    }

    Ok(res)
}

// Claim(bounty_id, proof):
//     Check that the bounty is open and the sender is eligible
//     In kill-proof mode check the proof and spend its event id
//     Mark the bounty claimed
//     Send `amount` tokens to the sender
fn claim_bounty(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    bounty_id: u64,
    proof: Option<KillProof>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut bounty = load_bounty(deps.storage, bounty_id)?;

    check_claim(&bounty, &info.sender)?;
    match (&config.claim_rule, &proof) {
        (ClaimRule::KillProof, Some(proof)) => {
            check_kill_proof(deps.storage, &bounty, &info.sender, proof)?;
            consume_proof(deps.storage, proof, bounty.id)?;
        }
        (ClaimRule::KillProof, None) => return Err(ContractError::ProofRequired {}),
        (ClaimRule::Exclusion, Some(_)) => return Err(ContractError::ProofNotAccepted {}),
        (ClaimRule::Exclusion, None) => {}
    }

    // The bounty must be terminal before the payout is built, so anything the
    // transfer triggers sees it as claimed.
    bounty.status = BountyStatus::Claimed {
        by: info.sender.clone(),
        at: env.block.time,
    };
    BOUNTIES.save(deps.storage, bounty.id, &bounty)?;
    release_funds(deps.storage, bounty.amount)?;

    Ok(Response::new()
        .add_attribute("action", "claim_bounty")
        .add_attribute("bounty_id", bounty.id.to_string())
        .add_event(
            Event::new("bounty_claimed")
                .add_attribute("bounty_id", bounty.id.to_string())
                .add_attribute("claimant", info.sender.as_str())
                .add_attribute("target", bounty.target.to_string()),
        )
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(bounty.amount.u128(), config.denom),
        }))
}

// Cancel(bounty_id):
//     Check that the bounty is open
//     Check that the sender is the creator
//     Mark the bounty cancelled
//     Send `amount` tokens back to the creator, the fee stays with the recipient
fn cancel_bounty(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    bounty_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut bounty = load_bounty(deps.storage, bounty_id)?;

    if !bounty.is_open() {
        return Err(ContractError::BountyNotOpen { bounty_id });
    }
    if bounty.creator != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    bounty.status = BountyStatus::Cancelled { at: env.block.time };
    BOUNTIES.save(deps.storage, bounty.id, &bounty)?;
    release_funds(deps.storage, bounty.amount)?;

    Ok(Response::new()
        .add_attribute("action", "cancel_bounty")
        .add_attribute("bounty_id", bounty.id.to_string())
        .add_event(Event::new("bounty_cancelled").add_attribute("bounty_id", bounty.id.to_string()))
        .add_message(BankMsg::Send {
            to_address: bounty.creator.to_string(),
            amount: coins(bounty.amount.u128(), config.denom),
        }))
}

// EmergencyWithdraw():
//     Validate caller is the admin
//     Send whatever the contract holds beyond the open bounties to the admin
fn emergency_withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    let balance = deps
        .querier
        .query_balance(env.contract.address.as_str(), config.denom.clone())?
        .amount;
    let escrowed = ESCROWED.load(deps.storage)?;
    let residual = balance.saturating_sub(escrowed);
    if residual.is_zero() {
        return Err(ContractError::NothingToWithdraw {});
    }

    Ok(Response::new()
        .add_attribute("action", "emergency_withdraw")
        .add_event(
            Event::new("emergency_withdraw")
                .add_attribute("recipient", config.admin.as_str())
                .add_attribute("amount", residual),
        )
        .add_message(BankMsg::Send {
            to_address: config.admin.to_string(),
            amount: coins(residual.u128(), config.denom),
        }))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query::config(deps)?),
        QueryMsg::Bounty { bounty_id } => to_json_binary(&query::bounty(deps, bounty_id)?),
        QueryMsg::ListBounties { start_after, limit } => {
            to_json_binary(&query::list_bounties(deps, start_after, limit)?)
        }
        QueryMsg::BountiesOnTarget { target } => {
            to_json_binary(&query::bounties_on_target(deps, target)?)
        }
        QueryMsg::ActiveBountiesOnTarget { target } => {
            to_json_binary(&query::active_bounties_on_target(deps, target)?)
        }
        QueryMsg::TotalActiveValue { target } => {
            to_json_binary(&query::total_active_value(deps, target)?)
        }
        QueryMsg::CanClaim {
            bounty_id,
            candidate,
        } => to_json_binary(&query::can_claim(deps, bounty_id, candidate)?),
        QueryMsg::ProofUsed { event_id } => to_json_binary(&query::proof_used(deps, event_id)?),
        QueryMsg::SplitPreview { gross } => to_json_binary(&query::split_preview(deps, gross)?),
        QueryMsg::Escrowed {} => to_json_binary(&query::escrowed(deps)?),
    }
}
