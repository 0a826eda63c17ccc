use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

use crate::fee::FeeSplit;
use crate::state::{Bounty, ClaimRule, Target};

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating address.
    pub admin: Option<String>,
    /// Required when `fee_bps` is non-zero.
    pub fee_recipient: Option<String>,
    pub denom: String,
    /// Platform fee in basis points of the net bounty, 1000 = 10%.
    pub fee_bps: u16,
    pub claim_rule: ClaimRule,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Escrows the attached funds against `target`. Addresses in `excluded`
    /// can never claim the bounty.
    Create {
        target: Target,
        label: Option<String>,
        excluded: Vec<String>,
    },
    Claim {
        bounty_id: u64,
        proof: Option<KillProof>,
    },
    Cancel {
        bounty_id: u64,
    },
    /// Sends any balance not owed to an open bounty to the admin.
    EmergencyWithdraw {},
}

/// Evidence of a kill, already validated off-chain.
#[cw_serde]
pub struct KillProof {
    /// Unique id of the kill event. Each id can pay out one bounty.
    pub event_id: String,
    pub victim: String,
    pub killer: String,
    pub occurred_at: Timestamp,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Bounty)]
    Bounty { bounty_id: u64 },
    #[returns(BountiesResponse)]
    ListBounties {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Every bounty ever created on `target`, in creation order.
    #[returns(BountyIdsResponse)]
    BountiesOnTarget { target: Target },
    #[returns(BountyIdsResponse)]
    ActiveBountiesOnTarget { target: Target },
    #[returns(TotalValueResponse)]
    TotalActiveValue { target: Target },
    #[returns(CanClaimResponse)]
    CanClaim { bounty_id: u64, candidate: String },
    #[returns(ProofUsedResponse)]
    ProofUsed { event_id: String },
    #[returns(FeeSplit)]
    SplitPreview { gross: Uint128 },
    /// Sum of every open bounty across all targets.
    #[returns(TotalValueResponse)]
    Escrowed {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub fee_recipient: Option<Addr>,
    pub denom: String,
    pub fee_bps: u16,
    pub claim_rule: ClaimRule,
    pub next_bounty_id: u64,
}

#[cw_serde]
pub struct BountiesResponse {
    pub bounties: Vec<Bounty>,
}

#[cw_serde]
pub struct BountyIdsResponse {
    pub ids: Vec<u64>,
}

#[cw_serde]
pub struct TotalValueResponse {
    pub total: Uint128,
}

#[cw_serde]
pub struct CanClaimResponse {
    pub eligible: bool,
}

#[cw_serde]
pub struct ProofUsedResponse {
    pub bounty_id: Option<u64>,
}
