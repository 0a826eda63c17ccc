use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},

    // Instantiation
    #[error("Fee rate {fee_bps} bps exceeds the maximum of {max} bps")]
    InvalidFeeRate { fee_bps: u16, max: u16 },

    #[error("A fee recipient is required when the fee rate is non-zero")]
    MissingFeeRecipient {},

    #[error("Denom must not be empty")]
    InvalidDenom {},

    // Create
    #[error("Must send exactly one coin")]
    InvalidFunds {},

    #[error("Must send the correct denom, expected {expected}")]
    WrongDenom { expected: String },

    #[error("Deposit must be greater than zero")]
    ZeroDeposit {},

    #[error("Deposit of {gross} is too small to leave a payable bounty after fees")]
    DepositTooSmall { gross: Uint128 },

    #[error("Invalid target: {reason}")]
    InvalidTarget { reason: String },

    #[error("Cannot place a bounty on yourself")]
    SelfTarget {},

    #[error("Label exceeds {max} bytes")]
    LabelTooLong { max: usize },

    #[error("Exclusion list exceeds {max} entries")]
    TooManyExclusions { max: usize },

    // Claim / cancel
    #[error("Bounty {bounty_id} not found")]
    BountyNotFound { bounty_id: u64 },

    #[error("Bounty {bounty_id} is no longer open")]
    BountyNotOpen { bounty_id: u64 },

    #[error("Creator cannot claim their own bounty")]
    SelfClaim {},

    #[error("Address is excluded from claiming this bounty")]
    Excluded {},

    #[error("A kill proof is required to claim")]
    ProofRequired {},

    #[error("This contract does not accept kill proofs")]
    ProofNotAccepted {},

    #[error("Proof victim does not match the bounty target")]
    VictimMismatch {},

    #[error("Proof killer does not match the claimant")]
    KillerMismatch {},

    #[error("Proof event predates the bounty")]
    StaleProof {},

    #[error("Proof event id must not be empty")]
    EmptyEventId {},

    #[error("Proof event {event_id} was already used for bounty {bounty_id}")]
    ProofReused { event_id: String, bounty_id: u64 },

    // Admin
    #[error("No residual balance to withdraw")]
    NothingToWithdraw {},
}
