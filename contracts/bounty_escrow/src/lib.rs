//! Bounty escrow contract.
//!
//! A creator escrows funds against a target, either an address or a
//! location id. Anyone eligible may later claim the bounty and collect the
//! funds, or the creator may cancel it and take them back. Both outcomes are
//! terminal.
//!
//! # Flow
//! 1. `Create` splits the attached deposit into the bounty amount and the
//!    platform fee, forwards the fee and records an `Open` bounty
//! 2. `Claim` checks eligibility (creator, exclusion snapshot and, in
//!    kill-proof mode, a single-use kill proof) and pays out the bounty
//! 3. `Cancel` refunds the bounty amount to its creator
//!
//! Every terminal transition is written before the transfer message is
//! returned, so a reentrant claim or cancel always finds the bounty closed.

pub mod contract;
pub mod eligibility;
mod error;
pub mod fee;
pub mod msg;
mod query;
pub mod state;


pub use crate::error::ContractError;
pub use crate::fee::{split_deposit, FeeSplit};
