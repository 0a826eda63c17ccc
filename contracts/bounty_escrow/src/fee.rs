use cosmwasm_std::Uint128;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::state::BPS_DENOM;

/// A gross deposit split into the payable bounty and the platform fee.
/// `amount + fee` always equals the gross deposit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct FeeSplit {
    pub amount: Uint128,
    pub fee: Uint128,
}

/// Splits `gross` so that the fee is `fee_bps` of the net amount:
/// `amount = floor(gross * 10_000 / (10_000 + fee_bps))`, `fee = gross - amount`.
///
/// Rounding always favours the fee, and a deposit that rounds down to a zero
/// bounty is rejected.
pub fn split_deposit(gross: Uint128, fee_bps: u16) -> Result<FeeSplit, ContractError> {
    if gross.is_zero() {
        return Err(ContractError::ZeroDeposit {});
    }

    let amount = if fee_bps == 0 {
        gross
    } else {
        gross.multiply_ratio(BPS_DENOM, BPS_DENOM + u128::from(fee_bps))
    };
    if amount.is_zero() {
        return Err(ContractError::DepositTooSmall { gross });
    }

    let fee = gross.checked_sub(amount)?;
    Ok(FeeSplit { amount, fee })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN_PERCENT: u16 = 1_000;

    #[test]
    fn ten_percent_of_110() {
        let split = split_deposit(Uint128::new(110), TEN_PERCENT).unwrap();
        assert_eq!(split.amount, Uint128::new(100));
        assert_eq!(split.fee, Uint128::new(10));
    }

    #[test]
    fn dust_deposit_is_rejected() {
        let err = split_deposit(Uint128::new(1), TEN_PERCENT).unwrap_err();
        assert_eq!(
            err,
            ContractError::DepositTooSmall {
                gross: Uint128::new(1)
            }
        );
    }

    #[test]
    fn smallest_payable_deposit() {
        // 2 * 10_000 / 11_000 = 1
        let split = split_deposit(Uint128::new(2), TEN_PERCENT).unwrap();
        assert_eq!(split.amount, Uint128::new(1));
        assert_eq!(split.fee, Uint128::new(1));
    }

    #[test]
    fn zero_deposit_is_rejected() {
        let err = split_deposit(Uint128::zero(), 0).unwrap_err();
        assert_eq!(err, ContractError::ZeroDeposit {});
    }

    #[test]
    fn no_fee_passes_deposit_through() {
        let split = split_deposit(Uint128::new(1), 0).unwrap();
        assert_eq!(split.amount, Uint128::new(1));
        assert_eq!(split.fee, Uint128::zero());
    }

    #[test]
    fn split_conserves_every_deposit() {
        for fee_bps in [0u16, 1, 250, TEN_PERCENT, 3_333, 5_000] {
            for gross in 1u128..2_000 {
                let gross = Uint128::new(gross);
                match split_deposit(gross, fee_bps) {
                    Ok(split) => {
                        assert!(!split.amount.is_zero());
                        assert_eq!(split.amount + split.fee, gross);
                    }
                    Err(err) => assert_eq!(err, ContractError::DepositTooSmall { gross }),
                }
            }
        }
    }

    #[test]
    fn large_deposit_does_not_overflow() {
        let gross = Uint128::MAX;
        let split = split_deposit(gross, TEN_PERCENT).unwrap();
        assert_eq!(split.amount + split.fee, gross);
        assert!(split.fee > Uint128::zero());
    }
}
