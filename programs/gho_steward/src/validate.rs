use anchor_lang::prelude::*;

use crate::constants::GHO_BORROW_RATE_MAX;
use crate::errors::ErrorCodes;
use crate::state::{BorrowRateConfig, InterestRateData};

use library::math::bounds::is_within_bound;

/// @notice validates a new GHO rate curve against the live one and the configured max changes.
pub fn validate_borrow_rate_update(
    current: &InterestRateData,
    new: &InterestRateData,
    config: &BorrowRateConfig,
) -> Result<()> {
    require!(current != new, ErrorCodes::NoChange);

    require!(
        is_within_bound(
            current.optimal_usage_ratio.into(),
            new.optimal_usage_ratio.into(),
            config.optimal_usage_ratio_max_change.into(),
            false,
        ),
        ErrorCodes::InvalidOptimalUsageRatio
    );

    require!(
        is_within_bound(
            current.base_variable_borrow_rate.into(),
            new.base_variable_borrow_rate.into(),
            config.base_variable_borrow_rate_max_change.into(),
            false,
        ),
        ErrorCodes::InvalidBaseVariableBorrowRate
    );

    require!(
        is_within_bound(
            current.variable_rate_slope1.into(),
            new.variable_rate_slope1.into(),
            config.variable_rate_slope1_max_change.into(),
            false,
        ),
        ErrorCodes::InvalidVariableRateSlope1
    );

    require!(
        is_within_bound(
            current.variable_rate_slope2.into(),
            new.variable_rate_slope2.into(),
            config.variable_rate_slope2_max_change.into(),
            false,
        ),
        ErrorCodes::InvalidVariableRateSlope2
    );

    // three u32 values can not overflow u64
    let max_borrow_rate = u64::from(new.base_variable_borrow_rate)
        + u64::from(new.variable_rate_slope1)
        + u64::from(new.variable_rate_slope2);

    require!(
        max_borrow_rate <= GHO_BORROW_RATE_MAX,
        ErrorCodes::RateAboveCeiling
    );

    Ok(())
}

/// @notice caps may move by at most 100% of the current cap, in either direction.
pub fn validate_cap_update(current_cap: u64, new_cap: u64, invalid_update: ErrorCodes) -> Result<()> {
    require!(new_cap != current_cap, ErrorCodes::NoChange);

    if !is_within_bound(current_cap, new_cap, current_cap, false) {
        return Err(invalid_update.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_rates() -> InterestRateData {
        InterestRateData {
            optimal_usage_ratio: 9_000,     // 90%
            base_variable_borrow_rate: 500, // 5%
            variable_rate_slope1: 0,
            variable_rate_slope2: 0,
        }
    }

    fn config() -> BorrowRateConfig {
        BorrowRateConfig {
            optimal_usage_ratio_max_change: 500,
            base_variable_borrow_rate_max_change: 1_000,
            variable_rate_slope1_max_change: 1_000,
            variable_rate_slope2_max_change: 1_000,
        }
    }

    #[test]
    fn test_rate_update_within_bounds() {
        let new = InterestRateData {
            optimal_usage_ratio: 8_500,
            base_variable_borrow_rate: 1_000,
            variable_rate_slope1: 500,
            variable_rate_slope2: 1_000,
        };

        assert!(validate_borrow_rate_update(&current_rates(), &new, &config()).is_ok());
    }

    #[test]
    fn test_rate_update_identical_is_no_change() {
        let err = validate_borrow_rate_update(&current_rates(), &current_rates(), &config())
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::NoChange));
    }

    #[test]
    fn test_rate_update_rejects_each_coefficient() {
        let cases = [
            (
                InterestRateData {
                    optimal_usage_ratio: 8_499,
                    ..current_rates()
                },
                ErrorCodes::InvalidOptimalUsageRatio,
            ),
            (
                InterestRateData {
                    base_variable_borrow_rate: 1_501,
                    ..current_rates()
                },
                ErrorCodes::InvalidBaseVariableBorrowRate,
            ),
            (
                InterestRateData {
                    variable_rate_slope1: 1_001,
                    ..current_rates()
                },
                ErrorCodes::InvalidVariableRateSlope1,
            ),
            (
                InterestRateData {
                    variable_rate_slope2: 1_001,
                    ..current_rates()
                },
                ErrorCodes::InvalidVariableRateSlope2,
            ),
        ];

        for (new, expected) in cases {
            let err = validate_borrow_rate_update(&current_rates(), &new, &config()).unwrap_err();
            assert_eq!(err, Error::from(expected));
        }
    }

    #[test]
    fn test_rate_update_above_ceiling() {
        let current = InterestRateData {
            optimal_usage_ratio: 9_000,
            base_variable_borrow_rate: 0,
            variable_rate_slope1: 0,
            variable_rate_slope2: 0,
        };
        // every coefficient moves by exactly its max change, the sum is 30%
        let new = InterestRateData {
            optimal_usage_ratio: 9_000,
            base_variable_borrow_rate: 1_000,
            variable_rate_slope1: 1_000,
            variable_rate_slope2: 1_000,
        };

        let err = validate_borrow_rate_update(&current, &new, &config()).unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::RateAboveCeiling));

        // exactly at the ceiling is accepted
        let at_ceiling = InterestRateData {
            variable_rate_slope2: 500,
            ..new
        };
        assert!(validate_borrow_rate_update(&current, &at_ceiling, &config()).is_ok());
    }

    #[test]
    fn test_cap_update_bounds() {
        let invalid = || ErrorCodes::InvalidBorrowCapUpdate;

        assert!(validate_cap_update(100, 200, invalid()).is_ok());
        assert!(validate_cap_update(100, 0, invalid()).is_ok());
        assert!(validate_cap_update(100, 50, invalid()).is_ok());

        let err = validate_cap_update(100, 201, invalid()).unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::InvalidBorrowCapUpdate));

        let err = validate_cap_update(100, 100, invalid()).unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::NoChange));

        // a zero cap can only stay at zero
        let err = validate_cap_update(0, 1, ErrorCodes::InvalidSupplyCapUpdate).unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::InvalidSupplyCapUpdate));
    }
}
