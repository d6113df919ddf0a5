use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(GHO_STEWARD_UNAUTHORIZED)]
    Unauthorized,

    #[msg(GHO_STEWARD_ZERO_ADDRESS)]
    ZeroAddress,

    #[msg(GHO_STEWARD_DEBOUNCE_NOT_RESPECTED)]
    DebounceNotRespected,

    #[msg(GHO_STEWARD_NO_CHANGE)]
    NoChange,

    #[msg(GHO_STEWARD_STRATEGY_NOT_FOUND)]
    StrategyNotFound,

    #[msg(GHO_STEWARD_INVALID_OPTIMAL_USAGE_RATIO)]
    InvalidOptimalUsageRatio,

    #[msg(GHO_STEWARD_INVALID_BORROW_RATE_UPDATE)]
    InvalidBaseVariableBorrowRate,

    #[msg(GHO_STEWARD_INVALID_SLOPE1_UPDATE)]
    InvalidVariableRateSlope1,

    #[msg(GHO_STEWARD_INVALID_SLOPE2_UPDATE)]
    InvalidVariableRateSlope2,

    #[msg(GHO_STEWARD_BORROW_RATE_HIGHER_THAN_MAX)]
    RateAboveCeiling,

    #[msg(GHO_STEWARD_INVALID_BORROW_CAP_UPDATE)]
    InvalidBorrowCapUpdate,

    #[msg(GHO_STEWARD_INVALID_SUPPLY_CAP_UPDATE)]
    InvalidSupplyCapUpdate,

    #[msg(GHO_STEWARD_INVALID_POOL_ADDRESSES_PROVIDER)]
    InvalidPoolAddressesProvider,

    #[msg(GHO_STEWARD_INVALID_POOL_DATA_PROVIDER)]
    InvalidPoolDataProvider,

    #[msg(GHO_STEWARD_INVALID_POOL_CONFIGURATOR)]
    InvalidPoolConfigurator,

    #[msg(GHO_STEWARD_INVALID_RATE_STRATEGY)]
    InvalidRateStrategy,
}
