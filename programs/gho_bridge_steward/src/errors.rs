use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(GHO_BRIDGE_STEWARD_UNAUTHORIZED)]
    Unauthorized,

    #[msg(GHO_BRIDGE_STEWARD_ZERO_ADDRESS)]
    ZeroAddress,

    #[msg(GHO_BRIDGE_STEWARD_DEBOUNCE_NOT_RESPECTED)]
    DebounceNotRespected,

    #[msg(GHO_BRIDGE_STEWARD_NO_CHANGE)]
    NoChange,

    #[msg(GHO_BRIDGE_STEWARD_FACILITATOR_NOT_CONTROLLED)]
    FacilitatorNotControlled,

    #[msg(GHO_BRIDGE_STEWARD_INVALID_BUCKET_CAPACITY_UPDATE)]
    InvalidBucketCapacityUpdate,

    #[msg(GHO_BRIDGE_STEWARD_BRIDGE_LIMIT_DISABLED)]
    BridgeLimitDisabled,

    #[msg(GHO_BRIDGE_STEWARD_INVALID_BRIDGE_LIMIT_UPDATE)]
    InvalidBridgeLimitUpdate,

    #[msg(GHO_BRIDGE_STEWARD_MAX_CONTROLLED_FACILITATORS_REACHED)]
    MaxControlledFacilitatorsReached,

    // invoke account checks
    #[msg(GHO_BRIDGE_STEWARD_INVALID_GHO_TOKEN)]
    InvalidGhoToken,

    #[msg(GHO_BRIDGE_STEWARD_INVALID_TOKEN_POOL)]
    InvalidTokenPool,

    #[msg(GHO_BRIDGE_STEWARD_MISSING_CHAIN_CONFIG)]
    MissingChainConfig,
}
