use anchor_lang::prelude::*;

use crate::state::*;
use library::structs::AddressBool;

#[event]
pub struct LogUpdateFacilitatorBucketCapacity {
    pub risk_council: Pubkey,
    pub facilitator: Pubkey,
    pub old_bucket_capacity: u64,
    pub new_bucket_capacity: u64,
}

#[event]
pub struct LogUpdateBridgeLimit {
    pub risk_council: Pubkey,
    pub old_bridge_limit: u64,
    pub new_bridge_limit: u64,
}

#[event]
pub struct LogUpdateRateLimit {
    pub risk_council: Pubkey,
    pub remote_chain_selector: u64,
    pub outbound_config: RateLimitConfig,
    pub inbound_config: RateLimitConfig,
}

#[event]
pub struct LogSetControlledFacilitators {
    pub owner: Pubkey,
    pub facilitator_status: Vec<AddressBool>,
}

#[event]
pub struct LogTransferOwnership {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
