use anchor_lang::prelude::*;

use crate::state::{FacilitatorBucket, RateLimitConfig};

/// Facilitator buckets kept by the GHO token. The steward must be bucket manager on the token side.
pub trait FacilitatorRegistry {
    fn get_facilitator_bucket(&self, facilitator: &Pubkey) -> Result<FacilitatorBucket>;

    fn set_facilitator_bucket_capacity(&self, facilitator: &Pubkey, capacity: u64) -> Result<()>;
}

/// CCIP token pool of GHO. The steward must be rate limit admin and bridge limit admin.
pub trait TokenPool {
    fn get_bridge_limit(&self) -> Result<u64>;

    fn set_bridge_limit(&self, bridge_limit: u64) -> Result<()>;

    fn set_chain_rate_limiter_config(
        &self,
        remote_chain_selector: u64,
        outbound_config: RateLimitConfig,
        inbound_config: RateLimitConfig,
    ) -> Result<()>;
}
