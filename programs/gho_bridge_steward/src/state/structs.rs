use anchor_lang::prelude::*;

/// Token bucket limiter settings of one direction of a remote chain lane.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub is_enabled: bool,
    pub capacity: u64,
    pub rate: u64, // tokens refilled per second
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FacilitatorBucket {
    pub capacity: u64,
    pub level: u64,
}

/// Facilitator known to the steward. `controlled` says whether the risk council may move its
/// bucket capacity, `last_update` survives removal so a re-add cannot reset the cooldown.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlledFacilitator {
    pub facilitator: Pubkey,
    pub controlled: bool,
    pub last_update: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CcipDebounceClass {
    BridgeLimit,
    RateLimit,
}

pub const CCIP_DEBOUNCE_CLASSES: usize = 2;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CcipDebounce {
    pub last_updates: [u64; CCIP_DEBOUNCE_CLASSES],
}

impl CcipDebounce {
    pub fn last_update(&self, class: CcipDebounceClass) -> u64 {
        self.last_updates[class as usize]
    }

    pub fn stamp(&mut self, class: CcipDebounceClass, now: u64) {
        self.last_updates[class as usize] = now;
    }
}
