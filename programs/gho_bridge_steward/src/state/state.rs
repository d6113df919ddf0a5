use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::ErrorCodes;
use crate::events::*;
use crate::interfaces::{FacilitatorRegistry, TokenPool};
use crate::state::structs::*;

use library::math::bounds::{is_debounce_respected, is_increase_within_bound, is_within_bound};
use library::structs::AddressBool;

#[account]
#[derive(InitSpace, Default)]
pub struct GhoBridgeSteward {
    pub owner: Pubkey, // Can set the controlled facilitators, can be Governance account or multisig

    // Immutable after init
    pub risk_council: Pubkey,
    pub gho_token: Pubkey,
    pub gho_token_pool: Pubkey,
    pub bridge_limit_enabled: bool,

    pub ccip_debounce: CcipDebounce,

    #[max_len(MAX_CONTROLLED_FACILITATORS)]
    pub controlled_facilitators: Vec<ControlledFacilitator>,

    pub bump: u8,
}

impl GhoBridgeSteward {
    pub fn init(
        &mut self,
        owner: Pubkey,
        risk_council: Pubkey,
        gho_token: Pubkey,
        gho_token_pool: Pubkey,
        bridge_limit_enabled: bool,
        bump: u8,
    ) -> Result<()> {
        let default_pubkey: Pubkey = Pubkey::default();

        if owner == default_pubkey
            || risk_council == default_pubkey
            || gho_token == default_pubkey
            || gho_token_pool == default_pubkey
        {
            return Err(ErrorCodes::ZeroAddress.into());
        }

        self.owner = owner;
        self.risk_council = risk_council;
        self.gho_token = gho_token;
        self.gho_token_pool = gho_token_pool;
        self.bridge_limit_enabled = bridge_limit_enabled;
        self.ccip_debounce = CcipDebounce::default();
        self.controlled_facilitators = Vec::new();
        self.bump = bump;

        Ok(())
    }

    pub fn only_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ErrorCodes::Unauthorized);
        Ok(())
    }

    pub fn only_risk_council(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.risk_council, ErrorCodes::Unauthorized);
        Ok(())
    }

    pub fn check_debounce(&self, class: CcipDebounceClass, now: u64) -> Result<()> {
        if !is_debounce_respected(self.ccip_debounce.last_update(class), now, MINIMUM_DELAY) {
            return Err(ErrorCodes::DebounceNotRespected.into());
        }

        Ok(())
    }

    fn facilitator_index(&self, facilitator: &Pubkey) -> Option<usize> {
        self.controlled_facilitators
            .iter()
            .position(|entry| entry.facilitator == *facilitator)
    }

    pub fn is_controlled_facilitator(&self, facilitator: &Pubkey) -> bool {
        self.facilitator_index(facilitator)
            .map_or(false, |index| self.controlled_facilitators[index].controlled)
    }

    pub fn get_controlled_facilitators(&self) -> Vec<Pubkey> {
        self.controlled_facilitators
            .iter()
            .filter(|entry| entry.controlled)
            .map(|entry| entry.facilitator)
            .collect()
    }

    /// Last bucket capacity update of `facilitator`, 0 if never updated.
    /// Kept after the facilitator is removed from the controlled set.
    pub fn get_facilitator_bucket_capacity_timelock(&self, facilitator: &Pubkey) -> u64 {
        self.facilitator_index(facilitator)
            .map_or(0, |index| self.controlled_facilitators[index].last_update)
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.only_owner(caller)?;

        if new_owner == Pubkey::default() {
            return Err(ErrorCodes::ZeroAddress.into());
        }

        let previous_owner = self.owner;
        self.owner = new_owner;

        emit!(LogTransferOwnership {
            previous_owner,
            new_owner,
        });

        Ok(())
    }

    /// @notice adds (value = true) or removes (value = false) facilitators from the controlled set.
    /// @dev entries are applied in order. A removed facilitator keeps its timelock until the
    ///      cooldown has run out, only then is its entry dropped.
    pub fn set_controlled_facilitators(
        &mut self,
        caller: &Pubkey,
        now: u64,
        facilitator_status: Vec<AddressBool>,
    ) -> Result<()> {
        self.only_owner(caller)?;

        let default_pubkey: Pubkey = Pubkey::default();
        let mut facilitators = self.controlled_facilitators.clone();

        for status in facilitator_status.iter() {
            if status.addr == default_pubkey {
                return Err(ErrorCodes::ZeroAddress.into());
            }

            let index = facilitators
                .iter()
                .position(|entry| entry.facilitator == status.addr);

            match (status.value, index) {
                (_, Some(index)) => facilitators[index].controlled = status.value,
                (true, None) => facilitators.push(ControlledFacilitator {
                    facilitator: status.addr,
                    controlled: true,
                    last_update: 0,
                }),
                (false, None) => {}
            }
        }

        // removed entries whose cooldown already elapsed carry nothing a fresh entry would not
        facilitators.retain(|entry| {
            entry.controlled || !is_debounce_respected(entry.last_update, now, MINIMUM_DELAY)
        });

        if facilitators.len() > MAX_CONTROLLED_FACILITATORS {
            return Err(ErrorCodes::MaxControlledFacilitatorsReached.into());
        }

        self.controlled_facilitators = facilitators;

        emit!(LogSetControlledFacilitators {
            owner: *caller,
            facilitator_status,
        });

        Ok(())
    }

    /// @notice raises the bucket capacity of a controlled facilitator by at most 100%. Only callable by risk council.
    pub fn update_facilitator_bucket_capacity<R: FacilitatorRegistry>(
        &mut self,
        registry: &R,
        caller: &Pubkey,
        now: u64,
        facilitator: Pubkey,
        new_bucket_capacity: u64,
    ) -> Result<()> {
        self.only_risk_council(caller)?;

        let index = match self.facilitator_index(&facilitator) {
            Some(index) if self.controlled_facilitators[index].controlled => index,
            _ => return Err(ErrorCodes::FacilitatorNotControlled.into()),
        };

        if !is_debounce_respected(
            self.controlled_facilitators[index].last_update,
            now,
            MINIMUM_DELAY,
        ) {
            return Err(ErrorCodes::DebounceNotRespected.into());
        }

        let current_bucket_capacity = registry.get_facilitator_bucket(&facilitator)?.capacity;

        require!(
            new_bucket_capacity != current_bucket_capacity,
            ErrorCodes::NoChange
        );

        require!(
            is_increase_within_bound(
                current_bucket_capacity,
                new_bucket_capacity,
                current_bucket_capacity,
            ),
            ErrorCodes::InvalidBucketCapacityUpdate
        );

        registry.set_facilitator_bucket_capacity(&facilitator, new_bucket_capacity)?;

        self.controlled_facilitators[index].last_update = now;

        emit!(LogUpdateFacilitatorBucketCapacity {
            risk_council: *caller,
            facilitator,
            old_bucket_capacity: current_bucket_capacity,
            new_bucket_capacity,
        });

        Ok(())
    }

    /// @notice moves the token pool bridge limit by at most 100% of its current value. Only callable by risk council.
    pub fn update_bridge_limit<P: TokenPool>(
        &mut self,
        pool: &P,
        caller: &Pubkey,
        now: u64,
        new_bridge_limit: u64,
    ) -> Result<()> {
        self.only_risk_council(caller)?;
        require!(self.bridge_limit_enabled, ErrorCodes::BridgeLimitDisabled);
        self.check_debounce(CcipDebounceClass::BridgeLimit, now)?;

        let current_bridge_limit = pool.get_bridge_limit()?;

        require!(
            new_bridge_limit != current_bridge_limit,
            ErrorCodes::NoChange
        );

        require!(
            is_within_bound(
                current_bridge_limit,
                new_bridge_limit,
                current_bridge_limit,
                false,
            ),
            ErrorCodes::InvalidBridgeLimitUpdate
        );

        pool.set_bridge_limit(new_bridge_limit)?;

        self.ccip_debounce.stamp(CcipDebounceClass::BridgeLimit, now);

        emit!(LogUpdateBridgeLimit {
            risk_council: *caller,
            old_bridge_limit: current_bridge_limit,
            new_bridge_limit,
        });

        Ok(())
    }

    /// @notice forwards the rate limiter settings of one remote chain to the token pool. Only callable by risk council.
    /// @dev values are operational tuning and are not bounded against the current ones.
    pub fn update_rate_limit<P: TokenPool>(
        &mut self,
        pool: &P,
        caller: &Pubkey,
        now: u64,
        remote_chain_selector: u64,
        outbound_config: RateLimitConfig,
        inbound_config: RateLimitConfig,
    ) -> Result<()> {
        self.only_risk_council(caller)?;
        self.check_debounce(CcipDebounceClass::RateLimit, now)?;

        pool.set_chain_rate_limiter_config(remote_chain_selector, outbound_config, inbound_config)?;

        self.ccip_debounce.stamp(CcipDebounceClass::RateLimit, now);

        emit!(LogUpdateRateLimit {
            risk_council: *caller,
            remote_chain_selector,
            outbound_config,
            inbound_config,
        });

        Ok(())
    }
}
