use anchor_lang::prelude::*;
use std::cell::RefCell;

use crate::constants::MINIMUM_DELAY;
use crate::errors::ErrorCodes;
use crate::interfaces::*;
use crate::state::*;

const T0: u64 = 1_700_000_000;

const DEBOUNCE_CLASSES: [GhoDebounceClass; GHO_DEBOUNCE_CLASSES] = [
    GhoDebounceClass::BorrowRate,
    GhoDebounceClass::BorrowCap,
    GhoDebounceClass::SupplyCap,
    GhoDebounceClass::RiskConfig,
];

struct FakePool {
    configurator: Pubkey,
    strategy: Pubkey,
    caps: RefCell<ReserveCaps>,
    rates: RefCell<InterestRateData>,
    reject_writes: bool,
    writes: RefCell<u32>,
}

impl FakePool {
    fn new(borrow_cap: u64, supply_cap: u64) -> Self {
        Self {
            configurator: Pubkey::new_unique(),
            strategy: Pubkey::new_unique(),
            caps: RefCell::new(ReserveCaps {
                borrow_cap,
                supply_cap,
            }),
            rates: RefCell::new(InterestRateData {
                optimal_usage_ratio: 9_000,
                base_variable_borrow_rate: 500,
                variable_rate_slope1: 0,
                variable_rate_slope2: 0,
            }),
            reject_writes: false,
            writes: RefCell::new(0),
        }
    }

    fn write(&self, configurator: &Pubkey) -> Result<()> {
        if *configurator != self.configurator {
            return err!(ErrorCodes::InvalidPoolConfigurator);
        }
        if self.reject_writes {
            return err!(library::errors::ErrorCodes::LibraryCpiFailed);
        }
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

impl PoolAddressesProvider for FakePool {
    fn get_pool_configurator(&self) -> Result<Pubkey> {
        Ok(self.configurator)
    }
}

impl PoolDataProvider for FakePool {
    fn get_reserve_caps(&self, _asset: &Pubkey) -> Result<ReserveCaps> {
        Ok(*self.caps.borrow())
    }

    fn get_interest_rate_strategy_address(&self, _asset: &Pubkey) -> Result<Pubkey> {
        Ok(self.strategy)
    }
}

impl RateStrategy for FakePool {
    fn get_interest_rate_data_bps(
        &self,
        strategy: &Pubkey,
        _asset: &Pubkey,
    ) -> Result<InterestRateData> {
        if *strategy != self.strategy {
            return err!(ErrorCodes::InvalidRateStrategy);
        }
        Ok(*self.rates.borrow())
    }
}

impl PoolConfigurator for FakePool {
    fn set_borrow_cap(&self, configurator: &Pubkey, _asset: &Pubkey, borrow_cap: u64) -> Result<()> {
        self.write(configurator)?;
        self.caps.borrow_mut().borrow_cap = borrow_cap;
        Ok(())
    }

    fn set_supply_cap(&self, configurator: &Pubkey, _asset: &Pubkey, supply_cap: u64) -> Result<()> {
        self.write(configurator)?;
        self.caps.borrow_mut().supply_cap = supply_cap;
        Ok(())
    }

    fn set_reserve_interest_rate_data(
        &self,
        configurator: &Pubkey,
        _asset: &Pubkey,
        rate_data: Vec<u8>,
    ) -> Result<()> {
        self.write(configurator)?;
        *self.rates.borrow_mut() = InterestRateData::try_from_slice(&rate_data).unwrap();
        Ok(())
    }
}

struct Setup {
    steward: GhoSteward,
    owner: Pubkey,
    council: Pubkey,
}

fn rate_config() -> BorrowRateConfig {
    BorrowRateConfig {
        optimal_usage_ratio_max_change: 500,
        base_variable_borrow_rate_max_change: 500,
        variable_rate_slope1_max_change: 500,
        variable_rate_slope2_max_change: 500,
    }
}

fn setup() -> Setup {
    let owner = Pubkey::new_unique();
    let council = Pubkey::new_unique();

    let mut steward = GhoSteward::default();
    steward
        .init(
            owner,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            council,
            rate_config(),
            255,
        )
        .unwrap();

    Setup {
        steward,
        owner,
        council,
    }
}

#[test]
fn test_init_rejects_each_zero_address() {
    for zero_at in 0..5 {
        let mut keys: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
        keys[zero_at] = Pubkey::default();

        let mut steward = GhoSteward::default();
        let err = steward
            .init(keys[0], keys[1], keys[2], keys[3], keys[4], rate_config(), 255)
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::ZeroAddress));
    }
}

#[test]
fn test_init_starts_with_clean_timelocks() {
    let s = setup();

    for class in DEBOUNCE_CLASSES {
        assert_eq!(s.steward.gho_debounce.last_update(class), 0);
    }
    assert_eq!(s.steward.borrow_rate_config, rate_config());
    assert_eq!(s.steward.bump, 255);
}

#[test]
fn test_borrow_cap_update_applies_and_stamps() {
    let mut s = setup();
    let pool = FakePool::new(100, 100);

    s.steward
        .update_gho_borrow_cap(&pool, &s.council, T0, 200)
        .unwrap();

    assert_eq!(pool.caps.borrow().borrow_cap, 200);
    assert_eq!(pool.caps.borrow().supply_cap, 100);
    assert_eq!(s.steward.gho_debounce.last_update(GhoDebounceClass::BorrowCap), T0);
    assert_eq!(s.steward.gho_debounce.last_update(GhoDebounceClass::SupplyCap), 0);
}

#[test]
fn test_cap_update_bounds() {
    let mut s = setup();
    let pool = FakePool::new(100, 100);

    let err = s
        .steward
        .update_gho_borrow_cap(&pool, &s.council, T0, 201)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::InvalidBorrowCapUpdate));

    let err = s
        .steward
        .update_gho_supply_cap(&pool, &s.council, T0, 100)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::NoChange));

    // a failed attempt does not start the timelock
    assert_eq!(s.steward.gho_debounce.last_update(GhoDebounceClass::BorrowCap), 0);

    s.steward
        .update_gho_supply_cap(&pool, &s.council, T0, 0)
        .unwrap();
    assert_eq!(pool.caps.borrow().supply_cap, 0);
}

#[test]
fn test_debounce_per_class() {
    let mut s = setup();
    let pool = FakePool::new(100, 100);

    s.steward
        .update_gho_borrow_cap(&pool, &s.council, T0, 150)
        .unwrap();

    // other classes are not blocked
    s.steward
        .update_gho_supply_cap(&pool, &s.council, T0, 150)
        .unwrap();

    let err = s
        .steward
        .update_gho_borrow_cap(&pool, &s.council, T0 + 1, 160)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::DebounceNotRespected));

    // the delay must be strictly exceeded
    let err = s
        .steward
        .update_gho_borrow_cap(&pool, &s.council, T0 + MINIMUM_DELAY, 160)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::DebounceNotRespected));

    s.steward
        .update_gho_borrow_cap(&pool, &s.council, T0 + MINIMUM_DELAY + 1, 160)
        .unwrap();
    assert_eq!(pool.caps.borrow().borrow_cap, 160);
}

#[test]
fn test_only_risk_council_updates() {
    let mut s = setup();
    let pool = FakePool::new(100, 100);
    let stranger = Pubkey::new_unique();

    let err = s
        .steward
        .update_gho_borrow_cap(&pool, &stranger, T0, 150)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::Unauthorized));

    let err = s
        .steward
        .update_gho_supply_cap(&pool, &s.owner, T0, 150)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::Unauthorized));

    let new_rates = InterestRateData {
        base_variable_borrow_rate: 600,
        ..*pool.rates.borrow()
    };
    let err = s
        .steward
        .update_gho_borrow_rate(&pool, &stranger, T0, new_rates)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::Unauthorized));

    assert_eq!(*pool.writes.borrow(), 0);
}

#[test]
fn test_rejected_write_leaves_no_stamp() {
    let mut s = setup();
    let mut pool = FakePool::new(100, 100);
    pool.reject_writes = true;

    assert!(s
        .steward
        .update_gho_borrow_cap(&pool, &s.council, T0, 150)
        .is_err());
    assert_eq!(s.steward.gho_debounce.last_update(GhoDebounceClass::BorrowCap), 0);

    pool.reject_writes = false;
    s.steward
        .update_gho_borrow_cap(&pool, &s.council, T0 + 1, 150)
        .unwrap();
}

#[test]
fn test_borrow_rate_update() {
    let mut s = setup();
    let pool = FakePool::new(100, 100);

    let new_rates = InterestRateData {
        optimal_usage_ratio: 8_500,
        base_variable_borrow_rate: 1_000,
        variable_rate_slope1: 500,
        variable_rate_slope2: 500,
    };

    s.steward
        .update_gho_borrow_rate(&pool, &s.council, T0, new_rates)
        .unwrap();

    assert_eq!(*pool.rates.borrow(), new_rates);
    assert_eq!(s.steward.gho_debounce.last_update(GhoDebounceClass::BorrowRate), T0);

    let err = s
        .steward
        .update_gho_borrow_rate(&pool, &s.council, T0 + 10, new_rates)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::DebounceNotRespected));
}

#[test]
fn test_borrow_rate_update_rejections() {
    let mut s = setup();
    let pool = FakePool::new(100, 100);
    let current = *pool.rates.borrow();

    let err = s
        .steward
        .update_gho_borrow_rate(&pool, &s.council, T0, current)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::NoChange));

    let err = s
        .steward
        .update_gho_borrow_rate(
            &pool,
            &s.council,
            T0,
            InterestRateData {
                base_variable_borrow_rate: 1_001,
                ..current
            },
        )
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::InvalidBaseVariableBorrowRate));

    // 21% base + 5% slope1 ends above the 25% ceiling
    pool.rates.borrow_mut().base_variable_borrow_rate = 2_000;
    let err = s
        .steward
        .update_gho_borrow_rate(
            &pool,
            &s.council,
            T0,
            InterestRateData {
                base_variable_borrow_rate: 2_100,
                variable_rate_slope1: 500,
                ..current
            },
        )
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::RateAboveCeiling));

    assert_eq!(*pool.writes.borrow(), 0);
    assert_eq!(s.steward.gho_debounce.last_update(GhoDebounceClass::BorrowRate), 0);
}

#[test]
fn test_borrow_rate_update_without_strategy() {
    let mut s = setup();
    let mut pool = FakePool::new(100, 100);
    pool.strategy = Pubkey::default();

    let err = s
        .steward
        .update_gho_borrow_rate(
            &pool,
            &s.council,
            T0,
            InterestRateData {
                base_variable_borrow_rate: 600,
                ..*pool.rates.borrow()
            },
        )
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::StrategyNotFound));
}

#[test]
fn test_set_borrow_rate_config() {
    let mut s = setup();
    let config = BorrowRateConfig {
        optimal_usage_ratio_max_change: 100,
        ..rate_config()
    };

    let err = s
        .steward
        .set_borrow_rate_config(&s.council, T0, config)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::Unauthorized));

    s.steward.set_borrow_rate_config(&s.owner, T0, config).unwrap();
    assert_eq!(s.steward.borrow_rate_config, config);
    assert_eq!(s.steward.gho_debounce.last_update(GhoDebounceClass::RiskConfig), T0);

    let err = s
        .steward
        .set_borrow_rate_config(&s.owner, T0 + MINIMUM_DELAY, rate_config())
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::DebounceNotRespected));
}

#[test]
fn test_transfer_ownership() {
    let mut s = setup();
    let new_owner = Pubkey::new_unique();

    let err = s
        .steward
        .transfer_ownership(&s.owner, Pubkey::default())
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::ZeroAddress));

    let err = s
        .steward
        .transfer_ownership(&new_owner, new_owner)
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::Unauthorized));

    s.steward.transfer_ownership(&s.owner, new_owner).unwrap();
    assert_eq!(s.steward.owner, new_owner);

    let err = s
        .steward
        .set_borrow_rate_config(&s.owner, T0, rate_config())
        .unwrap_err();
    assert_eq!(err, Error::from(ErrorCodes::Unauthorized));
}
