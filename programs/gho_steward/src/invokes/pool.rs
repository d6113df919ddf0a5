use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;

use crate::errors::ErrorCodes;
use crate::interfaces::*;
use crate::state::{InterestRateData, ReserveCaps, GHO_STEWARD_SEED};

use library::cpi::{instruction_data, invoke_instruction, invoke_view};

// discriminator = sha256("global:<instruction name>")[0..8]
const GET_POOL_CONFIGURATOR_DISCRIMINATOR: [u8; 8] = [205, 68, 49, 161, 129, 160, 217, 104];
const GET_RESERVE_CAPS_DISCRIMINATOR: [u8; 8] = [236, 165, 250, 211, 96, 224, 127, 80];
const GET_INTEREST_RATE_STRATEGY_ADDRESS_DISCRIMINATOR: [u8; 8] =
    [52, 199, 213, 112, 192, 231, 153, 184];
const GET_INTEREST_RATE_DATA_BPS_DISCRIMINATOR: [u8; 8] = [109, 50, 103, 95, 184, 124, 194, 2];
const SET_BORROW_CAP_DISCRIMINATOR: [u8; 8] = [116, 168, 73, 143, 176, 94, 205, 0];
const SET_SUPPLY_CAP_DISCRIMINATOR: [u8; 8] = [26, 229, 174, 213, 12, 59, 220, 71];
const SET_RESERVE_INTEREST_RATE_DATA_DISCRIMINATOR: [u8; 8] = [63, 0, 88, 202, 249, 170, 75, 47];

/// Accounts needed to read and write the GHO reserve on the pool side.
/// Views are answered through return data, writes are signed by the steward PDA.
pub struct PoolCpiAccounts<'info> {
    pub gho_steward: AccountInfo<'info>,
    pub gho_steward_bump: u8,

    pub pool_addresses_provider: AccountInfo<'info>,
    pub pool_addresses_provider_program: AccountInfo<'info>,

    pub pool_data_provider: AccountInfo<'info>,
    pub pool_data_provider_program: AccountInfo<'info>,

    pub gho_reserve: AccountInfo<'info>,
    pub pool_configurator_program: AccountInfo<'info>,

    // only present for rate updates
    pub rate_strategy: Option<AccountInfo<'info>>,
    pub rate_strategy_program: Option<AccountInfo<'info>>,
}

impl<'info> PoolCpiAccounts<'info> {
    fn check_configurator(&self, configurator: &Pubkey) -> Result<()> {
        if self.pool_configurator_program.key != configurator {
            return err!(ErrorCodes::InvalidPoolConfigurator);
        }
        Ok(())
    }

    fn set_on_configurator<T: AnchorSerialize>(
        &self,
        configurator: &Pubkey,
        discriminator: &[u8; 8],
        args: &T,
    ) -> Result<()> {
        self.check_configurator(configurator)?;

        let account_metas = vec![
            // steward PDA, registered as risk admin on the pool
            AccountMeta::new_readonly(*self.gho_steward.key, true),
            // reserve being configured (mutable)
            AccountMeta::new(*self.gho_reserve.key, false),
        ];

        let signer_seeds: &[&[&[u8]]] = &[&[GHO_STEWARD_SEED, &[self.gho_steward_bump]]];

        invoke_instruction(
            &self.pool_configurator_program,
            account_metas,
            instruction_data(discriminator, args)?,
            &[self.gho_steward.clone(), self.gho_reserve.clone()],
            signer_seeds,
        )
    }
}

impl<'info> PoolAddressesProvider for PoolCpiAccounts<'info> {
    fn get_pool_configurator(&self) -> Result<Pubkey> {
        invoke_view(
            &self.pool_addresses_provider_program,
            vec![AccountMeta::new_readonly(*self.pool_addresses_provider.key, false)],
            GET_POOL_CONFIGURATOR_DISCRIMINATOR.to_vec(),
            &[self.pool_addresses_provider.clone()],
        )
    }
}

impl<'info> PoolDataProvider for PoolCpiAccounts<'info> {
    fn get_reserve_caps(&self, asset: &Pubkey) -> Result<ReserveCaps> {
        invoke_view(
            &self.pool_data_provider_program,
            vec![
                AccountMeta::new_readonly(*self.pool_data_provider.key, false),
                AccountMeta::new_readonly(*self.gho_reserve.key, false),
            ],
            instruction_data(&GET_RESERVE_CAPS_DISCRIMINATOR, asset)?,
            &[self.pool_data_provider.clone(), self.gho_reserve.clone()],
        )
    }

    fn get_interest_rate_strategy_address(&self, asset: &Pubkey) -> Result<Pubkey> {
        invoke_view(
            &self.pool_data_provider_program,
            vec![
                AccountMeta::new_readonly(*self.pool_data_provider.key, false),
                AccountMeta::new_readonly(*self.gho_reserve.key, false),
            ],
            instruction_data(&GET_INTEREST_RATE_STRATEGY_ADDRESS_DISCRIMINATOR, asset)?,
            &[self.pool_data_provider.clone(), self.gho_reserve.clone()],
        )
    }
}

impl<'info> RateStrategy for PoolCpiAccounts<'info> {
    fn get_interest_rate_data_bps(
        &self,
        strategy: &Pubkey,
        asset: &Pubkey,
    ) -> Result<InterestRateData> {
        let (rate_strategy, rate_strategy_program) =
            match (&self.rate_strategy, &self.rate_strategy_program) {
                (Some(rate_strategy), Some(program)) => (rate_strategy, program),
                _ => return err!(ErrorCodes::InvalidRateStrategy),
            };

        // the strategy passed in must be the one the pool currently points at
        if rate_strategy.key != strategy || rate_strategy.owner != rate_strategy_program.key {
            return err!(ErrorCodes::InvalidRateStrategy);
        }

        invoke_view(
            rate_strategy_program,
            vec![AccountMeta::new_readonly(*rate_strategy.key, false)],
            instruction_data(&GET_INTEREST_RATE_DATA_BPS_DISCRIMINATOR, asset)?,
            &[rate_strategy.clone()],
        )
    }
}

impl<'info> PoolConfigurator for PoolCpiAccounts<'info> {
    fn set_borrow_cap(&self, configurator: &Pubkey, asset: &Pubkey, borrow_cap: u64) -> Result<()> {
        self.set_on_configurator(configurator, &SET_BORROW_CAP_DISCRIMINATOR, &(*asset, borrow_cap))
    }

    fn set_supply_cap(&self, configurator: &Pubkey, asset: &Pubkey, supply_cap: u64) -> Result<()> {
        self.set_on_configurator(configurator, &SET_SUPPLY_CAP_DISCRIMINATOR, &(*asset, supply_cap))
    }

    fn set_reserve_interest_rate_data(
        &self,
        configurator: &Pubkey,
        asset: &Pubkey,
        rate_data: Vec<u8>,
    ) -> Result<()> {
        self.set_on_configurator(
            configurator,
            &SET_RESERVE_INTEREST_RATE_DATA_DISCRIMINATOR,
            &(*asset, rate_data),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestAccount {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl TestAccount {
        fn new(owner: Pubkey) -> Self {
            Self {
                key: Pubkey::new_unique(),
                owner,
                lamports: 0,
                data: Vec::new(),
            }
        }

        fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                false,
                &mut self.lamports,
                self.data.as_mut_slice(),
                &self.owner,
                false,
                0,
            )
        }
    }

    struct PoolAccounts {
        gho_steward: TestAccount,
        pool_addresses_provider: TestAccount,
        pool_addresses_provider_program: TestAccount,
        pool_data_provider: TestAccount,
        pool_data_provider_program: TestAccount,
        gho_reserve: TestAccount,
        pool_configurator_program: TestAccount,
        rate_strategy: TestAccount,
        rate_strategy_program: TestAccount,
    }

    impl PoolAccounts {
        fn new() -> Self {
            let rate_strategy_program = TestAccount::new(Pubkey::new_unique());
            Self {
                gho_steward: TestAccount::new(crate::ID),
                pool_addresses_provider: TestAccount::new(Pubkey::new_unique()),
                pool_addresses_provider_program: TestAccount::new(Pubkey::new_unique()),
                pool_data_provider: TestAccount::new(Pubkey::new_unique()),
                pool_data_provider_program: TestAccount::new(Pubkey::new_unique()),
                gho_reserve: TestAccount::new(Pubkey::new_unique()),
                pool_configurator_program: TestAccount::new(Pubkey::new_unique()),
                rate_strategy: TestAccount::new(rate_strategy_program.key),
                rate_strategy_program,
            }
        }

        fn cpi_accounts(&mut self, with_strategy: bool) -> PoolCpiAccounts<'_> {
            let (rate_strategy, rate_strategy_program) = if with_strategy {
                (
                    Some(self.rate_strategy.info()),
                    Some(self.rate_strategy_program.info()),
                )
            } else {
                (None, None)
            };

            PoolCpiAccounts {
                gho_steward: self.gho_steward.info(),
                gho_steward_bump: 255,
                pool_addresses_provider: self.pool_addresses_provider.info(),
                pool_addresses_provider_program: self.pool_addresses_provider_program.info(),
                pool_data_provider: self.pool_data_provider.info(),
                pool_data_provider_program: self.pool_data_provider_program.info(),
                gho_reserve: self.gho_reserve.info(),
                pool_configurator_program: self.pool_configurator_program.info(),
                rate_strategy,
                rate_strategy_program,
            }
        }
    }

    #[test]
    fn test_writes_reject_unexpected_configurator() {
        let mut accounts = PoolAccounts::new();
        let asset = Pubkey::new_unique();
        let reported_configurator = Pubkey::new_unique();
        let pool = accounts.cpi_accounts(false);

        let err = pool
            .set_borrow_cap(&reported_configurator, &asset, 100)
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::InvalidPoolConfigurator));

        let err = pool
            .set_supply_cap(&reported_configurator, &asset, 100)
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::InvalidPoolConfigurator));

        let err = pool
            .set_reserve_interest_rate_data(&reported_configurator, &asset, vec![0; 16])
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::InvalidPoolConfigurator));
    }

    #[test]
    fn test_rate_read_rejects_unexpected_strategy() {
        let mut accounts = PoolAccounts::new();
        let asset = Pubkey::new_unique();
        let reported_strategy = Pubkey::new_unique();

        // strategy account is not the one the data provider reports
        let pool = accounts.cpi_accounts(true);
        let err = pool
            .get_interest_rate_data_bps(&reported_strategy, &asset)
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::InvalidRateStrategy));

        // right key, owned by another program
        let mut accounts = PoolAccounts::new();
        accounts.rate_strategy.owner = Pubkey::new_unique();
        let strategy = accounts.rate_strategy.key;
        let pool = accounts.cpi_accounts(true);
        let err = pool
            .get_interest_rate_data_bps(&strategy, &asset)
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::InvalidRateStrategy));

        // strategy accounts not passed at all
        let mut accounts = PoolAccounts::new();
        let strategy = accounts.rate_strategy.key;
        let pool = accounts.cpi_accounts(false);
        let err = pool
            .get_interest_rate_data_bps(&strategy, &asset)
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::InvalidRateStrategy));
    }
}
