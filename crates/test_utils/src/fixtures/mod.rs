//! Test fixtures for reproducible tests

use farming_api::prelude::*;
use farming_types::app::{
    Account, Address, BasePlan, Coin, Coins, Dec, DecCoins, FixedAmountPlan, Params, Plan, PlanId,
    PlanType, RatioPlan, Timestamp,
};
use farming_types::error::{BankError, StateError};
use farming_types::DEFAULT_BOND_DENOM;
use std::collections::BTreeMap;

/// An in-memory ledger and farming store.
#[derive(Debug, Clone, Default)]
pub struct MockChain {
    accounts: BTreeMap<Address, Account>,
    balances: BTreeMap<Address, Coins>,
    params: Params,
    plans: BTreeMap<PlanId, Plan>,
    refuse_mints: bool,
    mint_calls: usize,
}

impl MockChain {
    /// Creates an empty chain with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account holding `balance`.
    pub fn with_account(mut self, address: Address, balance: Coins) -> Self {
        self.add_account(address, balance);
        self
    }

    /// Registers an account holding `balance`.
    pub fn add_account(&mut self, address: Address, balance: Coins) {
        let account_number = self.accounts.len() as u64;
        self.accounts
            .insert(address, Account::new(address, account_number));
        self.balances.insert(address, balance);
    }

    /// Replaces the module parameters.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Sets the private plan creation fee.
    pub fn with_fee(mut self, fee: Coins) -> Self {
        self.params.private_plan_creation_fee = fee;
        self
    }

    /// Stores a plan, replacing any plan with the same id.
    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plans.insert(plan.id(), plan);
        self
    }

    /// Makes every subsequent mint fail.
    pub fn refusing_mints(mut self) -> Self {
        self.refuse_mints = true;
        self
    }

    /// The number of successful mints so far.
    pub fn mint_calls(&self) -> usize {
        self.mint_calls
    }
}

impl AccountKeeper for MockChain {
    fn get_account(&self, address: &Address) -> Result<Account, StateError> {
        self.accounts
            .get(address)
            .cloned()
            .ok_or(StateError::AccountNotFound(*address))
    }
}

impl BankKeeper for MockChain {
    fn spendable_coins(&self, address: &Address) -> Coins {
        self.balances.get(address).cloned().unwrap_or_default()
    }

    fn mint_and_credit(&mut self, address: &Address, coins: &Coins) -> Result<(), BankError> {
        if self.refuse_mints {
            return Err(BankError::MintFailed("minting disabled".into()));
        }
        if !coins.is_valid() {
            return Err(BankError::InvalidCoins(coins.to_string()));
        }
        let held = self.spendable_coins(address);
        let updated = held
            .checked_add(coins)
            .ok_or(BankError::Overflow(*address))?;
        self.balances.insert(*address, updated);
        self.mint_calls += 1;
        Ok(())
    }
}

impl FarmingKeeper for MockChain {
    fn get_params(&self) -> Params {
        self.params.clone()
    }

    fn get_plans(&self) -> Vec<Plan> {
        self.plans.values().cloned().collect()
    }
}

/// Builds plans with sensible defaults.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    base: BasePlan,
}

impl PlanBuilder {
    /// Starts a public plan with the given id. Returns `None` for id zero.
    pub fn new(id: u64) -> Option<Self> {
        let id = PlanId::new(id)?;
        let owner = Address::from_seed(id.get());
        Some(Self {
            base: BasePlan {
                id,
                name: format!("plan-{}", id),
                plan_type: PlanType::Public,
                farming_pool_address: owner,
                termination_address: owner,
                staking_coin_weights: DecCoins::single(DEFAULT_BOND_DENOM, Dec::ONE),
                start_time: Timestamp(0),
                end_time: Timestamp(86_400),
            },
        })
    }

    /// Marks the plan private.
    pub fn private(mut self) -> Self {
        self.base.plan_type = PlanType::Private;
        self
    }

    /// Finishes a fixed amount plan paying `amount` of `pool1` per epoch.
    pub fn fixed_amount(self, amount: u128) -> Plan {
        Plan::FixedAmount(FixedAmountPlan {
            base: self.base,
            epoch_amount: Coins::from_coins([Coin::new("pool1", amount)]),
        })
    }

    /// Finishes a ratio plan paying `tenths / 10` of the pool per epoch.
    pub fn ratio(self, tenths: u8) -> Plan {
        Plan::Ratio(RatioPlan {
            base: self.base,
            epoch_ratio: Dec::from_tenths(tenths),
        })
    }
}

/// A bond-denomination balance.
pub fn stake(amount: u128) -> Coins {
    Coins::from_coins([Coin::new(DEFAULT_BOND_DENOM, amount)])
}
