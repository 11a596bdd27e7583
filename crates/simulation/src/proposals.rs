// Path: crates/simulation/src/proposals.rs
//! Randomized public plan proposal generators.
//!
//! All three generators open the same way: draw a proposer from the candidate
//! accounts, look it up, and abstain unless its spendable balance covers the
//! private plan creation fee. The add and update generators then fund the
//! proposer so epoch amounts can name real denominations.
//!
//! Draw order, which reproducibility depends on:
//!
//! 1. proposer index;
//! 2. funding (add, update): one amount per minted denomination;
//! 3. add: request count, then per request the variant flip followed by the
//!    plan fields; update: the plan fields;
//! 4. plan fields: name suffix, duration in months, then either the pool
//!    denomination index and epoch amount, or the epoch ratio;
//! 5. title, then description.

use crate::account::{random_acc, SimAccount};
use crate::funding::{mint_pool_coins, PoolCoins};
use crate::gate::is_affordable;
use crate::randomness::SimRng;
use farming_api::SimState;
use farming_types::app::{
    first_public_plan, AddRequestProposal, Coin, Coins, Dec, DecCoins, DeleteRequestProposal,
    EpochPayout, Plan, PlanRequestFields, PublicPlanProposal, Timestamp, UpdateRequestProposal,
};
use farming_types::error::{ErrorCode, SimulationError};
use farming_types::prelude::OptionExt;
use farming_types::DEFAULT_BOND_DENOM;

/// Prefix of every generated plan name.
pub const PLAN_NAME_PREFIX: &str = "simulation-test-";
/// Length of the random plan name suffix.
pub const PLAN_NAME_SUFFIX_LEN: usize = 5;
/// Length of a generated proposal title.
pub const TITLE_LEN: usize = 10;
/// Length of a generated proposal description.
pub const DESCRIPTION_LEN: usize = 100;

/// Bounds of the number of add requests per proposal.
pub const ADD_REQUESTS_RANGE: (u32, u32) = (1, 2);
/// Bounds of a generated plan's duration, in months.
pub const PLAN_MONTHS_RANGE: (u32, u32) = (1, 28);
/// Bounds of a generated epoch amount.
pub const EPOCH_AMOUNT_RANGE: (u128, u128) = (10_000_000, 1_000_000_000);
/// Bounds of a generated epoch ratio, in tenths.
pub const EPOCH_RATIO_TENTHS_RANGE: (u8, u8) = (1, 5);

/// Which payout shape to generate for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayoutKind {
    Amount,
    Ratio,
}

impl PayoutKind {
    fn of(plan: &Plan) -> Self {
        match plan {
            Plan::FixedAmount(_) => PayoutKind::Amount,
            Plan::Ratio(_) => PayoutKind::Ratio,
        }
    }
}

/// Generates a proposal adding one or two public plans.
pub fn simulate_add_public_plan_proposal<S: SimState + ?Sized>(
    rng: &mut SimRng,
    block_time: Timestamp,
    accounts: &[SimAccount],
    state: &mut S,
) -> Result<Option<PublicPlanProposal>, SimulationError> {
    let Some(proposer) = select_proposer(rng, accounts, state)? else {
        return Ok(None);
    };
    let Some(pool) = fund_proposer(rng, state, &proposer) else {
        return Ok(None);
    };

    let add_requests = gen_add_request_proposals(rng, block_time, &proposer, &pool)?;

    Ok(Some(PublicPlanProposal::new(
        rng.rand_string_of_length(TITLE_LEN),
        rng.rand_string_of_length(DESCRIPTION_LEN),
        add_requests,
        vec![],
        vec![],
    )))
}

/// Generates a proposal updating the first public plan in the snapshot.
///
/// The new payout keeps the matched plan's variant.
pub fn simulate_update_public_plan_proposal<S: SimState + ?Sized>(
    rng: &mut SimRng,
    block_time: Timestamp,
    accounts: &[SimAccount],
    state: &mut S,
) -> Result<Option<PublicPlanProposal>, SimulationError> {
    let Some(proposer) = select_proposer(rng, accounts, state)? else {
        return Ok(None);
    };
    let Some(pool) = fund_proposer(rng, state, &proposer) else {
        return Ok(None);
    };

    let plans = state.get_plans();
    let Some(plan) = first_public_plan(&plans) else {
        tracing::debug!(target: "farming::sim", "no public plan to update; abstaining");
        return Ok(None);
    };

    let fields = gen_plan_fields(rng, block_time, &proposer, PayoutKind::of(plan), &pool)?;
    let update_request = UpdateRequestProposal::new(plan.id(), fields);

    Ok(Some(PublicPlanProposal::new(
        rng.rand_string_of_length(TITLE_LEN),
        rng.rand_string_of_length(DESCRIPTION_LEN),
        vec![],
        vec![update_request],
        vec![],
    )))
}

/// Generates a proposal deleting the first public plan in the snapshot.
pub fn simulate_delete_public_plan_proposal<S: SimState + ?Sized>(
    rng: &mut SimRng,
    _block_time: Timestamp,
    accounts: &[SimAccount],
    state: &mut S,
) -> Result<Option<PublicPlanProposal>, SimulationError> {
    if select_proposer(rng, accounts, state)?.is_none() {
        return Ok(None);
    }

    let plans = state.get_plans();
    let Some(plan) = first_public_plan(&plans) else {
        tracing::debug!(target: "farming::sim", "no public plan to delete; abstaining");
        return Ok(None);
    };

    let delete_request = DeleteRequestProposal::new(plan.id());

    Ok(Some(PublicPlanProposal::new(
        rng.rand_string_of_length(TITLE_LEN),
        rng.rand_string_of_length(DESCRIPTION_LEN),
        vec![],
        vec![],
        vec![delete_request],
    )))
}

/// Draws a proposer and applies the affordability gate.
fn select_proposer<S: SimState + ?Sized>(
    rng: &mut SimRng,
    accounts: &[SimAccount],
    state: &S,
) -> Result<Option<SimAccount>, SimulationError> {
    let candidate = random_acc(rng, accounts)?;
    let account = state.get_account(&candidate.address)?;
    let spendable = state.spendable_coins(&account.address);
    let params = state.get_params();

    if !is_affordable(&spendable, &params.private_plan_creation_fee) {
        tracing::debug!(
            target: "farming::sim",
            address = %account.address,
            %spendable,
            fee = %params.private_plan_creation_fee,
            "proposer cannot cover plan creation fee; abstaining"
        );
        return Ok(None);
    }
    Ok(Some(candidate.clone()))
}

/// Mints pool coins for the proposer. A refused mint means abstaining.
fn fund_proposer<S: SimState + ?Sized>(
    rng: &mut SimRng,
    state: &mut S,
    proposer: &SimAccount,
) -> Option<PoolCoins> {
    match mint_pool_coins(rng, state, &proposer.address) {
        Ok(pool) => Some(pool),
        Err(e) => {
            tracing::debug!(
                target: "farming::sim",
                address = %proposer.address,
                error = %e,
                code = e.code(),
                "funding proposer failed; abstaining"
            );
            None
        }
    }
}

/// Generates one or two add requests, each a coin flip between a fixed
/// amount plan and a ratio plan.
fn gen_add_request_proposals(
    rng: &mut SimRng,
    block_time: Timestamp,
    proposer: &SimAccount,
    pool: &PoolCoins,
) -> Result<Vec<AddRequestProposal>, SimulationError> {
    let count = rng.rand_int_between(ADD_REQUESTS_RANGE.0, ADD_REQUESTS_RANGE.1);
    (0..count)
        .map(|_| {
            let kind = if rng.coin_flip() {
                PayoutKind::Amount
            } else {
                PayoutKind::Ratio
            };
            gen_plan_fields(rng, block_time, proposer, kind, pool).map(AddRequestProposal::new)
        })
        .collect()
}

fn gen_plan_fields(
    rng: &mut SimRng,
    block_time: Timestamp,
    proposer: &SimAccount,
    kind: PayoutKind,
    pool: &PoolCoins,
) -> Result<PlanRequestFields, SimulationError> {
    let name = format!(
        "{}{}",
        PLAN_NAME_PREFIX,
        rng.rand_string_of_length(PLAN_NAME_SUFFIX_LEN)
    );
    let months = rng.rand_int_between(PLAN_MONTHS_RANGE.0, PLAN_MONTHS_RANGE.1);
    let end_time = block_time.add_months(months)?;

    let payout = match kind {
        PayoutKind::Amount => {
            let denom = pool
                .random_pool_denom(rng)
                .required(SimulationError::NoPoolDenom)?;
            let amount = rng.rand_int_between(EPOCH_AMOUNT_RANGE.0, EPOCH_AMOUNT_RANGE.1);
            EpochPayout::Amount(Coins::from_coins([Coin::new(denom, amount)]))
        }
        PayoutKind::Ratio => EpochPayout::Ratio(Dec::from_tenths(rng.rand_int_between(
            EPOCH_RATIO_TENTHS_RANGE.0,
            EPOCH_RATIO_TENTHS_RANGE.1,
        ))),
    };

    Ok(PlanRequestFields {
        name,
        farming_pool_address: proposer.address,
        termination_address: proposer.address,
        staking_coin_weights: DecCoins::single(DEFAULT_BOND_DENOM, Dec::ONE),
        start_time: block_time,
        end_time,
        payout,
    })
}
