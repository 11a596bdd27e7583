// Path: crates/simulation/tests/generators.rs

mod common;

use common::{allowed_end_times, chain_with_accounts, init_tracing, rich_chain, BLOCK_TIME};
use farming_api::{BankKeeper, FarmingKeeper};
use farming_simulation::funding::POOL_DENOMS;
use farming_simulation::proposals::{
    DESCRIPTION_LEN, EPOCH_AMOUNT_RANGE, PLAN_NAME_PREFIX, PLAN_NAME_SUFFIX_LEN, TITLE_LEN,
};
use farming_simulation::{
    simulate_add_public_plan_proposal, simulate_delete_public_plan_proposal,
    simulate_update_public_plan_proposal, SimAccount, SimRng,
};
use farming_test_utils::fixtures::stake;
use farming_test_utils::{assert_abstained, assert_in_range, assert_proposed, PlanBuilder};
use farming_types::app::{
    Address, Coin, Coins, Dec, DeleteRequestProposal, EpochPayout, PlanId, PlanRequestFields,
    ProposalContent, Timestamp,
};
use farming_types::error::SimulationError;
use farming_types::DEFAULT_BOND_DENOM;

#[test]
fn unaffordable_proposer_abstains_in_every_generator() {
    init_tracing();
    let (chain, accounts) = chain_with_accounts(5, Coins::new());
    let mut chain = chain
        .with_plan(PlanBuilder::new(1).unwrap().fixed_amount(10))
        .with_plan(PlanBuilder::new(2).unwrap().ratio(1));

    for seed in 0..50 {
        let mut rng = SimRng::new(seed);
        assert_abstained!(simulate_add_public_plan_proposal(
            &mut rng, BLOCK_TIME, &accounts, &mut chain
        ));
        assert_abstained!(simulate_update_public_plan_proposal(
            &mut rng, BLOCK_TIME, &accounts, &mut chain
        ));
        assert_abstained!(simulate_delete_public_plan_proposal(
            &mut rng, BLOCK_TIME, &accounts, &mut chain
        ));
    }
    // The gate runs before funding.
    assert_eq!(chain.mint_calls(), 0);
}

#[test]
fn balance_short_in_one_denom_abstains() {
    let fee = Coins::from_coins([Coin::new("stake", 100), Coin::new("pool1", 100)]);
    let (chain, accounts) = chain_with_accounts(1, stake(1_000_000));
    let mut chain = chain
        .with_fee(fee)
        .with_plan(PlanBuilder::new(1).unwrap().ratio(2));

    let mut rng = SimRng::new(9);
    assert_abstained!(simulate_delete_public_plan_proposal(
        &mut rng, BLOCK_TIME, &accounts, &mut chain
    ));
}

#[test]
fn balance_equal_to_fee_is_affordable() {
    let (chain, accounts) = chain_with_accounts(1, stake(100_000_000));
    let mut chain = chain.with_plan(PlanBuilder::new(3).unwrap().ratio(2));

    let mut rng = SimRng::new(9);
    assert_proposed!(simulate_delete_public_plan_proposal(
        &mut rng, BLOCK_TIME, &accounts, &mut chain
    ));
}

#[test]
fn delete_targets_the_single_public_plan() {
    let (chain, accounts) = rich_chain(3);
    let mut chain = chain.with_plan(PlanBuilder::new(7).unwrap().fixed_amount(1_000));

    let mut rng = SimRng::new(42);
    let proposal = assert_proposed!(simulate_delete_public_plan_proposal(
        &mut rng, BLOCK_TIME, &accounts, &mut chain
    ));

    assert_eq!(
        proposal.delete_requests,
        vec![DeleteRequestProposal::new(PlanId::new(7).unwrap())]
    );
    assert!(proposal.add_requests.is_empty());
    assert!(proposal.update_requests.is_empty());
    assert_eq!(proposal.title.len(), TITLE_LEN);
    assert_eq!(proposal.description.len(), DESCRIPTION_LEN);
    assert!(proposal.validate_basic().is_ok());
    // Deleting needs no funding.
    assert_eq!(chain.mint_calls(), 0);
}

#[test]
fn delete_skips_private_plans_and_takes_first_public() {
    let (chain, accounts) = rich_chain(2);
    let mut chain = chain
        .with_plan(PlanBuilder::new(1).unwrap().private().fixed_amount(10))
        .with_plan(PlanBuilder::new(4).unwrap().ratio(3))
        .with_plan(PlanBuilder::new(9).unwrap().fixed_amount(10));

    for seed in 0..20 {
        let mut rng = SimRng::new(seed);
        let proposal = assert_proposed!(simulate_delete_public_plan_proposal(
            &mut rng, BLOCK_TIME, &accounts, &mut chain
        ));
        assert_eq!(proposal.delete_requests.len(), 1);
        assert_eq!(proposal.delete_requests[0].plan_id.get(), 4);
    }
}

#[test]
fn no_public_plan_means_update_and_delete_abstain() {
    let (chain, accounts) = rich_chain(4);
    let mut chain = chain
        .with_plan(PlanBuilder::new(1).unwrap().private().fixed_amount(10))
        .with_plan(PlanBuilder::new(2).unwrap().private().ratio(5));

    for seed in 0..30 {
        let mut rng = SimRng::new(seed);
        assert_abstained!(simulate_update_public_plan_proposal(
            &mut rng, BLOCK_TIME, &accounts, &mut chain
        ));
        assert_abstained!(simulate_delete_public_plan_proposal(
            &mut rng, BLOCK_TIME, &accounts, &mut chain
        ));
    }
}

/// Checks the field rules shared by add and update requests and returns the
/// payout for variant-specific checks.
fn assert_plan_fields<'a>(
    f: &'a PlanRequestFields,
    accounts: &[SimAccount],
    allowed_ends: &[Timestamp],
) -> &'a EpochPayout {
    assert!(f.name.starts_with(PLAN_NAME_PREFIX), "name {}", f.name);
    assert_eq!(f.name.len(), PLAN_NAME_PREFIX.len() + PLAN_NAME_SUFFIX_LEN);
    assert!(f.name[PLAN_NAME_PREFIX.len()..]
        .chars()
        .all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(f.farming_pool_address, f.termination_address);
    assert!(accounts
        .iter()
        .any(|a: &SimAccount| a.address == f.farming_pool_address));
    assert_eq!(f.staking_coin_weights.denoms(), vec![DEFAULT_BOND_DENOM]);
    assert_eq!(
        f.staking_coin_weights.weight_of(DEFAULT_BOND_DENOM),
        Some(Dec::ONE)
    );
    assert_eq!(f.start_time, BLOCK_TIME);
    assert!(f.start_time < f.end_time);
    assert!(allowed_ends.contains(&f.end_time));

    match &f.payout {
        EpochPayout::Amount(coins) => {
            assert_eq!(coins.len(), 1);
            let coin = coins.get(0).unwrap();
            assert!(POOL_DENOMS.contains(&coin.denom.as_str()));
            assert_in_range!(coin.amount, EPOCH_AMOUNT_RANGE.0, EPOCH_AMOUNT_RANGE.1);
        }
        EpochPayout::Ratio(ratio) => {
            assert!((1..=5).any(|t| Dec::from_tenths(t) == *ratio));
        }
    }
    &f.payout
}

#[test]
fn add_proposal_has_expected_shape() {
    init_tracing();
    let (mut chain, accounts) = rich_chain(4);
    let allowed_ends = allowed_end_times(BLOCK_TIME);
    let mut seen_amount = false;
    let mut seen_ratio = false;
    let mut seen_counts = [false; 2];

    for seed in 0..200 {
        let mut rng = SimRng::new(seed);
        let proposal = assert_proposed!(
            simulate_add_public_plan_proposal(&mut rng, BLOCK_TIME, &accounts, &mut chain),
            "seed {}",
            seed
        );

        assert!(proposal.validate_basic().is_ok(), "seed {}", seed);
        assert!(proposal.update_requests.is_empty());
        assert!(proposal.delete_requests.is_empty());
        assert_in_range!(proposal.add_requests.len(), 1, 2);
        seen_counts[proposal.add_requests.len() - 1] = true;
        assert_eq!(proposal.title.len(), TITLE_LEN);
        assert_eq!(proposal.description.len(), DESCRIPTION_LEN);

        for req in &proposal.add_requests {
            match assert_plan_fields(&req.fields, &accounts, &allowed_ends) {
                EpochPayout::Amount(_) => seen_amount = true,
                EpochPayout::Ratio(_) => seen_ratio = true,
            }
        }
    }

    assert!(seen_amount && seen_ratio);
    assert!(seen_counts.iter().all(|c| *c));
}

#[test]
fn add_funds_the_proposer_with_pool_denoms() {
    let (mut chain, accounts) = rich_chain(1);
    let proposer = accounts[0].address;

    let mut rng = SimRng::new(5);
    assert_proposed!(simulate_add_public_plan_proposal(
        &mut rng, BLOCK_TIME, &accounts, &mut chain
    ));

    let balance = chain.spendable_coins(&proposer);
    for denom in POOL_DENOMS {
        assert!(balance.amount_of(denom) > 0, "missing {}", denom);
    }
    assert!(balance.amount_of(DEFAULT_BOND_DENOM) > common::RICH);
    assert_eq!(chain.mint_calls(), 1);
}

#[test]
fn update_follows_variant_of_first_public_plan() {
    let (chain, accounts) = rich_chain(3);
    let mut ratio_first = chain
        .clone()
        .with_plan(PlanBuilder::new(1).unwrap().private().fixed_amount(10))
        .with_plan(PlanBuilder::new(2).unwrap().ratio(1))
        .with_plan(PlanBuilder::new(3).unwrap().fixed_amount(10));
    let mut fixed_first = chain
        .with_plan(PlanBuilder::new(5).unwrap().fixed_amount(10))
        .with_plan(PlanBuilder::new(6).unwrap().ratio(1));

    let allowed_ends = allowed_end_times(BLOCK_TIME);
    for seed in 0..50 {
        let proposal = assert_proposed!(simulate_update_public_plan_proposal(
            &mut SimRng::new(seed),
            BLOCK_TIME,
            &accounts,
            &mut ratio_first
        ));
        assert!(proposal.add_requests.is_empty());
        assert!(proposal.delete_requests.is_empty());
        assert_eq!(proposal.update_requests.len(), 1);
        let req = &proposal.update_requests[0];
        assert_eq!(req.plan_id.get(), 2);
        assert!(matches!(
            assert_plan_fields(&req.fields, &accounts, &allowed_ends),
            EpochPayout::Ratio(_)
        ));
        assert!(proposal.validate_basic().is_ok());

        let proposal = assert_proposed!(simulate_update_public_plan_proposal(
            &mut SimRng::new(seed),
            BLOCK_TIME,
            &accounts,
            &mut fixed_first
        ));
        let req = &proposal.update_requests[0];
        assert_eq!(req.plan_id.get(), 5);
        assert!(matches!(
            assert_plan_fields(&req.fields, &accounts, &allowed_ends),
            EpochPayout::Amount(_)
        ));
        assert_eq!(req.fields.payout.epoch_ratio(), None);
        assert!(proposal.validate_basic().is_ok());
    }
}

#[test]
fn refused_funding_abstains_add_and_update_only() {
    let (chain, accounts) = rich_chain(2);
    let mut chain = chain
        .with_plan(PlanBuilder::new(1).unwrap().ratio(4))
        .refusing_mints();

    for seed in 0..20 {
        let mut rng = SimRng::new(seed);
        assert_abstained!(simulate_add_public_plan_proposal(
            &mut rng, BLOCK_TIME, &accounts, &mut chain
        ));
        assert_abstained!(simulate_update_public_plan_proposal(
            &mut rng, BLOCK_TIME, &accounts, &mut chain
        ));
        assert_proposed!(simulate_delete_public_plan_proposal(
            &mut rng, BLOCK_TIME, &accounts, &mut chain
        ));
    }
    for acc in &accounts {
        assert_eq!(chain.spendable_coins(&acc.address), stake(common::RICH));
    }
}

#[test]
fn unknown_proposer_is_an_environment_fault() {
    let mut chain = farming_test_utils::MockChain::new();
    let accounts = vec![SimAccount::new(Address::from_seed(99))];

    let err = simulate_delete_public_plan_proposal(
        &mut SimRng::new(1),
        BLOCK_TIME,
        &accounts,
        &mut chain,
    )
    .unwrap_err();
    assert!(matches!(err, SimulationError::State(_)));
}

#[test]
fn empty_candidate_pool_is_an_environment_fault() {
    let (mut chain, _) = rich_chain(1);
    let err =
        simulate_add_public_plan_proposal(&mut SimRng::new(1), BLOCK_TIME, &[], &mut chain)
            .unwrap_err();
    assert!(matches!(err, SimulationError::EmptyAccountPool));
}

#[test]
fn generators_do_not_touch_plans() -> anyhow::Result<()> {
    let (chain, accounts) = rich_chain(2);
    let mut chain = chain
        .with_plan(PlanBuilder::new(1).unwrap().ratio(4))
        .with_plan(PlanBuilder::new(2).unwrap().fixed_amount(77));
    let before = chain.get_plans();

    let mut rng = SimRng::new(8);
    simulate_add_public_plan_proposal(&mut rng, BLOCK_TIME, &accounts, &mut chain)?;
    simulate_update_public_plan_proposal(&mut rng, BLOCK_TIME, &accounts, &mut chain)?;
    simulate_delete_public_plan_proposal(&mut rng, BLOCK_TIME, &accounts, &mut chain)?;

    assert_eq!(chain.get_plans(), before);
    Ok(())
}
