// Path: crates/simulation/tests/contents.rs

mod common;

use common::{rich_chain, BLOCK_TIME};
use farming_simulation::{proposal_contents, select_weighted, SimRng};
use farming_test_utils::{assert_abstained, assert_proposed, MockChain, PlanBuilder};
use farming_types::config::{
    ProposalWeights, SimulationConfig, OP_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL,
    OP_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL, OP_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL,
};

#[test]
fn contents_are_registered_with_default_weights() {
    let contents = proposal_contents::<MockChain>(&ProposalWeights::default());
    let keys: Vec<_> = contents.iter().map(|c| c.app_params_key()).collect();
    assert_eq!(
        keys,
        vec![
            OP_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL,
            OP_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL,
            OP_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL,
        ]
    );
    for c in &contents {
        assert_eq!(c.default_weight(), 5);
        assert_eq!(c.weight(), 5);
    }
}

#[test]
fn configured_weights_override_defaults() -> anyhow::Result<()> {
    let config = SimulationConfig::from_toml_str(
        r#"
        [weights]
        op_weight_add_public_plan_proposal = 0
        op_weight_update_public_plan_proposal = 0
        op_weight_delete_public_plan_proposal = 3
        "#,
    )?;
    let contents = proposal_contents::<MockChain>(&config.weights);

    let mut rng = SimRng::new(17);
    for _ in 0..100 {
        let picked = select_weighted(&mut rng, &contents).expect("positive total weight");
        assert_eq!(picked.app_params_key(), OP_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL);
    }
    Ok(())
}

#[test]
fn configured_fee_gates_every_content() -> anyhow::Result<()> {
    let config = SimulationConfig::from_toml_str(
        r#"
        [params.private_plan_creation_fee]
        stake = "2000000000"
        "#,
    )?;
    let (chain, accounts) = rich_chain(2);
    let mut chain = chain
        .with_plan(PlanBuilder::new(4).unwrap().ratio(3))
        .with_params(config.params);
    let contents = proposal_contents::<MockChain>(&config.weights);

    let mut rng = SimRng::new(8);
    for content in &contents {
        assert_abstained!(
            content.simulate(&mut rng, BLOCK_TIME, &accounts, &mut chain),
            "{}",
            content.app_params_key()
        );
    }
    assert_eq!(chain.mint_calls(), 0);
    Ok(())
}

#[test]
fn zero_total_weight_selects_nothing() {
    let weights = ProposalWeights {
        add_public_plan: 0,
        update_public_plan: 0,
        delete_public_plan: 0,
    };
    let contents = proposal_contents::<MockChain>(&weights);
    assert!(select_weighted(&mut SimRng::default(), &contents).is_none());
}

#[test]
fn selection_is_roughly_proportional() {
    let weights = ProposalWeights {
        add_public_plan: 1,
        update_public_plan: 2,
        delete_public_plan: 7,
    };
    let contents = proposal_contents::<MockChain>(&weights);
    let mut counts = [0usize; 3];
    let mut rng = SimRng::new(2024);
    for _ in 0..10_000 {
        let picked = select_weighted(&mut rng, &contents).unwrap();
        let idx = contents
            .iter()
            .position(|c| c.app_params_key() == picked.app_params_key())
            .unwrap();
        counts[idx] += 1;
    }
    assert!((700..1300).contains(&counts[0]), "{:?}", counts);
    assert!((1600..2400).contains(&counts[1]), "{:?}", counts);
    assert!((6500..7500).contains(&counts[2]), "{:?}", counts);
}

#[test]
fn selected_content_runs_its_generator() {
    let (chain, accounts) = rich_chain(2);
    let mut chain = chain.with_plan(PlanBuilder::new(11).unwrap().ratio(2));
    let contents = proposal_contents::<MockChain>(&ProposalWeights::default());

    let mut rng = SimRng::new(3);
    let delete = contents
        .iter()
        .find(|c| c.app_params_key() == OP_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL)
        .unwrap();
    let proposal = assert_proposed!(delete.simulate(&mut rng, BLOCK_TIME, &accounts, &mut chain));
    assert_eq!(proposal.delete_requests[0].plan_id.get(), 11);

    let add = &contents[0];
    let proposal = assert_proposed!(add.simulate(&mut rng, BLOCK_TIME, &accounts, &mut chain));
    assert!(!proposal.add_requests.is_empty());
}
