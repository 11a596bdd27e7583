// Path: crates/simulation/src/contents.rs
//! Weighted registry of the module's proposal generators.

use crate::account::SimAccount;
use crate::proposals::{
    simulate_add_public_plan_proposal, simulate_delete_public_plan_proposal,
    simulate_update_public_plan_proposal,
};
use crate::randomness::SimRng;
use farming_api::SimState;
use farming_types::app::{PublicPlanProposal, Timestamp};
use farming_types::config::{
    ProposalWeights, DEFAULT_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL,
    DEFAULT_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL, DEFAULT_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL,
    OP_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL, OP_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL,
    OP_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL,
};
use farming_types::error::SimulationError;

/// Signature shared by the proposal generators.
pub type ContentSimulatorFn<S> = fn(
    &mut SimRng,
    Timestamp,
    &[SimAccount],
    &mut S,
) -> Result<Option<PublicPlanProposal>, SimulationError>;

/// A generator with the weight the harness should pick it by.
pub struct WeightedProposalContent<S> {
    app_params_key: &'static str,
    default_weight: u32,
    weight: u32,
    content_simulator_fn: ContentSimulatorFn<S>,
}

impl<S> WeightedProposalContent<S> {
    /// The operation weight parameter key.
    pub fn app_params_key(&self) -> &'static str {
        self.app_params_key
    }

    /// The weight used when the configuration does not override it.
    pub fn default_weight(&self) -> u32 {
        self.default_weight
    }

    /// The effective weight.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Runs the generator.
    pub fn simulate(
        &self,
        rng: &mut SimRng,
        block_time: Timestamp,
        accounts: &[SimAccount],
        state: &mut S,
    ) -> Result<Option<PublicPlanProposal>, SimulationError> {
        (self.content_simulator_fn)(rng, block_time, accounts, state)
    }
}

impl<S> core::fmt::Debug for WeightedProposalContent<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WeightedProposalContent")
            .field("app_params_key", &self.app_params_key)
            .field("default_weight", &self.default_weight)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Returns the module's weighted proposal generators, in add, update, delete order.
pub fn proposal_contents<S: SimState>(weights: &ProposalWeights) -> Vec<WeightedProposalContent<S>> {
    let entry = |key: &'static str, default_weight: u32, f: ContentSimulatorFn<S>| {
        WeightedProposalContent {
            app_params_key: key,
            default_weight,
            weight: weights.by_key(key).unwrap_or(default_weight),
            content_simulator_fn: f,
        }
    };

    vec![
        entry(
            OP_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL,
            DEFAULT_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL,
            simulate_add_public_plan_proposal::<S> as ContentSimulatorFn<S>,
        ),
        entry(
            OP_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL,
            DEFAULT_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL,
            simulate_update_public_plan_proposal::<S> as ContentSimulatorFn<S>,
        ),
        entry(
            OP_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL,
            DEFAULT_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL,
            simulate_delete_public_plan_proposal::<S> as ContentSimulatorFn<S>,
        ),
    ]
}

/// Picks an entry with probability proportional to its weight.
///
/// Consumes one draw when the total weight is positive and none otherwise.
pub fn select_weighted<'a, S>(
    rng: &mut SimRng,
    contents: &'a [WeightedProposalContent<S>],
) -> Option<&'a WeightedProposalContent<S>> {
    let total: u64 = contents.iter().map(|c| u64::from(c.weight)).sum();
    if total == 0 {
        return None;
    }
    let mut ticket = rng.rand_int_between(0, total - 1);
    for content in contents {
        let weight = u64::from(content.weight);
        if ticket < weight {
            return Some(content);
        }
        ticket -= weight;
    }
    None
}
