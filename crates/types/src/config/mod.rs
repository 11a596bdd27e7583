// Path: crates/types/src/config/mod.rs

//! Simulation configuration.
//!
//! Every field has a serde default, so a partial TOML document (or an empty
//! one) yields a usable configuration.

use crate::app::Params;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Parameter key of the add-public-plan proposal weight.
pub const OP_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL: &str = "op_weight_add_public_plan_proposal";
/// Parameter key of the update-public-plan proposal weight.
pub const OP_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL: &str = "op_weight_update_public_plan_proposal";
/// Parameter key of the delete-public-plan proposal weight.
pub const OP_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL: &str = "op_weight_delete_public_plan_proposal";

/// Default weight of the add-public-plan proposal.
pub const DEFAULT_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL: u32 = 5;
/// Default weight of the update-public-plan proposal.
pub const DEFAULT_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL: u32 = 5;
/// Default weight of the delete-public-plan proposal.
pub const DEFAULT_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL: u32 = 5;

/// Relative frequencies of the three proposal kinds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProposalWeights {
    /// Weight of add-public-plan proposals.
    #[serde(
        rename = "op_weight_add_public_plan_proposal",
        default = "default_weight_add"
    )]
    pub add_public_plan: u32,
    /// Weight of update-public-plan proposals.
    #[serde(
        rename = "op_weight_update_public_plan_proposal",
        default = "default_weight_update"
    )]
    pub update_public_plan: u32,
    /// Weight of delete-public-plan proposals.
    #[serde(
        rename = "op_weight_delete_public_plan_proposal",
        default = "default_weight_delete"
    )]
    pub delete_public_plan: u32,
}

fn default_weight_add() -> u32 {
    DEFAULT_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL
}
fn default_weight_update() -> u32 {
    DEFAULT_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL
}
fn default_weight_delete() -> u32 {
    DEFAULT_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL
}

impl Default for ProposalWeights {
    fn default() -> Self {
        Self {
            add_public_plan: default_weight_add(),
            update_public_plan: default_weight_update(),
            delete_public_plan: default_weight_delete(),
        }
    }
}

impl ProposalWeights {
    /// Looks up a weight by its operation parameter key.
    pub fn by_key(&self, key: &str) -> Option<u32> {
        match key {
            OP_WEIGHT_ADD_PUBLIC_PLAN_PROPOSAL => Some(self.add_public_plan),
            OP_WEIGHT_UPDATE_PUBLIC_PLAN_PROPOSAL => Some(self.update_public_plan),
            OP_WEIGHT_DELETE_PUBLIC_PLAN_PROPOSAL => Some(self.delete_public_plan),
            _ => None,
        }
    }
}

/// Top-level configuration of a farming simulation run.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Proposal operation weights.
    #[serde(default)]
    pub weights: ProposalWeights,
    /// Genesis farming parameters.
    #[serde(default)]
    pub params: Params,
}

impl SimulationConfig {
    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
