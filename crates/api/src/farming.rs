// Path: crates/api/src/farming.rs
//! Defines the `FarmingKeeper` trait.

use farming_types::app::{Params, Plan};

/// Read access to the farming module.
pub trait FarmingKeeper {
    /// Returns the current module parameters.
    fn get_params(&self) -> Params;

    /// Returns every plan, in ascending id order. The order must be stable
    /// across calls for simulations to be reproducible.
    fn get_plans(&self) -> Vec<Plan>;
}

impl<T: FarmingKeeper + ?Sized> FarmingKeeper for Box<T> {
    fn get_params(&self) -> Params {
        (**self).get_params()
    }

    fn get_plans(&self) -> Vec<Plan> {
        (**self).get_plans()
    }
}
