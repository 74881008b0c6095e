//! Behavioural step modules registered with `rstest-bdd`.

pub mod collector_steps;
pub mod path_steps;
pub mod supply_steps;
