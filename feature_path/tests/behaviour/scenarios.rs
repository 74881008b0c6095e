//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{
    CollectorContext, PathContext, SupplyContext, collector_context, path_context,
    supply_context,
};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/feature_path.feature",
    fixtures = [path_context: PathContext]
);
scenarios!(
    "tests/features/feature_collector.feature",
    fixtures = [collector_context: CollectorContext]
);
scenarios!(
    "tests/features/feature_supply.feature",
    fixtures = [supply_context: SupplyContext]
);
