//! Regression test module wiring for run-controller behaviors.

mod odds_distribution;

/// Shared imports for run-controller tests.
mod support {
    pub(super) use super::super::*;
    pub(super) use crate::content::keys;
    pub(super) use crate::dice::seeded;
    pub(super) use crate::game::test_support::*;
}
