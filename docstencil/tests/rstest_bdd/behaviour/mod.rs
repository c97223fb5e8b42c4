//! Behavioural test harness for `docstencil` using `rstest-bdd`.
//!
//! Step implementations live under [`steps`], while [`scenarios`] binds the
//! `.feature` files to the shared fixtures.

mod scenarios;
pub mod steps;
