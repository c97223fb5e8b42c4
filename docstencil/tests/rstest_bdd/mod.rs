//! `rstest-bdd` scaffolding for `docstencil`.
//!
//! The modules defined alongside this entrypoint register the shared
//! scenario state and step implementations, then bind the `.feature` files
//! under `tests/features` to them.

mod behaviour;
mod fixtures;
