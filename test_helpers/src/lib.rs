//! Test helpers shared across crates.
//!
//! This crate provides parsers for the compact notations the behavioural
//! suites use in step text: quoted scalars, comma lists, node tables and
//! jump-marker lists.

pub mod markers;
pub mod text;
