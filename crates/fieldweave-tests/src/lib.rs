//! Integration test crate for FieldWeave.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the core, timeline and compose crates to verify they work together.

#[cfg(test)]
mod support;


#[cfg(test)]
mod construction;

#[cfg(test)]
mod concurrency;
