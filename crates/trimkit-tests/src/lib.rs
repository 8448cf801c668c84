//! Integration test crate for Trimkit.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives the trimmer from trimkit-ui with assets and configuration
//! from trimkit-core.

#[cfg(test)]
mod trimming;

#[cfg(test)]
mod seeking;

#[cfg(test)]
mod config;
