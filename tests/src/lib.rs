//! # Ember-Chain Test Suite
//!
//! Unified test crate for scenarios that cross subsystem boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fork_choice.rs   # chain replacement and the end-to-end scenario
//!     ├── pool_flow.rs     # pending pool kept consistent with the store
//!     └── wire.rs          # lossless wire round-trips
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ec-tests
//!
//! # By category
//! cargo test -p ec-tests integration::fork_choice::
//! ```

#![allow(dead_code)]

pub mod integration;
