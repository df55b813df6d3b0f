//! Tests for the cleave-engine crate.
