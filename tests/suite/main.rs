//! Test suite for sessiongate
//!
//! This module organizes the integration and property tests.

#[macro_use]
mod common;

mod integration;
