//! Shared test helpers for `autocrm-core` integration tests.
//!
//! In-memory port mocks plus fixtures for viewers and tickets, so scenario
//! tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
