//! Core library components.
//!
//! This module contains the reusable logic for the two release-pipeline
//! steps: keystore secret recovery and downloads page rendering.

pub mod constants;
pub mod github;
pub mod keystore;
pub mod normalize;
pub mod page;
pub mod release;
