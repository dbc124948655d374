//! Test helpers and fixtures

pub mod helpers;
