#![allow(dead_code)]

pub mod app_builder;
pub mod state_helpers;

// Re-export only what current tests actually import
pub use app_builder::create_test_app;
pub use state_helpers::{build_test_state, build_test_state_with_env};
