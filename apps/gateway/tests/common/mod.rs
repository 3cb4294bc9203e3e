#![allow(dead_code)]

// Logging is auto-installed for all integration test binaries
#[ctor::ctor]
fn init_logging() {
    gateway_test_support::logging::init();
}
