//! Internal test modules - whitebox tests with crate access
//!
//! Tests here can reach private items and the test harness, so they check
//! invariants that the public API alone cannot observe.

mod flow_properties;
