//! Unit tests for `slotgate_core`.

mod router_tests;
mod slot_tests;

mod behaviour;
