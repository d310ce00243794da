//! Integration test modules.

mod manager_flow_tests;
