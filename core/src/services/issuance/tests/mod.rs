//! Unit tests for the issuance pipeline

mod service_tests;
