//! Unit tests for domain entities

mod email_message_tests;
