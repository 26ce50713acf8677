//! Unit tests for secrets module
