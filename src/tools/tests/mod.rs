//! Unit tests for the discovery tools.
