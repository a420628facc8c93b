//! Unit tests for resource envelopes.
