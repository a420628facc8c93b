//! Unit tests for the descriptor model.
//!
//! Tests are organised by record kind, covering construction, wire parsing,
//! and every structural invariant.
