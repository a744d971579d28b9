//! Tests for the user lifecycle service
