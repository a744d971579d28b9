//! Tests for the user repository port

#[cfg(test)]
mod mock_tests;
