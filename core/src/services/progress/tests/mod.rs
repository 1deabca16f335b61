//! Tests for progress service

#[cfg(test)]
mod service_tests;
