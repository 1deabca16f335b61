//! Tests for course catalog service

#[cfg(test)]
mod service_tests;
