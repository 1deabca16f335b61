//! Tests for enrollment service
