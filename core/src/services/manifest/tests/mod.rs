//! Tests for manifest service
