//! Database layer tests

mod connection_tests;
