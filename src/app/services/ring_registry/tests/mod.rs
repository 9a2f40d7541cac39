//! Tests for the ring registry service

mod loader_tests;
