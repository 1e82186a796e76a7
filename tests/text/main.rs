//! Integration tests for Layer 1: Text
//!
//! Tests for in-place buffer trimming.

mod buffer;
