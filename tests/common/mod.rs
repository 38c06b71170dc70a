//! Common test utilities for ezmd integration tests.
//!
//! This module provides:
//! - `FakeTransfer`: records transfers, fails for chosen hosts
//! - `StaticEngine`: returns fixed Markdown and remembers the LLM attachment
//! - `WriteFetcher`: writes fixed bytes into the staging path

#![allow(dead_code)]

pub mod doubles;

pub use doubles::*;
