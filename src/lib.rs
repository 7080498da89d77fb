//! Core library for the `volley` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, suite-file parsing and validation, request execution,
//! latency aggregation, and report output. The primary user-facing interface
//! is the `volley` command-line application; library APIs may evolve as the
//! CLI grows.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod metrics;
pub mod report;
pub mod runner;
