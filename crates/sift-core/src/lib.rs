//! # sift-core
//!
//! Core types, record ID allocation, and error types for sift.
//!
//! This crate provides the foundational types shared across all sift crates:
//! - Entity structs for analysis inputs, results, and persisted history records
//! - Verdict, factor, and source-credibility enums
//! - Record ID allocation
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
