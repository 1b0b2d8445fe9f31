//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error type and comparison helpers used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Three-way comparison helpers.
pub mod ordering;
