//! Layer 3: Engine
//!
//! This layer holds the pre-flight checks shared by the fallible API
//! operations. The search loops themselves are infallible; the only thing
//! to validate is that a sequence was attached at all.

/// Validation utilities.
pub mod validator;
