//! Layer 2: Algorithms
//!
//! This layer implements the bisection core: the iterative search loops and
//! the recursive variant. All functions here are pure, allocation-free, and
//! operate on a borrowed slice through a caller-supplied three-way
//! comparison.

// Iterative bisection loops.
pub mod bisection;

// Recursive search variant.
pub mod recursion;
