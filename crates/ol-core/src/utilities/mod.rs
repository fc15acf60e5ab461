//! Miscellaneous utilities.

/// First-occurrence-wins de-duplication of sequences.
pub mod distinct;
