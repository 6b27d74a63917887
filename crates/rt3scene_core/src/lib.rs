//! Public library API for extracting typed parameters from RT3 scene files.

/// Scene document walking, schema-driven attribute decoding, and setup dispatch.
pub mod scene;
