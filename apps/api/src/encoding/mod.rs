//! Feature-name reconciliation and encoding pipeline.
//!
//! Translates the form's display labels into the training-time feature
//! columns, encodes submitted answers into the fixed 19-column frame the
//! scoring backend expects, and decodes the classifier's output back into a
//! career label with a confidence percentage.

pub mod codebook;
pub mod decoder;
pub mod encoder;
pub mod schema;
