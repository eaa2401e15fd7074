//! Test fixtures and data generators
//!
//! This module contains builders for creating synthetic ID3v2.3 tag buffers.

pub mod builders;

pub use builders::*;
