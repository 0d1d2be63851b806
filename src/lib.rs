//! Svgrast - local SVG to PNG conversion.
//!
//! A single asynchronous pipeline: admit an uploaded file, read its content,
//! rasterize it at its intrinsic size, and expose the encoded PNG for
//! preview and download. This library exposes modules for integration
//! testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
