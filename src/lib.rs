//! tagdb - tagged comment extractor
//!
//! tagdb scans a firmware source tree for specially tagged comments and
//! writes them out as XML databases for the dashboard: state message
//! descriptions (`/*#NAME ...*/`) and setting descriptions
//! (`/*AIRSETTING key="value" ...*/`).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline (scan, match, validate, serialize)

pub mod cli;
pub mod config;
pub mod core;
