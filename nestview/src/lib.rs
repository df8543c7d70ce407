//! Rendering and pagination engine for the output of a 2D nesting (bin-packing) run.
//!
//! A [`NestingResult`](entities::NestingResult) produced by an external packing engine is installed
//! into a [`PaginationController`](pagination::PaginationController), which groups the placements per
//! sheet instance, renders the selected sheet as an SVG layout and exports it as a standalone document.

/// Entities modelling a nesting result: placements, sheet definitions and statistics
pub mod entities;

/// Error taxonomy of the rendering and pagination engine
pub mod error;

/// Serialization of the currently rendered sheet into a standalone SVG document
pub mod export;

/// Geometric primitives and the transform pipeline used to position part outlines
pub mod geometry;

/// Bucketing of placements per sheet instance and resolving instances back to their definition
pub mod grouping;

/// Importing the packing engine's external (JSON) representation
pub mod io;

/// State machine over the used sheets of the installed result
pub mod pagination;

/// Uploaded part rows, their 3D viewer lifecycle and the sheet list of a nesting job
pub mod parts;

/// Drawing a single sheet and its placements as an SVG layout
pub mod render;

/// Textual summary of a nesting result
pub mod summary;

/// Helper functions which do not belong to any specific module
pub mod util;
