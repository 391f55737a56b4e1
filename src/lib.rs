//! Core library for peekdoc, a terminal viewer for API documentation.
//!
//! The pipeline has three stages: [`analyzer`] turns installed packages
//! into a collection of documented objects addressable by dotted path,
//! [`render`] turns one object into a Markdown page, and [`resolver`]
//! glues the two together behind a single `resolve(path)` entry point.
//! The [`viewer`] module is the interactive frontend; the lower layers
//! are UI-agnostic and usable on their own.

/// Static analysis of installed packages.
pub mod analyzer;
/// Error types shared across the crate.
pub mod error;
/// Markdown rendering of documented objects.
pub mod render;
/// Dotted-path resolution pipeline.
pub mod resolver;
/// Interactive terminal frontend.
pub mod viewer;
/// The welcome page.
pub mod welcome;

pub use crate::analyzer::{DocAnalyzer, Handle, ObjectGraph, ObjectKind};
pub use crate::error::{PeekdocError, Result};
pub use crate::render::{RenderMarkdown, RenderOptions, Renderer};
pub use crate::resolver::{Document, Resolver, normalize_path};
