use std::fmt;

use serde_json::Error as SerdeError;

/// Aggregate errors produced by the peekdoc library.
///
/// Resolution failures ("the path names nothing") are kept distinct from
/// internal failures so the viewer can log them differently.
#[derive(Debug)]
pub enum PeekdocError {
	/// No documented object exists under the requested dotted path.
	NotFound(String),
	/// The analysis backend failed to produce documentation for a package.
	Analyze(String),
	/// A render template failed while producing Markdown.
	Render(String),
	/// Errors returned by cargo metadata queries.
	Metadata(cargo_metadata::Error),
	/// Failed to encode or decode JSON.
	Serialization(SerdeError),
	/// Failed to perform IO operations.
	Io(std::io::Error),
}

impl fmt::Display for PeekdocError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NotFound(path) => write!(f, "no documented object found for `{path}`"),
			Self::Analyze(message) => write!(f, "analysis failed: {message}"),
			Self::Render(message) => write!(f, "render failed: {message}"),
			Self::Metadata(err) => write!(f, "{err}"),
			Self::Serialization(err) => write!(f, "{err}"),
			Self::Io(err) => write!(f, "{err}"),
		}
	}
}

impl std::error::Error for PeekdocError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::NotFound(_) | Self::Analyze(_) | Self::Render(_) => None,
			Self::Metadata(err) => Some(err),
			Self::Serialization(err) => Some(err),
			Self::Io(err) => Some(err),
		}
	}
}

impl PeekdocError {
	/// Whether this error is the benign "path names nothing" case.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound(_))
	}
}

impl From<cargo_metadata::Error> for PeekdocError {
	fn from(err: cargo_metadata::Error) -> Self {
		Self::Metadata(err)
	}
}

impl From<SerdeError> for PeekdocError {
	fn from(err: SerdeError) -> Self {
		Self::Serialization(err)
	}
}

impl From<std::io::Error> for PeekdocError {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

/// Result type returned by the peekdoc library.
pub type Result<T> = std::result::Result<T, PeekdocError>;
