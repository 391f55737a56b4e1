//! rustdoc JSON generation backend.
//!
//! Maps a top-level package name onto a manifest in the current workspace's
//! dependency graph, drives `rustdoc +nightly` through the `rustdoc-json`
//! crate, and parses the result with `rustdoc-types`.

use std::fs;
use std::path::PathBuf;

use cargo_metadata::{Metadata, MetadataCommand};
use rustdoc_types::Crate;

use super::cache::{self, CacheConfig, CacheKey};
use super::index::normalize_package;
use crate::error::{PeekdocError, Result};

/// Analysis backend configuration and cargo metadata session.
#[derive(Debug, Default)]
pub struct Backend {
	/// Prevent cargo from touching the network.
	offline: bool,
	/// Include private items in the generated documentation.
	private_items: bool,
	/// Disk cache settings for parsed rustdoc output.
	cache_config: CacheConfig,
	/// Directory whose workspace defines the set of installed packages.
	/// Defaults to the current working directory.
	manifest_dir: Option<PathBuf>,
	/// Metadata for the active workspace, fetched once per process.
	metadata: Option<Metadata>,
}

impl Backend {
	/// Create a backend with default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enable or disable offline mode.
	pub fn set_offline(&mut self, offline: bool) {
		self.offline = offline;
	}

	/// Include private items when generating documentation.
	pub fn set_private_items(&mut self, private_items: bool) {
		self.private_items = private_items;
	}

	/// Replace the cache configuration.
	pub fn set_cache_config(&mut self, cache_config: CacheConfig) {
		self.cache_config = cache_config;
	}

	/// Anchor the workspace lookup at a specific directory.
	pub fn set_manifest_dir(&mut self, dir: PathBuf) {
		self.manifest_dir = Some(dir);
	}

	/// Fetch (and memoize) cargo metadata for the active workspace.
	fn metadata(&mut self) -> Result<&Metadata> {
		if self.metadata.is_none() {
			let mut cmd = MetadataCommand::new();
			if let Some(ref dir) = self.manifest_dir {
				cmd.current_dir(dir);
			}
			if self.offline {
				cmd.other_options(vec!["--offline".to_string()]);
			}
			self.metadata = Some(cmd.exec()?);
		}
		self.metadata
			.as_ref()
			.ok_or_else(|| PeekdocError::Analyze("cargo metadata unavailable".to_string()))
	}

	/// Every package name in the resolved dependency graph, underscore
	/// normalized, sorted, and deduplicated.
	pub fn installed_packages(&mut self) -> Result<Vec<String>> {
		let metadata = self.metadata()?;
		let mut names: Vec<String> = metadata
			.packages
			.iter()
			.map(|package| normalize_package(package.name.as_str()))
			.filter(|name| !name.starts_with('_'))
			.collect();
		names.sort();
		names.dedup();
		Ok(names)
	}

	/// Generate (or load from cache) the parsed rustdoc output for one
	/// top-level package.
	pub fn read_package(&mut self, package: &str) -> Result<Crate> {
		let (manifest_path, package_info) = self.find_manifest(package)?;
		let private_items = self.private_items;
		let cache_config = self.cache_config.clone();

		let key = CacheKey::new(
			manifest_path.clone(),
			package_info,
			private_items,
			cache::get_toolchain_version(),
		);

		match cache::load_cached(&cache_config, &key) {
			Ok(Some(crate_data)) => return Ok(crate_data),
			Ok(None) => {}
			Err(err) => log::warn!("documentation cache miss for `{package}`: {err}"),
		}

		let json_path = rustdoc_json::Builder::default()
			.toolchain("nightly")
			.manifest_path(&manifest_path)
			.document_private_items(private_items)
			.silent(true)
			.build()
			.map_err(|e| {
				PeekdocError::Analyze(format!("rustdoc JSON generation failed for `{package}`: {e}"))
			})?;

		let data = fs::read_to_string(&json_path)?;
		let crate_data: Crate = serde_json::from_str(&data)?;

		if let Err(err) = cache::save_cached(&cache_config, &key, &crate_data) {
			log::warn!("failed to cache documentation for `{package}`: {err}");
		}

		Ok(crate_data)
	}

	/// Locate the manifest of a package within the workspace's dependency
	/// graph. The lookup is underscore insensitive, matching the crate name
	/// rustdoc reports.
	fn find_manifest(&mut self, package: &str) -> Result<(PathBuf, String)> {
		let wanted = normalize_package(package);
		let metadata = self.metadata()?;

		metadata
			.packages
			.iter()
			.find(|candidate| normalize_package(candidate.name.as_str()) == wanted)
			.map(|candidate| {
				(
					candidate.manifest_path.clone().into_std_path_buf(),
					format!("{}-{}", candidate.name, candidate.version),
				)
			})
			.ok_or_else(|| {
				PeekdocError::Analyze(format!(
					"package `{package}` is not part of the current workspace's dependency graph"
				))
			})
	}
}
