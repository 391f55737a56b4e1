//! Disk cache for parsed rustdoc JSON output.
//!
//! Generating documentation for a package is by far the slowest step of a
//! resolution, so parsed crates are cached on disk keyed by the build
//! parameters that affect their content.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::{env, fs};

use rustdoc_types::Crate;

use crate::error::{PeekdocError, Result};

/// Configuration for the documentation cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
	/// Whether caching is enabled.
	pub enabled: bool,
	/// Directory where cached documentation is stored.
	/// If None, uses the default cache directory.
	pub cache_dir: Option<PathBuf>,
}

impl Default for CacheConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			cache_dir: None,
		}
	}
}

impl CacheConfig {
	/// Create a new cache configuration with caching enabled.
	pub fn new() -> Self {
		Self::default()
	}

	/// Disable caching.
	pub fn disabled() -> Self {
		Self {
			enabled: false,
			cache_dir: None,
		}
	}

	/// Set a custom cache directory.
	pub fn with_cache_dir(mut self, dir: PathBuf) -> Self {
		self.cache_dir = Some(dir);
		self
	}

	/// Get the cache directory, using the default if not specified.
	fn get_cache_dir(&self) -> Result<PathBuf> {
		if let Some(ref dir) = self.cache_dir {
			return Ok(dir.clone());
		}

		if let Ok(dir) = env::var("PEEKDOC_CACHE_DIR") {
			return Ok(PathBuf::from(dir));
		}

		let cache_base = dirs::cache_dir().ok_or_else(|| {
			PeekdocError::Analyze("could not determine cache directory".to_string())
		})?;

		Ok(cache_base.join("peekdoc"))
	}
}

/// Parameters that affect the cache key for a package build.
#[derive(Debug)]
pub struct CacheKey {
	/// Package name and version.
	pub package_info: String,
	/// Absolute path to the package manifest.
	pub manifest_path: PathBuf,
	/// Whether private items are included.
	pub private_items: bool,
	/// Rust toolchain version (to handle rustdoc JSON format changes).
	pub toolchain_version: Option<String>,
}

impl CacheKey {
	/// Generate a cache key from build parameters.
	pub fn new(
		manifest_path: PathBuf,
		package_info: String,
		private_items: bool,
		toolchain_version: Option<String>,
	) -> Self {
		Self {
			package_info,
			manifest_path,
			private_items,
			toolchain_version,
		}
	}

	/// Compute a stable hash for this cache key.
	fn hash(&self) -> String {
		let mut hasher = DefaultHasher::new();
		self.manifest_path.hash(&mut hasher);
		self.package_info.hash(&mut hasher);
		self.private_items.hash(&mut hasher);
		self.toolchain_version.hash(&mut hasher);
		format!("{:x}", hasher.finish())
	}

	/// Get the cache file path for this key.
	fn cache_path(&self, cache_dir: &Path) -> PathBuf {
		let hash = self.hash();
		cache_dir.join(format!("{}.bin", hash))
	}
}

/// Try to load cached documentation for the given parameters.
pub fn load_cached(config: &CacheConfig, key: &CacheKey) -> Result<Option<Crate>> {
	if !config.enabled {
		return Ok(None);
	}

	let cache_dir = config.get_cache_dir()?;
	let cache_path = key.cache_path(&cache_dir);

	if !cache_path.exists() {
		return Ok(None);
	}

	let data = fs::read(&cache_path).map_err(|e| {
		PeekdocError::Analyze(format!(
			"failed to read cache file {}: {}",
			cache_path.display(),
			e
		))
	})?;

	let config = bincode::config::standard();
	let (crate_data, _len): (Crate, usize) = bincode::serde::decode_from_slice(&data, config)
		.map_err(|e| {
			// A decode failure means the cache is stale or corrupted.
			let _ = fs::remove_file(&cache_path);
			PeekdocError::Analyze(format!(
				"cache deserialization failed (removing stale cache): {}",
				e
			))
		})?;

	Ok(Some(crate_data))
}

/// Save documentation to the cache.
pub fn save_cached(config: &CacheConfig, key: &CacheKey, crate_data: &Crate) -> Result<()> {
	if !config.enabled {
		return Ok(());
	}

	let cache_dir = config.get_cache_dir()?;

	fs::create_dir_all(&cache_dir).map_err(|e| {
		PeekdocError::Analyze(format!(
			"failed to create cache directory {}: {}",
			cache_dir.display(),
			e
		))
	})?;

	let cache_path = key.cache_path(&cache_dir);

	let config = bincode::config::standard();
	let data = bincode::serde::encode_to_vec(crate_data, config)
		.map_err(|e| PeekdocError::Analyze(format!("failed to serialize cache data: {}", e)))?;

	// Write to a temporary file first, then rename atomically.
	let temp_path = cache_path.with_extension("tmp");
	fs::write(&temp_path, &data).map_err(|e| {
		PeekdocError::Analyze(format!(
			"failed to write cache file {}: {}",
			temp_path.display(),
			e
		))
	})?;

	fs::rename(&temp_path, &cache_path).map_err(|e| {
		PeekdocError::Analyze(format!(
			"failed to finalize cache file {}: {}",
			cache_path.display(),
			e
		))
	})?;

	Ok(())
}

/// Get the current Rust toolchain version for cache invalidation.
pub fn get_toolchain_version() -> Option<String> {
	use std::process::Command;

	let output = Command::new("rustup")
		.args(["run", "nightly", "rustc", "--version"])
		.output()
		.ok()
		.filter(|output| output.status.success())
		.or_else(|| {
			Command::new("rustc")
				.arg("--version")
				.output()
				.ok()
				.filter(|output| output.status.success())
		})?;

	Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cache_key_hash_is_stable() {
		let manifest = PathBuf::from("/path/to/Cargo.toml");
		let key1 = CacheKey::new(
			manifest.clone(),
			"demo-0.1.0".to_string(),
			false,
			Some("rustc 1.90.0-nightly".to_string()),
		);
		let key2 = CacheKey::new(
			manifest,
			"demo-0.1.0".to_string(),
			false,
			Some("rustc 1.90.0-nightly".to_string()),
		);

		assert_eq!(key1.hash(), key2.hash());
	}

	#[test]
	fn custom_cache_dir_wins_over_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let config = CacheConfig::new().with_cache_dir(dir.path().to_path_buf());
		assert_eq!(config.get_cache_dir().unwrap(), dir.path());
	}

	#[test]
	fn disabled_cache_never_touches_disk() {
		let key = CacheKey::new(
			PathBuf::from("/nonexistent/Cargo.toml"),
			"demo-0.1.0".to_string(),
			false,
			None,
		);
		assert!(load_cached(&CacheConfig::disabled(), &key).unwrap().is_none());
	}

	#[test]
	fn cache_key_hash_tracks_build_flags() {
		let manifest = PathBuf::from("/path/to/Cargo.toml");
		let key1 = CacheKey::new(manifest.clone(), "demo-0.1.0".to_string(), false, None);
		let key2 = CacheKey::new(manifest, "demo-0.1.0".to_string(), true, None);

		assert_ne!(key1.hash(), key2.hash());
	}
}
