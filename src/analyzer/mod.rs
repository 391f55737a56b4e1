//! Static analysis of installed packages.
//!
//! [`DocAnalyzer`] owns the object collection: a lazily populated mapping
//! from dotted path to documented-object handle. Packages are analyzed at
//! most once per process and never invalidated.

/// rustdoc JSON generation backend.
pub mod backend;
/// Disk cache for parsed rustdoc output.
pub mod cache;
/// Dotted-path indexing of parsed crates.
pub mod index;

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use rustdoc_types::{Crate, Id, Item};

pub use self::cache::CacheConfig;
pub use self::index::{Handle, ObjectKind, PendingAlias, normalize_package};
use crate::error::Result;

/// The Resolver's seam onto the analysis side.
///
/// `DocAnalyzer` is the production implementation; tests substitute fakes to
/// observe load behavior without driving rustdoc.
pub trait ObjectGraph {
	/// Exact-match lookup of a dotted path in the object collection.
	fn lookup(&self, path: &str) -> Option<Handle>;

	/// Analyze one top-level package, populating the collection.
	fn load(&mut self, package: &str) -> Result<()>;

	/// Connect deferred re-export aliases to their targets.
	///
	/// With `external` set, aliases may resolve into other already-loaded
	/// packages; this never triggers analysis of further packages. With
	/// `implicit` unset, glob re-exports are left pending.
	fn resolve_aliases(&mut self, external: bool, implicit: bool);
}

/// Lazily populated collection of documented objects across packages.
#[derive(Debug, Default)]
pub struct DocAnalyzer {
	/// Dotted path to handle for every indexed object.
	collection: BTreeMap<String, Handle>,
	/// Parsed rustdoc output per loaded package.
	crates: HashMap<String, Crate>,
	/// Canonical dotted path per item id, per package.
	paths: HashMap<String, HashMap<Id, String>>,
	/// Re-exports whose targets are not connected yet.
	pending: Vec<PendingAlias>,
	/// Documentation generation backend.
	backend: backend::Backend,
}

impl DocAnalyzer {
	/// Create an analyzer with default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enable or disable offline mode for cargo invocations.
	pub fn with_offline(mut self, offline: bool) -> Self {
		self.backend.set_offline(offline);
		self
	}

	/// Include private items in analyzed documentation.
	pub fn with_private_items(mut self, private_items: bool) -> Self {
		self.backend.set_private_items(private_items);
		self
	}

	/// Enable or disable the rustdoc JSON disk cache.
	pub fn with_cache(mut self, enabled: bool) -> Self {
		self.backend.set_cache_config(if enabled {
			CacheConfig::new()
		} else {
			CacheConfig::disabled()
		});
		self
	}

	/// Use a custom cache directory.
	pub fn with_cache_dir(mut self, dir: PathBuf) -> Self {
		self.backend.set_cache_config(CacheConfig::new().with_cache_dir(dir));
		self
	}

	/// Anchor the workspace lookup at a specific directory.
	pub fn with_manifest_dir(mut self, dir: PathBuf) -> Self {
		self.backend.set_manifest_dir(dir);
		self
	}

	/// Whether a top-level package has already been analyzed.
	pub fn loaded(&self, package: &str) -> bool {
		self.crates.contains_key(&normalize_package(package))
	}

	/// Parsed rustdoc output for a loaded package.
	pub fn crate_for(&self, package: &str) -> Option<&Crate> {
		self.crates.get(&normalize_package(package))
	}

	/// The rustdoc item a handle refers to.
	pub fn item(&self, handle: &Handle) -> Option<&Item> {
		self.crates.get(&handle.package)?.index.get(&handle.id)
	}

	/// Canonical dotted path for an item id inside a loaded package.
	pub fn dotted_path(&self, package: &str, id: Id) -> Option<&str> {
		self.paths.get(package)?.get(&id).map(String::as_str)
	}

	/// Every package name in the workspace's resolved dependency graph.
	pub fn installed_packages(&mut self) -> Result<Vec<String>> {
		self.backend.installed_packages()
	}

	/// Merge a freshly built package index into the collection.
	fn absorb(&mut self, package: String, crate_data: Crate, index: index::PackageIndex) {
		let by_id = self.paths.entry(package.clone()).or_default();
		for handle in index.entries {
			by_id.entry(handle.id).or_insert_with(|| handle.path.clone());
			self.collection.entry(handle.path.clone()).or_insert(handle);
		}
		self.pending.extend(index.aliases);
		self.crates.insert(package, crate_data);
	}
}

impl ObjectGraph for DocAnalyzer {
	fn lookup(&self, path: &str) -> Option<Handle> {
		self.collection.get(path).cloned()
	}

	fn load(&mut self, package: &str) -> Result<()> {
		let package = normalize_package(package);
		if self.crates.contains_key(&package) {
			return Ok(());
		}
		let crate_data = self.backend.read_package(&package)?;
		let index = index::index_package(&package, &crate_data);
		log::info!(
			"analyzed package `{package}`: {} documented objects",
			index.entries.len()
		);
		self.absorb(package, crate_data, index);
		Ok(())
	}

	fn resolve_aliases(&mut self, external: bool, implicit: bool) {
		// Aliases can point at other aliases, so iterate to a fixpoint.
		loop {
			let mut remaining = Vec::new();
			let mut progressed = false;

			for alias in std::mem::take(&mut self.pending) {
				if alias.is_glob && !implicit {
					remaining.push(alias);
					continue;
				}
				let target = alias.target_path();
				let top_level = target.split('.').next().unwrap_or_default();
				if !external && top_level != alias.package {
					remaining.push(alias);
					continue;
				}
				match self.collection.get(&target).cloned() {
					Some(handle) => {
						self.collection.entry(alias.path.clone()).or_insert(handle);
						progressed = true;
					}
					None => remaining.push(alias),
				}
			}

			self.pending = remaining;
			if !progressed {
				break;
			}
		}
	}
}
