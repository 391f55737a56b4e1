//! Walks a parsed rustdoc crate and assigns a dotted path to every
//! documented item reachable from the crate root.

use std::collections::HashSet;

use rustdoc_types::{Crate, Id, Item, ItemEnum};

/// Classified kind of a documented object.
///
/// Used purely to select a render template; the mapping is a plain lookup
/// in [`crate::render::template_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
	/// Regular module (including the crate root).
	Module,
	/// Struct definition.
	Struct,
	/// Union definition.
	Union,
	/// Enum definition.
	Enum,
	/// Variant within an enum.
	Variant,
	/// Named or positional field within a struct or union.
	Field,
	/// Trait definition.
	Trait,
	/// Trait alias definition.
	TraitAlias,
	/// Free function.
	Function,
	/// Method inside an inherent impl block or a trait body.
	Method,
	/// Top-level constant.
	Constant,
	/// Static item.
	Static,
	/// Type alias.
	TypeAlias,
	/// Associated constant.
	AssocConst,
	/// Associated type.
	AssocType,
	/// `macro_rules!` definition.
	Macro,
	/// Procedural macro entrypoint.
	ProcMacro,
	/// Primitive type description.
	Primitive,
}

impl ObjectKind {
	/// Human-friendly label describing the object kind.
	pub fn label(self) -> &'static str {
		match self {
			Self::Module => "module",
			Self::Struct => "struct",
			Self::Union => "union",
			Self::Enum => "enum",
			Self::Variant => "enum variant",
			Self::Field => "field",
			Self::Trait => "trait",
			Self::TraitAlias => "trait alias",
			Self::Function => "function",
			Self::Method => "method",
			Self::Constant => "constant",
			Self::Static => "static",
			Self::TypeAlias => "type alias",
			Self::AssocConst => "assoc const",
			Self::AssocType => "assoc type",
			Self::Macro => "macro",
			Self::ProcMacro => "proc macro",
			Self::Primitive => "primitive",
		}
	}
}

/// Opaque reference to one documented object in an analyzed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
	/// Top-level package the object was analyzed from.
	pub package: String,
	/// Identifier of the item inside that package's rustdoc index.
	pub id: Id,
	/// Kind discriminator used to select a render template.
	pub kind: ObjectKind,
	/// Canonical dotted path of the object.
	pub path: String,
}

/// A `use` re-export whose target has not been connected to a handle yet.
#[derive(Debug, Clone)]
pub struct PendingAlias {
	/// Dotted path of the alias site (where the re-export is visible).
	pub path: String,
	/// Package the re-export appears in.
	pub package: String,
	/// Raw rustdoc `use` source, `::`-separated.
	pub source: String,
	/// Whether this is a glob re-export.
	pub is_glob: bool,
}

impl PendingAlias {
	/// Dotted path the alias points at, with `crate`/`self` prefixes
	/// rewritten to the owning package name.
	pub fn target_path(&self) -> String {
		let dotted = self.source.replace("::", ".");
		if let Some(rest) = dotted.strip_prefix("crate.") {
			format!("{}.{rest}", self.package)
		} else if let Some(rest) = dotted.strip_prefix("self.") {
			format!("{}.{rest}", self.package)
		} else if dotted == "crate" || dotted == "self" {
			self.package.clone()
		} else {
			dotted
		}
	}
}

/// Paths and deferred aliases extracted from one analyzed package.
#[derive(Debug, Default)]
pub struct PackageIndex {
	/// Dotted path entries discovered in the package.
	pub entries: Vec<Handle>,
	/// Re-exports whose targets must be connected later.
	pub aliases: Vec<PendingAlias>,
}

/// Normalize a package name into the identifier rustdoc uses as the crate
/// root (dashes become underscores).
pub fn normalize_package(name: &str) -> String {
	name.replace('-', "_")
}

/// Build the dotted-path index for a freshly analyzed package.
pub fn index_package(package: &str, krate: &Crate) -> PackageIndex {
	let mut index = PackageIndex::default();
	let mut visited = HashSet::new();
	let package = normalize_package(package);

	if let Some(root) = krate.index.get(&krate.root) {
		index.entries.push(Handle {
			package: package.clone(),
			id: krate.root,
			kind: ObjectKind::Module,
			path: package.clone(),
		});
		visited.insert(krate.root);
		walk_module(&mut index, &mut visited, krate, &package, &package, root);
	}

	index
}

/// Recurse into a module item, indexing its children.
fn walk_module(
	index: &mut PackageIndex,
	visited: &mut HashSet<Id>,
	krate: &Crate,
	package: &str,
	prefix: &str,
	item: &Item,
) {
	let ItemEnum::Module(module) = &item.inner else {
		return;
	};

	for child_id in &module.items {
		if !visited.insert(*child_id) {
			continue;
		}
		let Some(child) = krate.index.get(child_id) else {
			continue;
		};
		walk_item(index, visited, krate, package, prefix, child);
	}
}

/// Index one item and, for containers, its nested members.
fn walk_item(
	index: &mut PackageIndex,
	visited: &mut HashSet<Id>,
	krate: &Crate,
	package: &str,
	prefix: &str,
	item: &Item,
) {
	match &item.inner {
		ItemEnum::Module(_) => {
			if let Some(path) = record(index, package, prefix, item, ObjectKind::Module) {
				walk_module(index, visited, krate, package, &path, item);
			}
		}
		ItemEnum::Use(use_item) => {
			index.aliases.push(PendingAlias {
				path: join(prefix, &use_item.name),
				package: package.to_string(),
				source: use_item.source.clone(),
				is_glob: use_item.is_glob,
			});
		}
		ItemEnum::Struct(inner) => {
			if let Some(path) = record(index, package, prefix, item, ObjectKind::Struct) {
				walk_fields(index, krate, package, &path, inner.kind.clone());
				walk_impls(index, visited, krate, package, &path, &inner.impls);
			}
		}
		ItemEnum::Union(inner) => {
			if let Some(path) = record(index, package, prefix, item, ObjectKind::Union) {
				for field_id in &inner.fields {
					record_child(index, krate, package, &path, *field_id, ObjectKind::Field);
				}
				walk_impls(index, visited, krate, package, &path, &inner.impls);
			}
		}
		ItemEnum::Enum(inner) => {
			if let Some(path) = record(index, package, prefix, item, ObjectKind::Enum) {
				for variant_id in &inner.variants {
					record_child(index, krate, package, &path, *variant_id, ObjectKind::Variant);
				}
				walk_impls(index, visited, krate, package, &path, &inner.impls);
			}
		}
		ItemEnum::Trait(inner) => {
			if let Some(path) = record(index, package, prefix, item, ObjectKind::Trait) {
				for assoc_id in &inner.items {
					let Some(assoc) = krate.index.get(assoc_id) else {
						continue;
					};
					let kind = match &assoc.inner {
						ItemEnum::Function(_) => ObjectKind::Method,
						ItemEnum::AssocConst { .. } => ObjectKind::AssocConst,
						ItemEnum::AssocType { .. } => ObjectKind::AssocType,
						_ => continue,
					};
					record(index, package, &path, assoc, kind);
				}
			}
		}
		ItemEnum::TraitAlias(_) => {
			record(index, package, prefix, item, ObjectKind::TraitAlias);
		}
		ItemEnum::Function(_) => {
			record(index, package, prefix, item, ObjectKind::Function);
		}
		ItemEnum::Constant { .. } => {
			record(index, package, prefix, item, ObjectKind::Constant);
		}
		ItemEnum::Static(_) => {
			record(index, package, prefix, item, ObjectKind::Static);
		}
		ItemEnum::TypeAlias(_) => {
			record(index, package, prefix, item, ObjectKind::TypeAlias);
		}
		ItemEnum::Macro(_) => {
			record(index, package, prefix, item, ObjectKind::Macro);
		}
		ItemEnum::ProcMacro(_) => {
			record(index, package, prefix, item, ObjectKind::ProcMacro);
		}
		ItemEnum::Primitive(inner) => {
			if let Some(path) = record(index, package, prefix, item, ObjectKind::Primitive) {
				walk_impls(index, visited, krate, package, &path, &inner.impls);
			}
		}
		// Impl blocks are reached through their owning type; extern crates
		// and the remaining item kinds have no dotted-path identity.
		_ => {}
	}
}

/// Index methods and associated items from a type's inherent impl blocks.
fn walk_impls(
	index: &mut PackageIndex,
	visited: &mut HashSet<Id>,
	krate: &Crate,
	package: &str,
	prefix: &str,
	impls: &[Id],
) {
	for impl_id in impls {
		let Some(impl_item) = krate.index.get(impl_id) else {
			continue;
		};
		let ItemEnum::Impl(block) = &impl_item.inner else {
			continue;
		};
		// Only inherent impls contribute dotted paths; trait impls are
		// listed on the rendered page instead.
		if block.trait_.is_some() || block.is_synthetic {
			continue;
		}
		for member_id in &block.items {
			if !visited.insert(*member_id) {
				continue;
			}
			let Some(member) = krate.index.get(member_id) else {
				continue;
			};
			let kind = match &member.inner {
				ItemEnum::Function(_) => ObjectKind::Method,
				ItemEnum::AssocConst { .. } => ObjectKind::AssocConst,
				ItemEnum::AssocType { .. } => ObjectKind::AssocType,
				_ => continue,
			};
			record(index, package, prefix, member, kind);
		}
	}
}

/// Index the fields of a struct.
fn walk_fields(
	index: &mut PackageIndex,
	krate: &Crate,
	package: &str,
	prefix: &str,
	kind: rustdoc_types::StructKind,
) {
	match kind {
		rustdoc_types::StructKind::Unit => {}
		rustdoc_types::StructKind::Tuple(fields) => {
			for field_id in fields.into_iter().flatten() {
				record_child(index, krate, package, prefix, field_id, ObjectKind::Field);
			}
		}
		rustdoc_types::StructKind::Plain { fields, .. } => {
			for field_id in fields {
				record_child(index, krate, package, prefix, field_id, ObjectKind::Field);
			}
		}
	}
}

/// Record an entry for a named item, returning its dotted path.
fn record(
	index: &mut PackageIndex,
	package: &str,
	prefix: &str,
	item: &Item,
	kind: ObjectKind,
) -> Option<String> {
	let name = item.name.as_deref()?;
	let path = join(prefix, name);
	index.entries.push(Handle {
		package: package.to_string(),
		id: item.id,
		kind,
		path: path.clone(),
	});
	Some(path)
}

/// Record an entry for a child item referenced by id.
fn record_child(
	index: &mut PackageIndex,
	krate: &Crate,
	package: &str,
	prefix: &str,
	id: Id,
	kind: ObjectKind,
) {
	if let Some(item) = krate.index.get(&id) {
		record(index, package, prefix, item, kind);
	}
}

/// Join a dotted prefix with a child name.
fn join(prefix: &str, name: &str) -> String {
	if prefix.is_empty() {
		name.to_string()
	} else {
		format!("{prefix}.{name}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn alias_target_rewrites_crate_prefix() {
		let alias = PendingAlias {
			path: "demo.Thing".to_string(),
			package: "demo".to_string(),
			source: "crate::inner::Thing".to_string(),
			is_glob: false,
		};
		assert_eq!(alias.target_path(), "demo.inner.Thing");
	}

	#[test]
	fn alias_target_keeps_external_paths() {
		let alias = PendingAlias {
			path: "demo.Map".to_string(),
			package: "demo".to_string(),
			source: "std::collections::HashMap".to_string(),
			is_glob: false,
		};
		assert_eq!(alias.target_path(), "std.collections.HashMap");
	}

	#[test]
	fn package_names_are_underscore_normalized() {
		assert_eq!(normalize_package("rustdoc-types"), "rustdoc_types");
	}
}
