//! The welcome document shown before any path has been submitted.

/// Build the welcome Markdown page.
///
/// Every installed package is listed as a same-document link target; the
/// viewer's link handler falls through to path resolution for anchors that
/// do not exist on the page, so clicking a package name renders its docs.
pub fn welcome_markdown(packages: &[String]) -> String {
	let mut output = String::from(
		"# Welcome\n\n\
		To view documentation for a package, module, struct, trait,\n\
		or any other documented object, try typing its item path\n\
		in the search bar at the top.\n\n\
		By *item path*, we mean for example `package.module.Struct`\n\
		or `package.function`. Paths written with `::` work too.\n\n\
		Below, we list every package in the current workspace's\n\
		dependency graph. Try clicking on one of them to show its\n\
		documentation.\n\n",
	);

	if packages.is_empty() {
		output.push_str(
			"*No packages found. Run peekdoc from a directory containing a Cargo project.*\n",
		);
		return output;
	}

	for package in packages {
		output.push_str(&format!("- [{package}](#{package})\n"));
	}
	output
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lists_packages_as_anchor_links() {
		let markdown =
			welcome_markdown(&["regex".to_string(), "serde".to_string()]);
		assert!(markdown.contains("- [regex](#regex)"));
		assert!(markdown.contains("- [serde](#serde)"));
	}

	#[test]
	fn explains_the_empty_case() {
		let markdown = welcome_markdown(&[]);
		assert!(markdown.contains("No packages found"));
	}
}
