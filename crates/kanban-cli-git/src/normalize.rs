// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// Reduces a git remote URL or a filesystem path to the repository basename.
///
/// Handles:
/// - HTTPS URLs: `https://github.com/owner/repo.git` -> `repo`
/// - SCP-style SSH: `git@github.com:owner/repo.git` -> `repo`
/// - Local paths: `/work/repo/` -> `repo`
///
/// Never fails; empty input yields an empty string. The reduction is repeated
/// until the value stops changing, so the result is always a fixed point and
/// `repo_basename(repo_basename(x)) == repo_basename(x)`.
pub fn repo_basename(url_or_path: &str) -> String {
	let mut current = url_or_path;
	loop {
		let next = reduce_once(current);
		if next == current {
			return next.to_string();
		}
		current = next;
	}
}

fn reduce_once(raw: &str) -> &str {
	let trimmed = raw.trim_end_matches('/');
	let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

	let path = if trimmed.contains(':') && !trimmed.contains("://") {
		trimmed.rsplit(':').next().unwrap_or(trimmed)
	} else {
		trimmed
	};

	path.split('/')
		.filter(|segment| !segment.is_empty())
		.next_back()
		.unwrap_or("")
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_https_url() {
		assert_eq!(repo_basename("https://github.com/u/r.git"), "r");
	}

	#[test]
	fn test_scp_style_url() {
		assert_eq!(repo_basename("git@github.com:u/r.git"), "r");
	}

	#[test]
	fn test_local_path() {
		assert_eq!(repo_basename("/local/path/r"), "r");
	}

	#[test]
	fn test_trailing_slash_ignored() {
		assert_eq!(repo_basename("https://github.com/u/r/"), "r");
		assert_eq!(repo_basename("/work/r///"), "r");
	}

	#[test]
	fn test_ssh_url_with_port() {
		assert_eq!(repo_basename("ssh://git@gitlab.com:22/group/repo.git"), "repo");
	}

	#[test]
	fn test_scp_without_owner() {
		assert_eq!(repo_basename("host:repo.git"), "repo");
	}

	#[test]
	fn test_nested_group_path() {
		assert_eq!(
			repo_basename("git@gitlab.com:group/subgroup/repo.git"),
			"repo"
		);
	}

	#[test]
	fn test_bare_name_is_unchanged() {
		assert_eq!(repo_basename("myrepo"), "myrepo");
	}

	#[test]
	fn test_empty_and_degenerate_inputs() {
		assert_eq!(repo_basename(""), "");
		assert_eq!(repo_basename("/"), "");
		assert_eq!(repo_basename(".git"), "");
		assert_eq!(repo_basename("host:"), "");
	}

	#[test]
	fn test_doubled_suffix_collapses() {
		assert_eq!(repo_basename("r.git.git"), "r");
		assert_eq!(repo_basename("/a/r.git/.git"), "r");
	}

	#[test]
	fn test_case_is_preserved() {
		assert_eq!(repo_basename("git@github.com:Owner/MyRepo.git"), "MyRepo");
	}

	// Property: Normalization is idempotent for any input.
	//
	// Why this test is important: Project and repository matching compare
	// basenames computed from different sources (a remote URL on one side, a
	// stored name on the other). Re-normalizing an already normalized value
	// must not change it, or a stored name would stop matching.
	proptest! {
			#[test]
			fn prop_basename_is_idempotent(input in ".{0,64}") {
					let once = repo_basename(&input);
					let twice = repo_basename(&once);
					prop_assert_eq!(once, twice);
			}
	}

	// Property: HTTPS, SCP-style and local path forms of the same repository
	// all reduce to the repository name.
	//
	// Why this test is important: Users clone with whichever URL style they
	// prefer, and the server stores whichever form it was given. Auto-detection
	// only works if every form lands on the same basename.
	proptest! {
			#[test]
			fn prop_url_forms_agree(
					host in "[a-z]{3,10}\\.[a-z]{2,4}",
					owner in "[a-zA-Z][a-zA-Z0-9_-]{0,10}",
					repo in "[a-zA-Z][a-zA-Z0-9_-]{0,10}"
			) {
					let https = repo_basename(&format!("https://{host}/{owner}/{repo}.git"));
					let scp = repo_basename(&format!("git@{host}:{owner}/{repo}.git"));
					let local = repo_basename(&format!("/home/{owner}/{repo}"));

					prop_assert_eq!(&https, &repo);
					prop_assert_eq!(&scp, &repo);
					prop_assert_eq!(&local, &repo);
			}
	}

	// Property: The result never contains a path separator.
	proptest! {
			#[test]
			fn prop_result_has_no_separator(input in "[a-z/:.]{0,40}") {
					prop_assert!(!repo_basename(&input).contains('/'));
			}
	}
}
