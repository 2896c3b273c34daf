// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use crate::error::{EntityKind, Match, ResolveError};
use crate::resolution::{Resolution, ResolutionSource};
use crate::resolver::{given, Resolver};

const KIND: EntityKind = EntityKind::Organization;

impl Resolver {
	/// Resolves an organization by exact ID, then exact name.
	///
	/// Organizations have no local signal, so a token is mandatory.
	pub async fn resolve_organization(
		&self,
		token: Option<&str>,
	) -> Result<Resolution, ResolveError> {
		let Some(token) = given(token) else {
			return Err(ResolveError::not_found(
				KIND,
				"organization ID or name is required",
			));
		};

		let orgs = self
			.api
			.list_organizations()
			.await
			.map_err(ResolveError::api(KIND))?;

		if let Some(org) = orgs.iter().find(|o| o.id == token) {
			return Ok(self.report(KIND, Resolution::new(&org.id, ResolutionSource::IdMatch)));
		}

		let named: Vec<_> = orgs.iter().filter(|o| o.name == token).collect();
		match named.as_slice() {
			[only] => Ok(self.report(KIND, Resolution::new(&only.id, ResolutionSource::NameMatch))),
			[] => Err(ResolveError::not_found(
				KIND,
				format!("organization '{token}' not found"),
			)),
			_ => Err(ResolveError::Ambiguous {
				kind: KIND,
				token: token.to_string(),
				matches: named
					.iter()
					.map(|o| Match::new(&o.id, o.slug.as_deref().unwrap_or_default()))
					.collect(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use kanban_cli_api::{MockKanbanApi, Organization};
	use kanban_cli_git::MockGitClient;
	use kanban_cli_picker::MockPicker;

	use super::*;

	fn resolver(api: MockKanbanApi) -> Resolver {
		Resolver::new(
			Arc::new(api),
			Arc::new(MockGitClient::new()),
			Arc::new(MockPicker::selecting(0)),
			"/work",
		)
	}

	fn orgs() -> Vec<Organization> {
		vec![
			Organization::new("o1", "acme"),
			Organization::new("o2", "globex"),
			Organization::new("o3", "globex"),
		]
	}

	#[tokio::test]
	async fn test_token_required_even_with_orgs() {
		let api = MockKanbanApi::new().with_organizations(orgs());
		let r = resolver(api.clone());

		let err = r.resolve_organization(None).await.unwrap_err();

		assert!(matches!(err, ResolveError::NotFound { kind: EntityKind::Organization, .. }));
		assert_eq!(err.to_string(), "organization ID or name is required");
		assert!(api.get_calls().is_empty());
	}

	#[tokio::test]
	async fn test_id_match() {
		let r = resolver(MockKanbanApi::new().with_organizations(orgs()));
		let resolution = r.resolve_organization(Some("o2")).await.unwrap();
		assert_eq!(resolution.id, "o2");
		assert_eq!(resolution.source, ResolutionSource::IdMatch);
	}

	#[tokio::test]
	async fn test_unique_name_match() {
		let r = resolver(MockKanbanApi::new().with_organizations(orgs()));
		let resolution = r.resolve_organization(Some("acme")).await.unwrap();
		assert_eq!(resolution.id, "o1");
		assert_eq!(resolution.source, ResolutionSource::NameMatch);
	}

	#[tokio::test]
	async fn test_duplicate_name_lists_ids() {
		let r = resolver(MockKanbanApi::new().with_organizations(orgs()));

		let err = r.resolve_organization(Some("globex")).await.unwrap_err();

		let message = err.to_string();
		assert!(message.contains("o2"));
		assert!(message.contains("o3"));
		assert_eq!(err.exit_code(), 4);
	}

	/// Test: Same-name organizations without slugs are listed by ID alone.
	///
	/// Why this test is important: The name is what the user typed and is
	/// identical for every match, so repeating it gives nothing to tell them apart.
	#[tokio::test]
	async fn test_ambiguous_matches_without_slug_list_ids_only() {
		let r = resolver(MockKanbanApi::new().with_organizations(orgs()));

		let err = r.resolve_organization(Some("globex")).await.unwrap_err();

		let ResolveError::Ambiguous { matches, .. } = &err else {
			panic!("expected Ambiguous, got {err:?}");
		};
		assert!(matches.iter().all(|m| m.detail.is_empty()));
		assert_eq!(
			err.to_string(),
			"organization 'globex' is ambiguous; use one of these IDs:\n  o2\n  o3"
		);
	}

	#[tokio::test]
	async fn test_ambiguous_matches_show_slug_when_present() {
		let mut a = Organization::new("o2", "globex");
		a.slug = Some("globex-east".to_string());
		let b = Organization::new("o3", "globex");
		let r = resolver(MockKanbanApi::new().with_organizations(vec![a, b]));

		let err = r.resolve_organization(Some("globex")).await.unwrap_err();

		assert!(err.to_string().ends_with("\n  o2  globex-east\n  o3"));
	}

	#[tokio::test]
	async fn test_name_match_is_case_sensitive() {
		let r = resolver(MockKanbanApi::new().with_organizations(orgs()));
		let err = r.resolve_organization(Some("ACME")).await.unwrap_err();
		assert_eq!(err.to_string(), "organization 'ACME' not found");
	}
}
