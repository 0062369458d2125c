use std::time::Duration;

use agora_domain::{FilterDescriptor, PredicateSet, RawHit, SearchRoute, predicate, route};

use crate::{AgoraService, Result, SearchItemsResponse, merge, response};

impl AgoraService {
	/// Parses a raw filter payload and runs it. A payload that fails validation is rejected
	/// before any store or index work.
	pub async fn search_items(&self, raw: &str) -> Result<SearchItemsResponse> {
		let filter = FilterDescriptor::parse(raw)?;

		self.search_filtered(&filter).await
	}

	pub async fn search_filtered(&self, filter: &FilterDescriptor) -> Result<SearchItemsResponse> {
		let PredicateSet { sort, predicates } = predicate::build(filter);
		let (path, rows) = match route::route(filter) {
			SearchRoute::SkipSearch =>
				("relational", self.store.find_by_predicates(&predicates, sort).await?),
			SearchRoute::DoSearch(term) => {
				let ranked = self.query_index(&term).await;

				("index", merge::merge(self.store.as_ref(), &predicates, sort, &ranked).await?)
			},
		};

		tracing::info!(
			path,
			sort = filter.sort_by().as_str(),
			predicates = predicates.len(),
			results = rows.len(),
			"Item search completed."
		);

		Ok(response::assemble(rows))
	}

	// Index failures and timeouts degrade to zero hits instead of failing the request.
	async fn query_index(&self, term: &str) -> Vec<RawHit> {
		let limit = u64::from(self.cfg.search.max_hits);
		let timeout_ms = self.cfg.search.index_timeout_ms;

		match tokio::time::timeout(
			Duration::from_millis(timeout_ms),
			self.index.match_query(term, limit),
		)
		.await
		{
			Ok(Ok(hits)) => hits,
			Ok(Err(err)) => {
				tracing::warn!(error = %err, "Search index query failed; treating as zero hits.");

				Vec::new()
			},
			Err(_) => {
				tracing::warn!(timeout_ms, "Search index query timed out; treating as zero hits.");

				Vec::new()
			},
		}
	}
}
