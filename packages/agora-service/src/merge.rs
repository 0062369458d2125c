use agora_domain::{Predicate, RawHit, SortDirective, hit};
use agora_storage::models::ItemRow;

use crate::{RecordStore, Result};

/// Resolves index hits against the record store.
///
/// Document ids that do not parse are dropped. When nothing survives, the result is empty and
/// the store is not consulted: an empty text match never falls back to the relational
/// predicates alone. Otherwise the store returns exactly the hit ids that also satisfy
/// `predicates`, ordered by `sort`. Index rank plays no part in the final order.
pub async fn merge(
	store: &dyn RecordStore,
	predicates: &[Predicate],
	sort: SortDirective,
	ranked: &[RawHit],
) -> Result<Vec<ItemRow>> {
	let hits = hit::parse_hits(ranked);

	if hits.is_empty() {
		tracing::debug!(raw_hits = ranked.len(), "No usable search hits; returning empty result.");

		return Ok(Vec::new());
	}

	let ids = hit::item_ids(&hits);
	let rows = store.find_by_ids_and_predicates(&ids, predicates, sort).await?;

	Ok(rows)
}
