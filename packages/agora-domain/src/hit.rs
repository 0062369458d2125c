use std::collections::HashSet;

/// A hit as the full-text index reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHit {
	pub document_id: String,
	pub rank: f32,
}

/// A hit whose document id has been resolved to an item key. Lives for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
	pub item_id: i64,
	pub rank: f32,
}

/// Resolves index document ids to item keys.
///
/// Ids that do not parse as decimal integers are dropped with a warning rather than failing
/// the request. Repeated ids keep their first occurrence.
pub fn parse_hits(raw: &[RawHit]) -> Vec<SearchHit> {
	let mut seen = HashSet::with_capacity(raw.len());
	let mut hits = Vec::with_capacity(raw.len());

	for hit in raw {
		let item_id = match hit.document_id.trim().parse::<i64>() {
			Ok(item_id) => item_id,
			Err(err) => {
				tracing::warn!(
					document_id = %hit.document_id,
					error = %err,
					"Dropping search hit with an unparseable document id."
				);

				continue;
			},
		};

		if seen.insert(item_id) {
			hits.push(SearchHit { item_id, rank: hit.rank });
		}
	}

	hits
}

pub fn item_ids(hits: &[SearchHit]) -> Vec<i64> {
	hits.iter().map(|hit| hit.item_id).collect()
}
