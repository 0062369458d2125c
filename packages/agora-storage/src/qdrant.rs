use agora_domain::RawHit;
use qdrant_client::qdrant::{Document, PointId, Query, QueryPointsBuilder, point_id::PointIdOptions};

use crate::Result;

pub const BM25_VECTOR_NAME: &str = "bm25";
pub const BM25_MODEL: &str = "qdrant/bm25";

pub struct QdrantStore {
	pub client: qdrant_client::Qdrant,
	pub collection: String,
}
impl QdrantStore {
	pub fn new(cfg: &agora_config::Qdrant) -> Result<Self> {
		let client = qdrant_client::Qdrant::from_url(&cfg.url).build()?;

		Ok(Self { client, collection: cfg.collection.clone() })
	}

	/// Runs a BM25 match query and returns hits in index rank order.
	pub async fn match_query(&self, term: &str, limit: u64) -> Result<Vec<RawHit>> {
		let search = QueryPointsBuilder::new(self.collection.clone())
			.query(Query::new_nearest(Document::new(term.to_string(), BM25_MODEL)))
			.using(BM25_VECTOR_NAME)
			.with_payload(false)
			.limit(limit);
		let response = self.client.query(search).await?;
		let hits = response
			.result
			.into_iter()
			.filter_map(|point| {
				let document_id = point.id.as_ref().and_then(point_id_to_document_id)?;

				Some(RawHit { document_id, rank: point.score })
			})
			.collect();

		Ok(hits)
	}
}

/// Numeric point ids are item ids. UUID ids are passed through and rejected downstream.
pub fn point_id_to_document_id(point_id: &PointId) -> Option<String> {
	match &point_id.point_id_options {
		Some(PointIdOptions::Num(id)) => Some(id.to_string()),
		Some(PointIdOptions::Uuid(id)) => Some(id.clone()),
		None => None,
	}
}
