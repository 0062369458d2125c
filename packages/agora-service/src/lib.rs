pub mod merge;
pub mod response;
pub mod search_items;

mod error;

pub use error::{Error, Result};
pub use response::{SearchItem, SearchItemsResponse, SellerSummary};

use std::{future::Future, pin::Pin, sync::Arc};

use agora_config::Config;
use agora_domain::{Predicate, RawHit, SortDirective};
use agora_storage::{db::Db, items, models::ItemRow, qdrant::QdrantStore};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read access to persisted items.
pub trait RecordStore
where
	Self: Send + Sync,
{
	fn find_by_predicates<'a>(
		&'a self,
		predicates: &'a [Predicate],
		sort: SortDirective,
	) -> BoxFuture<'a, agora_storage::Result<Vec<ItemRow>>>;

	fn find_by_ids_and_predicates<'a>(
		&'a self,
		ids: &'a [i64],
		predicates: &'a [Predicate],
		sort: SortDirective,
	) -> BoxFuture<'a, agora_storage::Result<Vec<ItemRow>>>;
}

/// Full-text match over item text fields.
pub trait SearchIndex
where
	Self: Send + Sync,
{
	fn match_query<'a>(
		&'a self,
		term: &'a str,
		limit: u64,
	) -> BoxFuture<'a, agora_storage::Result<Vec<RawHit>>>;
}

pub struct PgRecordStore {
	pub db: Db,
}

pub struct QdrantIndex {
	pub qdrant: QdrantStore,
}

/// Entry point for read-time search composition. Holds no mutable state, so a single instance
/// serves concurrent requests.
pub struct AgoraService {
	pub cfg: Config,
	pub store: Arc<dyn RecordStore>,
	pub index: Arc<dyn SearchIndex>,
}

impl RecordStore for PgRecordStore {
	fn find_by_predicates<'a>(
		&'a self,
		predicates: &'a [Predicate],
		sort: SortDirective,
	) -> BoxFuture<'a, agora_storage::Result<Vec<ItemRow>>> {
		Box::pin(items::find_items(&self.db, predicates, sort))
	}

	fn find_by_ids_and_predicates<'a>(
		&'a self,
		ids: &'a [i64],
		predicates: &'a [Predicate],
		sort: SortDirective,
	) -> BoxFuture<'a, agora_storage::Result<Vec<ItemRow>>> {
		Box::pin(items::find_items_by_ids(&self.db, ids, predicates, sort))
	}
}

impl SearchIndex for QdrantIndex {
	fn match_query<'a>(
		&'a self,
		term: &'a str,
		limit: u64,
	) -> BoxFuture<'a, agora_storage::Result<Vec<RawHit>>> {
		Box::pin(self.qdrant.match_query(term, limit))
	}
}

impl AgoraService {
	pub fn new(cfg: Config, db: Db, qdrant: QdrantStore) -> Self {
		Self::with_collaborators(
			cfg,
			Arc::new(PgRecordStore { db }),
			Arc::new(QdrantIndex { qdrant }),
		)
	}

	pub fn with_collaborators(
		cfg: Config,
		store: Arc<dyn RecordStore>,
		index: Arc<dyn SearchIndex>,
	) -> Self {
		Self { cfg, store, index }
	}
}
