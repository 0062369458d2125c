use sqlx::{Connection, postgres::PgConnection};
use time::{Duration, OffsetDateTime, macros::datetime};

use crate::Result;

/// Seller owning every seeded item. The sensitive columns are filled so tests can assert they
/// never leak.
#[derive(Debug, Clone)]
pub struct Seller {
	pub first_name: &'static str,
	pub last_name: &'static str,
	pub email: &'static str,
	pub password: &'static str,
	pub bio: &'static str,
}
impl Default for Seller {
	fn default() -> Self {
		Self {
			first_name: "Ada",
			last_name: "Lovelace",
			email: "ada@example.com",
			password: "hunter2",
			bio: "Private bio.",
		}
	}
}

#[derive(Debug, Clone)]
pub struct CatalogItem {
	pub name: &'static str,
	pub category: &'static str,
	pub condition: &'static str,
	/// Decimal literal, cast to `numeric` by Postgres.
	pub price: &'static str,
}

#[derive(Debug)]
pub struct SeededCatalog {
	pub seller_id: i64,
	/// Item ids in fixture order.
	pub item_ids: Vec<i64>,
}

/// First listing time. Each later fixture is listed one hour after the previous one, so the
/// newest-first order is the reverse of fixture order.
pub const FIRST_LISTED_AT: OffsetDateTime = datetime!(2024-05-01 09:00 UTC);

/// Inserts one seller and `items` in a single transaction. The schema must already exist.
pub async fn seed(dsn: &str, seller: &Seller, items: &[CatalogItem]) -> Result<SeededCatalog> {
	let mut conn = PgConnection::connect(dsn).await?;
	let mut tx = conn.begin().await?;
	let seller_id: i64 = sqlx::query_scalar(
		"\
INSERT INTO users (first_name, last_name, email, password, bio)
VALUES ($1, $2, $3, $4, $5)
RETURNING id",
	)
	.bind(seller.first_name)
	.bind(seller.last_name)
	.bind(seller.email)
	.bind(seller.password)
	.bind(seller.bio)
	.fetch_one(&mut *tx)
	.await?;
	let mut item_ids = Vec::with_capacity(items.len());
	let mut listed_at = FIRST_LISTED_AT;

	for item in items {
		let item_id: i64 = sqlx::query_scalar(
			"\
INSERT INTO items (seller_id, name, category, price, condition, description, created_at)
VALUES ($1, $2, $3, $4::numeric, $5, $6, $7)
RETURNING id",
		)
		.bind(seller_id)
		.bind(item.name)
		.bind(item.category)
		.bind(item.price)
		.bind(item.condition)
		.bind(format!("A {}.", item.name))
		.bind(listed_at)
		.fetch_one(&mut *tx)
		.await?;

		item_ids.push(item_id);

		listed_at += Duration::hours(1);
	}

	tx.commit().await?;

	Ok(SeededCatalog { seller_id, item_ids })
}
