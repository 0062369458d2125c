use agora_storage::models::ItemRow;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Public view of a seller. Password and bio are not representable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerSummary {
	pub id: i64,
	pub first_name: String,
	pub last_name: String,
	pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
	pub id: i64,
	pub seller_id: i64,
	pub seller: SellerSummary,
	pub name: String,
	pub image: String,
	pub category: String,
	/// Serialized as a decimal string.
	pub price: Decimal,
	pub condition: String,
	pub description: String,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}
impl From<ItemRow> for SearchItem {
	fn from(row: ItemRow) -> Self {
		Self {
			id: row.id,
			seller_id: row.seller_id,
			seller: SellerSummary {
				id: row.seller_id,
				first_name: row.seller_first_name,
				last_name: row.seller_last_name,
				email: row.seller_email,
			},
			name: row.name,
			image: row.image,
			category: row.category,
			price: row.price,
			condition: row.condition,
			description: row.description,
			created_at: row.created_at,
		}
	}
}

/// The ordered result set. Serializes as a bare JSON array, `[]` when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchItemsResponse {
	pub items: Vec<SearchItem>,
}

pub fn assemble(rows: Vec<ItemRow>) -> SearchItemsResponse {
	SearchItemsResponse { items: rows.into_iter().map(SearchItem::from).collect() }
}
