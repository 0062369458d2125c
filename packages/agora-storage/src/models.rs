use agora_domain::Listing;
use rust_decimal::Decimal;
use time::OffsetDateTime;

#[derive(Debug, sqlx::FromRow)]
pub struct User {
	pub id: i64,
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub password: String,
	pub image: String,
	pub bio: String,
}

/// An item row joined with the public columns of its seller.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ItemRow {
	pub id: i64,
	pub seller_id: i64,
	pub name: String,
	pub image: String,
	pub category: String,
	pub price: Decimal,
	pub condition: String,
	pub description: String,
	pub created_at: OffsetDateTime,
	pub seller_first_name: String,
	pub seller_last_name: String,
	pub seller_email: String,
}
impl Listing for ItemRow {
	fn item_id(&self) -> i64 {
		self.id
	}

	fn category(&self) -> &str {
		&self.category
	}

	fn condition(&self) -> &str {
		&self.condition
	}

	fn price(&self) -> Decimal {
		self.price
	}

	fn created_at(&self) -> OffsetDateTime {
		self.created_at
	}
}

#[derive(Debug)]
pub struct NewUser {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub password: String,
	pub image: String,
	pub bio: String,
}

#[derive(Debug)]
pub struct NewItem {
	pub seller_id: i64,
	pub name: String,
	pub image: String,
	pub category: String,
	pub price: Decimal,
	pub condition: String,
	pub description: String,
	pub created_at: Option<OffsetDateTime>,
}
