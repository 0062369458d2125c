use rust_decimal::Decimal;
use time::OffsetDateTime;

/// Item attributes that predicates and sort directives read.
pub trait Listing {
	fn item_id(&self) -> i64;

	fn category(&self) -> &str;

	fn condition(&self) -> &str;

	fn price(&self) -> Decimal;

	fn created_at(&self) -> OffsetDateTime;
}
