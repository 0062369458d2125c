use std::cmp::Ordering;

use crate::{FilterDescriptor, Listing, SortBy};

/// A storage-layer constraint. Predicates conjoin; none of them touch storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
	/// `category = c OR category LIKE 'c/%'`, so a parent category matches every subcategory.
	CategoryTree { category: String },
	/// Case-insensitive equality on the item condition.
	ConditionEq { condition: String },
}
impl Predicate {
	pub fn matches<L>(&self, listing: &L) -> bool
	where
		L: Listing + ?Sized,
	{
		match self {
			Self::CategoryTree { category } => {
				let actual = listing.category();

				actual == category
					|| actual
						.strip_prefix(category.as_str())
						.is_some_and(|rest| rest.starts_with('/'))
			},
			Self::ConditionEq { condition } =>
				listing.condition().to_lowercase() == condition.to_lowercase(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirective {
	PriceDesc,
	PriceAsc,
	CreatedDesc,
}
impl SortDirective {
	/// In-memory ordering matching the store's `ORDER BY`. Ties fall back to item id, newest
	/// first, so repeated queries return identical orderings.
	pub fn compare<L>(&self, a: &L, b: &L) -> Ordering
	where
		L: Listing + ?Sized,
	{
		let primary = match self {
			Self::PriceDesc => b.price().cmp(&a.price()),
			Self::PriceAsc => a.price().cmp(&b.price()),
			Self::CreatedDesc => b.created_at().cmp(&a.created_at()),
		};

		primary.then_with(|| b.item_id().cmp(&a.item_id()))
	}
}
impl From<SortBy> for SortDirective {
	fn from(sort_by: SortBy) -> Self {
		match sort_by {
			SortBy::PriceDesc => Self::PriceDesc,
			SortBy::PriceAsc => Self::PriceAsc,
			SortBy::CreatedDesc => Self::CreatedDesc,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateSet {
	pub sort: SortDirective,
	pub predicates: Vec<Predicate>,
}
impl PredicateSet {
	pub fn matches<L>(&self, listing: &L) -> bool
	where
		L: Listing + ?Sized,
	{
		self.predicates.iter().all(|predicate| predicate.matches(listing))
	}
}

pub fn build(filter: &FilterDescriptor) -> PredicateSet {
	let mut predicates = Vec::with_capacity(2);

	if let Some(condition) = filter.condition_constraint() {
		predicates.push(Predicate::ConditionEq { condition: condition.to_string() });
	}
	if let Some(category) = filter.category_constraint() {
		predicates.push(Predicate::CategoryTree { category: category.to_string() });
	}

	PredicateSet { sort: filter.sort_by().into(), predicates }
}
