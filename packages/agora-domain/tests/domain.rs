use std::{cmp::Ordering, str::FromStr};

use rust_decimal::Decimal;
use serde_json::json;
use time::{Duration, OffsetDateTime, macros::datetime};

use agora_domain::{
	FilterDescriptor, Listing, Predicate, RawHit, SearchRoute, SortBy, SortDirective, hit,
	predicate, route,
};

struct TestListing {
	id: i64,
	category: &'static str,
	condition: &'static str,
	price: &'static str,
	created_at: OffsetDateTime,
}
impl Listing for TestListing {
	fn item_id(&self) -> i64 {
		self.id
	}

	fn category(&self) -> &str {
		self.category
	}

	fn condition(&self) -> &str {
		self.condition
	}

	fn price(&self) -> Decimal {
		Decimal::from_str(self.price).expect("Test price must be a decimal.")
	}

	fn created_at(&self) -> OffsetDateTime {
		self.created_at
	}
}

fn listing(id: i64, category: &'static str) -> TestListing {
	TestListing {
		id,
		category,
		condition: "New",
		price: "10.00",
		created_at: datetime!(2024-03-01 12:00 UTC),
	}
}

fn filter(sort_by: &str, category: &str, condition: &str, search: &str) -> FilterDescriptor {
	FilterDescriptor::from_value(&json!({
		"sortBy": sort_by,
		"category": category,
		"condition": condition,
		"search": search,
	}))
	.expect("Filter must be valid.")
}

#[test]
fn parses_complete_payload() {
	let parsed = FilterDescriptor::parse(
		r#"{"sortBy":"PRICE_DESC","category":"electronics","condition":"New","search":"lamp"}"#,
	)
	.expect("Payload must parse.");

	assert_eq!(parsed.sort_by(), SortBy::PriceDesc);
	assert_eq!(parsed.category(), "electronics");
	assert_eq!(parsed.condition(), "New");
	assert_eq!(parsed.search(), "lamp");
}

#[test]
fn missing_sort_defaults_to_created_desc() {
	let parsed = FilterDescriptor::parse(r#"{"category":"","condition":"","search":""}"#)
		.expect("Payload must parse.");

	assert_eq!(parsed.sort_by(), SortBy::CreatedDesc);

	let parsed =
		FilterDescriptor::parse(r#"{"sortBy":null,"category":"","condition":"","search":""}"#)
			.expect("Payload must parse.");

	assert_eq!(parsed.sort_by(), SortBy::CreatedDesc);
}

#[test]
fn unrecognized_sort_key_is_not_an_error() {
	for key in ["", "NEWEST", "price", "PRICE_DESCENDING"] {
		assert_eq!(filter(key, "", "", "").sort_by(), SortBy::CreatedDesc, "key {key:?}");
	}

	assert_eq!(filter("price_asc", "", "", "").sort_by(), SortBy::PriceAsc);
}

#[test]
fn rejects_malformed_payloads() {
	let err = FilterDescriptor::parse("not json").expect_err("Expected JSON error.");

	assert_eq!(err.path, "$");

	let err = FilterDescriptor::parse("[]").expect_err("Expected shape error.");

	assert_eq!(err.path, "$");

	let err = FilterDescriptor::parse(r#"{"category":"","condition":""}"#)
		.expect_err("Expected missing field error.");

	assert_eq!(err.path, "$.search");
	assert_eq!(err.message, "search is required.");

	let err = FilterDescriptor::parse(r#"{"category":3,"condition":"","search":""}"#)
		.expect_err("Expected mistyped field error.");

	assert_eq!(err.path, "$.category");

	let err = FilterDescriptor::parse(r#"{"sortBy":1,"category":"","condition":"","search":""}"#)
		.expect_err("Expected mistyped sort error.");

	assert_eq!(err.path, "$.sortBy");
}

#[test]
fn sentinel_category_emits_no_predicate() {
	for category in ["all", "ALL", "All", "", "   "] {
		let set = predicate::build(&filter("", category, "", ""));

		assert!(set.predicates.is_empty(), "category {category:?} produced {:?}", set.predicates);
	}
}

#[test]
fn sentinel_condition_emits_no_predicate() {
	for condition in ["any", "ANY", "Any", ""] {
		let set = predicate::build(&filter("", "", condition, ""));

		assert!(set.predicates.is_empty(), "condition {condition:?} produced {:?}", set.predicates);
	}
}

#[test]
fn padded_constraints_are_kept_verbatim() {
	let set = predicate::build(&filter("", " garden ", " New", ""));

	assert_eq!(
		set.predicates,
		vec![
			Predicate::ConditionEq { condition: " New".to_string() },
			Predicate::CategoryTree { category: " garden ".to_string() },
		]
	);

	assert!(!set.matches(&listing(3, "garden")));
}

#[test]
fn builds_condition_then_category() {
	let set = predicate::build(&filter("PRICE_ASC", "electronics", "Lightly Used", "lamp"));

	assert_eq!(set.sort, SortDirective::PriceAsc);
	assert_eq!(
		set.predicates,
		vec![
			Predicate::ConditionEq { condition: "Lightly Used".to_string() },
			Predicate::CategoryTree { category: "electronics".to_string() },
		]
	);
}

#[test]
fn sort_directive_mapping_is_total() {
	assert_eq!(predicate::build(&filter("PRICE_DESC", "", "", "")).sort, SortDirective::PriceDesc);
	assert_eq!(predicate::build(&filter("PRICE_ASC", "", "", "")).sort, SortDirective::PriceAsc);
	assert_eq!(predicate::build(&filter("bogus", "", "", "")).sort, SortDirective::CreatedDesc);
}

#[test]
fn category_matches_subcategories_only() {
	let predicate = Predicate::CategoryTree { category: "electronics".to_string() };

	assert!(predicate.matches(&listing(1, "electronics")));
	assert!(predicate.matches(&listing(2, "electronics/phones")));
	assert!(predicate.matches(&listing(3, "electronics/phones/cases")));
	assert!(!predicate.matches(&listing(4, "electronics2")));
	assert!(!predicate.matches(&listing(5, "home/electronics")));
}

#[test]
fn condition_matches_case_insensitively() {
	let predicate = Predicate::ConditionEq { condition: "well loved".to_string() };
	let mut item = listing(1, "books");

	item.condition = "Well Loved";

	assert!(predicate.matches(&item));

	item.condition = "Well";

	assert!(!predicate.matches(&item));
}

#[test]
fn sort_directives_order_listings() {
	let base = datetime!(2024-03-01 12:00 UTC);
	let cheap = TestListing { price: "5.00", created_at: base, ..listing(1, "books") };
	let pricey = TestListing {
		price: "5.01",
		created_at: base - Duration::days(1),
		..listing(2, "books")
	};

	assert_eq!(SortDirective::PriceDesc.compare(&pricey, &cheap), Ordering::Less);
	assert_eq!(SortDirective::PriceAsc.compare(&cheap, &pricey), Ordering::Less);
	assert_eq!(SortDirective::CreatedDesc.compare(&cheap, &pricey), Ordering::Less);
}

#[test]
fn sort_ties_break_on_item_id() {
	let older_id = listing(1, "books");
	let newer_id = listing(2, "books");

	assert_eq!(SortDirective::PriceAsc.compare(&newer_id, &older_id), Ordering::Less);
	assert_eq!(SortDirective::CreatedDesc.compare(&newer_id, &older_id), Ordering::Less);
}

#[test]
fn empty_search_skips_index() {
	assert_eq!(route::route(&filter("", "", "", "")), SearchRoute::SkipSearch);
}

#[test]
fn whitespace_search_still_queries_index() {
	assert_eq!(route::route(&filter("", "", "", "  ")), SearchRoute::DoSearch("  ".to_string()));
}

#[test]
fn search_term_is_forwarded_verbatim() {
	assert_eq!(
		route::route(&filter("", "", "", " Red Lamp ")),
		SearchRoute::DoSearch(" Red Lamp ".to_string())
	);
}

#[test]
fn unparseable_document_ids_are_dropped() {
	let raw = ["3", "7", "x"]
		.into_iter()
		.enumerate()
		.map(|(i, id)| RawHit { document_id: id.to_string(), rank: 1.0 - i as f32 * 0.1 })
		.collect::<Vec<_>>();
	let hits = hit::parse_hits(&raw);

	assert_eq!(hit::item_ids(&hits), vec![3, 7]);
}

#[test]
fn duplicate_document_ids_keep_first_rank() {
	let raw = vec![
		RawHit { document_id: "9".to_string(), rank: 0.9 },
		RawHit { document_id: "9".to_string(), rank: 0.2 },
		RawHit { document_id: "1e3".to_string(), rank: 0.1 },
	];
	let hits = hit::parse_hits(&raw);

	assert_eq!(hits.len(), 1);
	assert_eq!(hits[0].item_id, 9);
	assert_eq!(hits[0].rank, 0.9);
}
