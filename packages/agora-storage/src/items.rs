use agora_domain::{Predicate, SortDirective};
use sqlx::{Postgres, QueryBuilder};

use crate::{
	Result,
	db::Db,
	models::{ItemRow, NewItem, NewUser},
};

// Seller columns are limited to the public projection; password and bio are never read here.
const ITEM_SELECT: &str = "\
SELECT
	i.id,
	i.seller_id,
	i.name,
	i.image,
	i.category,
	i.price,
	i.condition,
	i.description,
	i.created_at,
	u.first_name AS seller_first_name,
	u.last_name AS seller_last_name,
	u.email AS seller_email
FROM items i
JOIN users u ON u.id = i.seller_id
WHERE TRUE";

pub async fn find_items(
	db: &Db,
	predicates: &[Predicate],
	sort: SortDirective,
) -> Result<Vec<ItemRow>> {
	let mut builder = QueryBuilder::<Postgres>::new(ITEM_SELECT);

	push_predicates(&mut builder, predicates);
	push_order(&mut builder, sort);

	Ok(builder.build_query_as::<ItemRow>().fetch_all(&db.pool).await?)
}

pub async fn find_items_by_ids(
	db: &Db,
	ids: &[i64],
	predicates: &[Predicate],
	sort: SortDirective,
) -> Result<Vec<ItemRow>> {
	if ids.is_empty() {
		return Ok(Vec::new());
	}

	let mut builder = QueryBuilder::<Postgres>::new(ITEM_SELECT);

	builder.push(" AND i.id = ANY(");
	builder.push_bind(ids.to_vec());
	builder.push(")");

	push_predicates(&mut builder, predicates);
	push_order(&mut builder, sort);

	Ok(builder.build_query_as::<ItemRow>().fetch_all(&db.pool).await?)
}

pub async fn insert_user(db: &Db, user: &NewUser) -> Result<i64> {
	let id: i64 = sqlx::query_scalar(
		"\
INSERT INTO users (first_name, last_name, email, password, image, bio)
VALUES ($1, $2, $3, $4, $5, $6)
RETURNING id",
	)
	.bind(user.first_name.as_str())
	.bind(user.last_name.as_str())
	.bind(user.email.as_str())
	.bind(user.password.as_str())
	.bind(user.image.as_str())
	.bind(user.bio.as_str())
	.fetch_one(&db.pool)
	.await?;

	Ok(id)
}

pub async fn insert_item(db: &Db, item: &NewItem) -> Result<i64> {
	let id: i64 = sqlx::query_scalar(
		"\
INSERT INTO items (seller_id, name, image, category, price, condition, description, created_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, now()))
RETURNING id",
	)
	.bind(item.seller_id)
	.bind(item.name.as_str())
	.bind(item.image.as_str())
	.bind(item.category.as_str())
	.bind(item.price)
	.bind(item.condition.as_str())
	.bind(item.description.as_str())
	.bind(item.created_at)
	.fetch_one(&db.pool)
	.await?;

	Ok(id)
}

pub(crate) fn push_predicates(builder: &mut QueryBuilder<'_, Postgres>, predicates: &[Predicate]) {
	for predicate in predicates {
		match predicate {
			Predicate::CategoryTree { category } => {
				builder.push(" AND (i.category = ");
				builder.push_bind(category.clone());
				builder.push(" OR i.category LIKE ");
				builder.push_bind(format!("{}/%", escape_like(category)));
				builder.push(" ESCAPE '\\')");
			},
			Predicate::ConditionEq { condition } => {
				builder.push(" AND lower(i.condition) = lower(");
				builder.push_bind(condition.clone());
				builder.push(")");
			},
		}
	}
}

pub(crate) fn push_order(builder: &mut QueryBuilder<'_, Postgres>, sort: SortDirective) {
	builder.push(match sort {
		SortDirective::PriceDesc => " ORDER BY i.price DESC, i.id DESC",
		SortDirective::PriceAsc => " ORDER BY i.price ASC, i.id DESC",
		SortDirective::CreatedDesc => " ORDER BY i.created_at DESC, i.id DESC",
	});
}

pub fn escape_like(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());

	for ch in raw.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			out.push('\\');
		}

		out.push(ch);
	}

	out
}
