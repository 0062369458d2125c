//! Client-supplied search and filter requests.
//!
//! The inbound payload is a JSON object with the fields `sortBy`, `category`, `condition` and
//! `search`. A payload that does not have that shape is rejected as a whole; nothing is ever
//! defaulted on behalf of a mistyped field.

use serde_json::{Map, Value};

const CATEGORY_ALL: &str = "all";
const CONDITION_ANY: &str = "any";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
	pub path: String,
	pub message: String,
}
impl ValidationError {
	fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
		Self { path: path.into(), message: message.into() }
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
	#[default]
	CreatedDesc,
	PriceAsc,
	PriceDesc,
}
impl SortBy {
	/// Maps a wire sort key. Unrecognized keys fall back to [`SortBy::CreatedDesc`].
	pub fn from_wire(raw: &str) -> Self {
		let key = raw.trim();

		if key.eq_ignore_ascii_case("PRICE_DESC") {
			Self::PriceDesc
		} else if key.eq_ignore_ascii_case("PRICE_ASC") {
			Self::PriceAsc
		} else {
			Self::CreatedDesc
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::CreatedDesc => "CREATED_DESC",
			Self::PriceAsc => "PRICE_ASC",
			Self::PriceDesc => "PRICE_DESC",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
	sort_by: SortBy,
	category: String,
	condition: String,
	search: String,
}
impl FilterDescriptor {
	pub fn parse(raw: &str) -> Result<Self, ValidationError> {
		let value: Value = serde_json::from_str(raw).map_err(|err| {
			ValidationError::new("$", format!("filter payload is not valid JSON: {err}."))
		})?;

		Self::from_value(&value)
	}

	pub fn from_value(raw: &Value) -> Result<Self, ValidationError> {
		let obj = raw
			.as_object()
			.ok_or_else(|| ValidationError::new("$", "filter payload must be an object."))?;
		let sort_by = match obj.get("sortBy") {
			None | Some(Value::Null) => SortBy::default(),
			Some(Value::String(key)) => SortBy::from_wire(key),
			Some(_) => return Err(ValidationError::new("$.sortBy", "sortBy must be a string.")),
		};

		Ok(Self {
			sort_by,
			category: required_string(obj, "category")?,
			condition: required_string(obj, "condition")?,
			search: required_string(obj, "search")?,
		})
	}

	pub fn sort_by(&self) -> SortBy {
		self.sort_by
	}

	pub fn category(&self) -> &str {
		&self.category
	}

	pub fn condition(&self) -> &str {
		&self.condition
	}

	pub fn search(&self) -> &str {
		&self.search
	}

	/// The category to constrain on, or `None` for the `all`/empty sentinels. The returned value
	/// is the client's string as sent; only the sentinel check ignores surrounding whitespace.
	pub fn category_constraint(&self) -> Option<&str> {
		constraint(&self.category, CATEGORY_ALL)
	}

	/// The condition to constrain on, or `None` for the `any`/empty sentinels.
	pub fn condition_constraint(&self) -> Option<&str> {
		constraint(&self.condition, CONDITION_ANY)
	}
}

fn required_string(obj: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
	match obj.get(field) {
		Some(Value::String(value)) => Ok(value.clone()),
		Some(_) =>
			Err(ValidationError::new(format!("$.{field}"), format!("{field} must be a string."))),
		None => Err(ValidationError::new(format!("$.{field}"), format!("{field} is required."))),
	}
}

fn constraint<'a>(value: &'a str, sentinel: &str) -> Option<&'a str> {
	let trimmed = value.trim();

	if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(sentinel) { None } else { Some(value) }
}
