use crate::FilterDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRoute {
	/// No free-text term; relational predicates alone define the result set.
	SkipSearch,
	/// Forward the term to the full-text index exactly as the client sent it, whitespace included.
	DoSearch(String),
}

pub fn route(filter: &FilterDescriptor) -> SearchRoute {
	let term = filter.search();

	if term.is_empty() {
		SearchRoute::SkipSearch
	} else {
		SearchRoute::DoSearch(term.to_string())
	}
}
