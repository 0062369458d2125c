pub mod filter;
pub mod hit;
pub mod listing;
pub mod predicate;
pub mod route;

pub use filter::{FilterDescriptor, SortBy, ValidationError};
pub use hit::{RawHit, SearchHit};
pub use listing::Listing;
pub use predicate::{Predicate, PredicateSet, SortDirective};
pub use route::SearchRoute;
