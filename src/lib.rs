//! Client for a property listings search API.
//!
//! A search is built up with chained, validated setters and consumed as one
//! flat iterator; the paging of the underlying API is handled transparently,
//! one request at a time, until the source's declared result total has been
//! delivered.
//!
//! ```no_run
//! use propsearch::{Furnished, ListingsApi, OrderBy, Ordering, RentalSearch};
//!
//! # fn main() -> propsearch::Result<()> {
//! let api = ListingsApi::new("my_api_key")?;
//!
//! let mut rentals = RentalSearch::new();
//! rentals
//!     .flats()
//!     .in_area([("postcode", "E1W 3TJ")])
//!     .within(2)
//!     .price(200..=400)?
//!     .beds(1..=2)?
//!     .furnished(Furnished::Furnished)
//!     .include_rented()
//!     .order_by(OrderBy::Price)
//!     .ordering(Ordering::Descending);
//!
//! for listing in rentals.results(&api) {
//!     let listing = listing?;
//!     println!(
//!         "{}: {:?}",
//!         listing.listing_id().unwrap_or_default(),
//!         listing.price()
//!     );
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod search;

pub use api::ListingsApi;
pub use error::{Error, Result};
pub use models::Listing;
pub use search::{
    ForRent, ForSale, Furnished, OrderBy, Ordering, PageFetcher, PageResult, ParamValue,
    ParameterSet, PropertyType, RentalSearch, SaleSearch, Search, SearchContext, SearchResults,
    Span,
};
