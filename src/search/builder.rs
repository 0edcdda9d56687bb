use std::marker::PhantomData;

use crate::error::Result;

use super::results::SearchResults;
use super::traits::PageFetcher;
use super::types::{Furnished, OrderBy, Ordering, ParamValue, ParameterSet, PropertyType, Span};
use super::validate;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ForSale {}
    impl Sealed for super::ForRent {}
}

/// Listing status a search is fixed to at construction.
pub trait SearchContext: sealed::Sealed {
    /// Wire value of the `listing_status` parameter.
    const STATUS: &'static str;
}

/// Marker for searches over properties listed for sale.
#[derive(Debug, Clone, Copy)]
pub enum ForSale {}

/// Marker for searches over rental properties.
#[derive(Debug, Clone, Copy)]
pub enum ForRent {}

impl SearchContext for ForSale {
    const STATUS: &'static str = "sale";
}

impl SearchContext for ForRent {
    const STATUS: &'static str = "rent";
}

/// Search over sale listings.
pub type SaleSearch = Search<ForSale>;

/// Search over rental listings.
pub type RentalSearch = Search<ForRent>;

/// Request builder for one search session.
///
/// Setters validate their input, merge the normalized parameters and return
/// the builder again so calls chain; a failed setter leaves the request
/// untouched. The listing status the builder was created with is injected
/// into every request and cannot be changed by any setter. Setters for
/// overlapping concerns simply overwrite earlier keys.
#[derive(Debug, Clone)]
pub struct Search<C: SearchContext> {
    params: ParameterSet,
    _context: PhantomData<C>,
}

impl<C: SearchContext> Default for Search<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SearchContext> Search<C> {
    /// Creates a builder seeded with the context's listing status.
    pub fn new() -> Self {
        Self {
            params: ParameterSet::seeded(C::STATUS),
            _context: PhantomData,
        }
    }

    /// Current request parameters.
    pub fn request(&self) -> &ParameterSet {
        &self.params
    }

    /// Clears every caller-set parameter, restoring the seeded state.
    pub fn reset(&mut self) -> &mut Self {
        self.params.reset();
        self
    }

    /// Constrains the search to a location, e.g. `[("postcode", "E1W 3TJ")]`.
    ///
    /// The descriptor is merged through as-is; the remote source decides
    /// which location keys it understands.
    pub fn in_area<K, V>(&mut self, location: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        for (key, value) in location {
            self.params.insert(key, value);
        }
        self
    }

    /// Search radius around the location, in miles.
    pub fn within(&mut self, radius: impl Into<f64>) -> &mut Self {
        self.params.insert("radius", radius.into());
        self
    }

    /// Alias for [`within`](Self::within).
    pub fn radius(&mut self, radius: impl Into<f64>) -> &mut Self {
        self.within(radius)
    }

    /// Sort field for the returned listings.
    pub fn order_by(&mut self, field: OrderBy) -> &mut Self {
        self.params.insert("order_by", field.as_str());
        self
    }

    /// Sort direction for the returned listings.
    pub fn ordering(&mut self, direction: Ordering) -> &mut Self {
        self.params.insert("ordering", direction.as_str());
        self
    }

    /// Lowest acceptable price.
    pub fn minimum_price(&mut self, price: i64) -> Result<&mut Self> {
        let price = validate::non_negative("minimum_price", price)?;
        self.params.insert("minimum_price", price);
        Ok(self)
    }

    /// Highest acceptable price.
    pub fn maximum_price(&mut self, price: i64) -> Result<&mut Self> {
        let price = validate::non_negative("maximum_price", price)?;
        self.params.insert("maximum_price", price);
        Ok(self)
    }

    /// Acceptable price range; a single value pins both bounds.
    pub fn price(&mut self, price: impl Into<Span>) -> Result<&mut Self> {
        let (lower, upper) = validate::bounds("price", price.into())?;
        self.params.insert("minimum_price", lower);
        self.params.insert("maximum_price", upper);
        Ok(self)
    }

    /// Lowest acceptable number of bedrooms.
    pub fn minimum_beds(&mut self, beds: i64) -> Result<&mut Self> {
        let beds = validate::non_negative("minimum_beds", beds)?;
        self.params.insert("minimum_beds", beds);
        Ok(self)
    }

    /// Highest acceptable number of bedrooms.
    pub fn maximum_beds(&mut self, beds: i64) -> Result<&mut Self> {
        let beds = validate::non_negative("maximum_beds", beds)?;
        self.params.insert("maximum_beds", beds);
        Ok(self)
    }

    /// Acceptable bedroom range; a single value pins both bounds.
    pub fn beds(&mut self, beds: impl Into<Span>) -> Result<&mut Self> {
        let (lower, upper) = validate::bounds("beds", beds.into())?;
        self.params.insert("minimum_beds", lower);
        self.params.insert("maximum_beds", upper);
        Ok(self)
    }

    /// Furnishing state filter.
    pub fn furnished(&mut self, state: Furnished) -> &mut Self {
        self.params.insert("furnished", state.as_str());
        self
    }

    /// Restricts results to one property type.
    pub fn property_type(&mut self, kind: PropertyType) -> &mut Self {
        self.params.insert("property_type", kind.as_str());
        self
    }

    /// Shorthand for `property_type(PropertyType::Houses)`.
    pub fn houses(&mut self) -> &mut Self {
        self.property_type(PropertyType::Houses)
    }

    /// Shorthand for `property_type(PropertyType::Flats)`.
    pub fn flats(&mut self) -> &mut Self {
        self.property_type(PropertyType::Flats)
    }

    /// Free-text keywords matched against listing descriptions.
    pub fn keywords(&mut self, keywords: impl Into<String>) -> &mut Self {
        self.params.insert("keywords", keywords.into());
        self
    }

    /// Looks up one specific listing by its identifier.
    pub fn listing_id(&mut self, id: i64) -> &mut Self {
        self.params.insert("listing_id", id);
        self
    }

    /// Starts iterating the matching listings, fetching pages on demand.
    ///
    /// The iteration works on a snapshot of the current parameters; changing
    /// the builder afterwards does not affect it.
    pub fn results<'f>(&self, fetcher: &'f dyn PageFetcher) -> SearchResults<'f> {
        SearchResults::new(fetcher, self.params.clone())
    }
}

impl Search<ForSale> {
    /// Also returns listings already marked as sold.
    pub fn include_sold(&mut self) -> &mut Self {
        self.params.insert("include_sold", "1");
        self
    }
}

impl Search<ForRent> {
    /// Also returns listings already rented out.
    pub fn include_rented(&mut self) -> &mut Self {
        self.params.insert("include_rented", "1");
        self
    }
}
