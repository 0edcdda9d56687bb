use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One property listing from a search result.
///
/// The payload is carried through exactly as the source returned it. The
/// accessors pull out the commonly used fields and tolerate the source's
/// habit of sending numbers as strings; everything else is reachable via
/// [`get`](Self::get).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Listing {
    raw: Value,
}

impl Listing {
    pub(crate) fn from_entry(raw: Value) -> Self {
        Self { raw }
    }

    /// Raw field access for anything without a dedicated accessor.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.raw.get(field)
    }

    /// Source identifier of this listing.
    pub fn listing_id(&self) -> Option<String> {
        match self.get("listing_id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Asking price (sale) or per-period rent (rental).
    pub fn price(&self) -> Option<f64> {
        numeric(self.get("price")?)
    }

    /// Number of bedrooms.
    pub fn bedrooms(&self) -> Option<u32> {
        numeric(self.get("num_bedrooms")?).map(|beds| beds as u32)
    }

    /// Human-readable address.
    pub fn address(&self) -> Option<&str> {
        self.get("displayable_address")?.as_str()
    }

    /// Listing description text.
    pub fn description(&self) -> Option<&str> {
        self.get("description")?.as_str()
    }

    /// Details page URL.
    pub fn details_url(&self) -> Option<&str> {
        self.get("details_url")?.as_str()
    }

    /// The unmodified payload.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consumes the record, returning the unmodified payload.
    pub fn into_raw(self) -> Value {
        self.raw
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Listing {
        Listing::from_entry(json!({
            "listing_id": "55863781",
            "price": "350000",
            "num_bedrooms": "2",
            "displayable_address": "Wapping High Street, London E1W",
            "description": "A spacious riverside flat.",
            "details_url": "https://listings.example/detail/55863781",
            "num_bathrooms": 1
        }))
    }

    #[test]
    fn accessors_read_common_fields() {
        let listing = sample();
        assert_eq!(listing.listing_id().as_deref(), Some("55863781"));
        assert_eq!(listing.price(), Some(350_000.0));
        assert_eq!(listing.bedrooms(), Some(2));
        assert_eq!(listing.address(), Some("Wapping High Street, London E1W"));
        assert_eq!(listing.description(), Some("A spacious riverside flat."));
        assert_eq!(
            listing.details_url(),
            Some("https://listings.example/detail/55863781")
        );
    }

    #[test]
    fn accessors_tolerate_native_numbers() {
        let listing = Listing::from_entry(json!({
            "listing_id": 55863781,
            "price": 350000,
            "num_bedrooms": 2
        }));
        assert_eq!(listing.listing_id().as_deref(), Some("55863781"));
        assert_eq!(listing.price(), Some(350_000.0));
        assert_eq!(listing.bedrooms(), Some(2));
    }

    #[test]
    fn missing_fields_read_as_none() {
        let listing = Listing::from_entry(json!({}));
        assert_eq!(listing.listing_id(), None);
        assert_eq!(listing.price(), None);
        assert_eq!(listing.address(), None);
    }

    #[test]
    fn unknown_fields_are_carried_through() {
        let listing = sample();
        assert_eq!(listing.get("num_bathrooms"), Some(&json!(1)));
        assert_eq!(listing.get("no_such_field"), None);
    }

    #[test]
    fn listings_serialize_transparently() {
        let listing = sample();
        let round_tripped: Listing =
            serde_json::from_str(&serde_json::to_string(&listing).unwrap()).unwrap();
        assert_eq!(round_tripped, listing);
    }
}
