use serde::{Deserialize, Serialize};

/// A sellable product of the business catalogue.
///
/// This is the only record shape the cart depends on: identity, a display
/// name and the unit selling price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProduct {
    pub id: i64,
    pub name: String,
    pub selling_price: f64,
}

impl BusinessProduct {
    pub fn new(id: i64, name: impl Into<String>, selling_price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            selling_price,
        }
    }
}
