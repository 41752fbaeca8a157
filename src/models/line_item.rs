use super::product::BusinessProduct;
use serde::Serialize;

/// A cart entry: the full product record plus how many units are taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: BusinessProduct,
    pub quantity: u32, // always >= 1 while in a cart
}

impl LineItem {
    pub fn new(product: BusinessProduct) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> i64 {
        self.product.id
    }

    pub fn subtotal(&self) -> f64 {
        self.product.selling_price * f64::from(self.quantity)
    }
}
