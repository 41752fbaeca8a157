use serde::Serialize;

/// One line of a completed sale (⇔ sale_items row).
#[derive(Debug, Clone, Serialize)]
pub struct SaleLine {
    pub product_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl SaleLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A checked-out cart (⇔ sales row + its sale_items).
#[derive(Debug, Clone, Serialize)]
pub struct Sale {
    pub id: i64,
    pub created_at: String, // RFC 3339
    pub total_amount: f64,
    pub total_items: u32,
    pub lines: Vec<SaleLine>,
}
