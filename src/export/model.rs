use crate::models::sale::Sale;
use serde::Serialize;

/// Flat row for exports: one line per sold product.
#[derive(Serialize, Clone, Debug)]
pub struct SaleLineExport {
    pub sale_id: i64,
    pub created_at: String,
    pub product_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

impl SaleLineExport {
    pub fn from_sales(sales: &[Sale]) -> Vec<Self> {
        sales
            .iter()
            .flat_map(|sale| {
                sale.lines.iter().map(move |line| SaleLineExport {
                    sale_id: sale.id,
                    created_at: sale.created_at.clone(),
                    product_id: line.product_id,
                    name: line.name.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    subtotal: line.subtotal(),
                })
            })
            .collect()
    }
}
