pub mod break_type;
pub mod line_item;
pub mod product;
pub mod sale;
pub mod shift;
