//! Working set of products for one POS sale.
//!
//! Line items are kept in insertion order, one per product id. Every
//! operation is total: unknown ids and a decrement at quantity 1 are no-ops.

use crate::models::line_item::LineItem;
use crate::models::product::BusinessProduct;

/// What `add_to_cart` did, reported to the observer.
#[derive(Debug, Clone, PartialEq)]
pub enum CartNotice {
    QuantityIncreased { name: String, quantity: u32 },
    Added { name: String },
}

pub trait CartObserver {
    fn notify(&mut self, notice: &CartNotice);
}

/// Observer that drops every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl CartObserver for Silent {
    fn notify(&mut self, _notice: &CartNotice) {}
}

/// Observer that keeps every notice, in order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub notices: Vec<CartNotice>,
}

impl CartObserver for Recorder {
    fn notify(&mut self, notice: &CartNotice) {
        self.notices.push(notice.clone());
    }
}

#[derive(Debug, Default)]
pub struct Cart<O: CartObserver = Silent> {
    items: Vec<LineItem>,
    observer: O,
}

impl Cart<Silent> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: CartObserver> Cart<O> {
    pub fn with_observer(observer: O) -> Self {
        Self {
            items: Vec::new(),
            observer,
        }
    }

    pub fn add_to_cart(&mut self, product: BusinessProduct) {
        let notice = match self.position(product.id) {
            Some(i) => {
                let item = &mut self.items[i];
                item.quantity += 1;
                CartNotice::QuantityIncreased {
                    name: item.product.name.clone(),
                    quantity: item.quantity,
                }
            }
            None => {
                let name = product.name.clone();
                self.items.push(LineItem::new(product));
                CartNotice::Added { name }
            }
        };

        self.observer.notify(&notice);
    }

    pub fn remove_from_cart(&mut self, product_id: i64) {
        self.items.retain(|item| item.product_id() != product_id);
    }

    pub fn increase_quantity(&mut self, product_id: i64) {
        if let Some(item) = self.item_mut(product_id) {
            item.quantity += 1;
        }
    }

    /// Never goes below 1; use `remove_from_cart` to drop the line.
    pub fn decrease_quantity(&mut self, product_id: i64) {
        if let Some(item) = self.item_mut(product_id)
            && item.quantity > 1
        {
            item.quantity -= 1;
        }
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, product_id: i64) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_id() == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn position(&self, product_id: i64) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product_id() == product_id)
    }

    fn item_mut(&mut self, product_id: i64) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| item.product_id() == product_id)
    }
}
