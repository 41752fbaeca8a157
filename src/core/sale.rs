use crate::config::Config;
use crate::core::cart::{Cart, CartNotice, CartObserver};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_sale, load_product, load_sales};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::formatting::{bold, rule};
use crate::utils::money;
use crate::utils::table::{Column, Table};
use crate::utils::time::short_timestamp;

/// Prints cart notifications as console messages.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl CartObserver for ConsoleObserver {
    fn notify(&mut self, notice: &CartNotice) {
        match notice {
            CartNotice::QuantityIncreased { name, quantity } => {
                info(format!("Increased quantity of {} to {}", name, quantity))
            }
            CartNotice::Added { name } => success(format!("Added {} to cart", name)),
        }
    }
}

/// Adjustments applied to the cart after the products are added.
#[derive(Debug, Default, Clone)]
pub struct CartEdits {
    pub decrease: Vec<i64>,
    pub remove: Vec<i64>,
}

/// High-level logic for the `sale` command.
pub struct SaleLogic;

impl SaleLogic {
    /// Build a cart from product ids. Repeated ids raise the quantity.
    pub fn build_cart<O: CartObserver>(
        pool: &DbPool,
        ids: &[i64],
        edits: &CartEdits,
        observer: O,
    ) -> AppResult<Cart<O>> {
        let mut cart = Cart::with_observer(observer);

        for &id in ids {
            let product = load_product(&pool.conn, id)?.ok_or(AppError::ProductNotFound(id))?;
            cart.add_to_cart(product);
        }
        for &id in &edits.decrease {
            cart.decrease_quantity(id);
        }
        for &id in &edits.remove {
            cart.remove_from_cart(id);
        }

        Ok(cart)
    }

    pub fn receipt<O: CartObserver>(cart: &Cart<O>, cfg: &Config) -> String {
        let mut table = Table::new(
            vec![
                Column::left("ITEM"),
                Column::right("QTY"),
                Column::right("PRICE"),
                Column::right("SUBTOTAL"),
            ],
            &cfg.separator_char,
        );

        for item in cart.items() {
            table.add_row(vec![
                item.product.name.clone(),
                item.quantity.to_string(),
                money(item.product.selling_price, &cfg.currency),
                money(item.subtotal(), &cfg.currency),
            ]);
        }

        let mut out = table.render();
        out.push_str(&rule(&cfg.separator_char, 32));
        out.push('\n');
        out.push_str(&format!("Items: {}\n", cart.total_items()));
        out.push_str(&format!(
            "{} {}\n",
            bold("TOTAL:"),
            money(cart.total_amount(), &cfg.currency)
        ));
        out
    }

    /// Run a checkout. Returns the new sale id, or `None` on a dry run.
    pub fn checkout(
        pool: &mut DbPool,
        cfg: &Config,
        ids: &[i64],
        edits: &CartEdits,
        dry_run: bool,
    ) -> AppResult<Option<i64>> {
        let mut cart = Self::build_cart(pool, ids, edits, ConsoleObserver)?;

        if cart.is_empty() {
            return Err(AppError::EmptyCart);
        }

        println!();
        print!("{}", Self::receipt(&cart, cfg));

        if dry_run {
            info("Dry run: sale not recorded.");
            return Ok(None);
        }

        let total_amount = cart.total_amount();
        let total_items = cart.total_items();
        let sale_id =
            pool.with_tx(|tx| insert_sale(tx, cart.items(), total_amount, total_items))?;

        ttlog_or_warn(
            &pool.conn,
            "sale",
            &sale_id.to_string(),
            &format!("{} item(s), total {:.2}", total_items, total_amount),
        );
        cart.clear_cart();

        success(format!("Sale #{} recorded.", sale_id));
        Ok(Some(sale_id))
    }

    pub fn list(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let sales = load_sales(&pool.conn)?;

        if sales.is_empty() {
            info("No sales recorded.");
            return Ok(());
        }

        let mut table = Table::new(
            vec![
                Column::right("ID"),
                Column::left("DATE"),
                Column::right("ITEMS"),
                Column::right("TOTAL"),
            ],
            &cfg.separator_char,
        );

        let mut takings = 0.0;
        for s in &sales {
            takings += s.total_amount;
            table.add_row(vec![
                s.id.to_string(),
                short_timestamp(&s.created_at),
                s.total_items.to_string(),
                money(s.total_amount, &cfg.currency),
            ]);
        }

        print!("{}", table.render());
        println!("Takings: {}", money(takings, &cfg.currency));
        Ok(())
    }
}
