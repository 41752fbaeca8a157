use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_product, insert_product, load_product, load_products};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::money;
use crate::utils::table::{Column, Table};

/// Catalogue management for the `product` command.
pub struct ProductLogic;

impl ProductLogic {
    pub fn parse_price(raw: &str) -> AppResult<f64> {
        let price: f64 = raw
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| AppError::InvalidPrice(raw.to_string()))?;

        if !price.is_finite() || price < 0.0 {
            return Err(AppError::InvalidPrice(raw.to_string()));
        }
        Ok(price)
    }

    pub fn add(pool: &mut DbPool, cfg: &Config, name: &str, price: &str) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("Product name cannot be empty".into()));
        }
        let price = Self::parse_price(price)?;

        let id = insert_product(&pool.conn, name, price)?;

        ttlog_or_warn(
            &pool.conn,
            "product_add",
            &id.to_string(),
            &format!("{} @ {:.2}", name, price),
        );
        success(format!(
            "Product #{} '{}' added at {}.",
            id,
            name,
            money(price, &cfg.currency)
        ));

        Ok(id)
    }

    pub fn list(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let products = load_products(&pool.conn)?;

        if products.is_empty() {
            info("No products in the catalogue.");
            return Ok(());
        }

        let mut table = Table::new(
            vec![Column::right("ID"), Column::left("NAME"), Column::right("PRICE")],
            &cfg.separator_char,
        );
        for p in &products {
            table.add_row(vec![
                p.id.to_string(),
                p.name.clone(),
                money(p.selling_price, &cfg.currency),
            ]);
        }

        print!("{}", table.render());
        Ok(())
    }

    pub fn del(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let product = load_product(&pool.conn, id)?.ok_or(AppError::ProductNotFound(id))?;

        delete_product(&pool.conn, id)?;

        ttlog_or_warn(&pool.conn, "product_del", &id.to_string(), &product.name);
        success(format!("Product #{} '{}' deleted.", id, product.name));
        Ok(())
    }
}
