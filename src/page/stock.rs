use anyhow::{anyhow, Context, Result};
use chrono::Local;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{debug, info};

use super::{report_failure, Badge};
use crate::entity::{
    product,
    stock_balance::{self, StockBalance},
    stock_level,
};
use crate::notify::{Notification, Notifier};
use crate::render::{self, Render, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StockStatus {
    pub label: &'static str,
    pub badge: Badge,
}

pub fn stock_status(current: i32, minimum: i32) -> StockStatus {
    if current <= 0 {
        StockStatus {
            label: "Out of Stock",
            badge: Badge::Destructive,
        }
    } else if current <= minimum {
        StockStatus {
            label: "Low Stock",
            badge: Badge::Secondary,
        }
    } else {
        StockStatus {
            label: "In Stock",
            badge: Badge::Default,
        }
    }
}

#[derive(Debug)]
pub struct StockPage {
    pub items: Vec<StockBalance>,
    pub loading: bool,
}

impl Default for StockPage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl StockPage {
    pub async fn load(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) {
        match stock_balance::fetch_all(db).await {
            Ok(items) => {
                debug!("loaded {} stock balance rows", items.len());
                self.items = items;
            }
            Err(err) => report_failure(
                notifier,
                "loading stock balance",
                "Failed to load stock balance",
                &err,
            ),
        }
        self.loading = false;
    }

    /// Records the quantity on hand for the product with `sku`, then reloads.
    pub async fn adjust(
        &mut self,
        db: &DatabaseConnection,
        notifier: &dyn Notifier,
        sku: &str,
        quantity: i32,
    ) -> bool {
        if let Err(err) = set_quantity(db, sku, quantity).await {
            report_failure(
                notifier,
                "updating stock level",
                "Failed to update stock level",
                &err,
            );
            return false;
        }
        notifier.notify(Notification::success("Stock level updated successfully"));
        self.load(db, notifier).await;
        true
    }
}

async fn set_quantity(db: &DatabaseConnection, sku: &str, quantity: i32) -> Result<()> {
    let product = product::Entity::find()
        .filter(product::Column::Sku.eq(sku))
        .one(db)
        .await
        .context("Failed to look up product")?
        .ok_or_else(|| anyhow!("no product with sku {}", sku))?;
    match stock_level::Entity::find_by_id(product.id).one(db).await? {
        Some(level) => {
            let mut level: stock_level::ActiveModel = level.into();
            level.quantity = Set(quantity);
            level.updated_at = Set(Local::now().naive_local());
            level.update(db).await?;
        }
        None => {
            stock_level::ActiveModel::new(product.id, quantity)
                .insert(db)
                .await?;
        }
    }
    info!("stock level of {} set to {}", sku, quantity);
    Ok(())
}

impl Render for StockPage {
    fn render(&self) -> String {
        let mut out = render::heading("Stock Balance", "Current stock levels for all products");
        if self.loading {
            out.push_str(&render::loading());
            return out;
        }
        let mut table = Table::new([
            "Product Name",
            "SKU",
            "Current Stock",
            "Minimum Stock",
            "Unit",
            "Status",
        ]);
        for item in &self.items {
            let current = if item.is_low_stock() {
                format!("! {}", item.current_stock)
            } else {
                item.current_stock.to_string()
            };
            let status = stock_status(item.current_stock, item.minimum_stock);
            table.push([
                item.name.clone(),
                item.sku.clone(),
                current,
                item.minimum_stock.to_string(),
                item.unit.clone(),
                status.badge.decorate(status.label),
            ]);
        }
        out.push_str(&table.to_string());
        if self.items.is_empty() {
            out.push_str("No stock data available\n");
        }
        out
    }
}
