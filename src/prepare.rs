use crate::entity::{product, purchase_order, sales_order, schema_setup, stock_level, vendor};
use anyhow::{Context, Result};
use futures::future::join_all;
use sea_orm::ActiveModelTrait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use std::{future::Future, pin::Pin};
use tracing::info;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub product_count: u32,
    pub vendor_count: u32,
    pub order_count: u32,
    pub txn_size: u32,
    pub concurrent: u32,
}

/// Recreates the schema and fills it with fake rows.
pub async fn execute<T: Into<Config>>(db: &DatabaseConnection, config: T) -> Result<()> {
    let config = config.into();
    // create table
    schema_setup(db).await.context("Failed to setup schema")?;
    // insert rows
    insert_products(db, &config)
        .await
        .context("Failed to insert products")?;
    insert_vendors(db, &config)
        .await
        .context("Failed to insert vendors")?;
    insert_orders(db, &config)
        .await
        .context("Failed to insert orders")?;
    Ok(())
}

async fn insert_products(db: &DatabaseConnection, config: &Config) -> Result<()> {
    batch_exec(
        db,
        config.product_count,
        config.txn_size,
        config.concurrent,
        |txn| {
            Box::pin(async move {
                let product_inserted = product::ActiveModel::rand_fake_new().insert(txn).await?;
                stock_level::ActiveModel::rand_fake_new(product_inserted.id)
                    .insert(txn)
                    .await?;
                Ok(())
            })
        },
    )
    .await?;
    info!("{} products inserted", config.product_count);
    Ok(())
}

async fn insert_vendors(db: &DatabaseConnection, config: &Config) -> Result<()> {
    batch_exec(
        db,
        config.vendor_count,
        config.txn_size,
        config.concurrent,
        |txn| {
            Box::pin(async move {
                vendor::ActiveModel::rand_fake_new().insert(txn).await?;
                Ok(())
            })
        },
    )
    .await?;
    info!("{} vendors inserted", config.vendor_count);
    Ok(())
}

async fn insert_orders(db: &DatabaseConnection, config: &Config) -> Result<()> {
    let vendor_count = config.vendor_count;
    batch_exec(
        db,
        config.order_count,
        config.txn_size,
        config.concurrent,
        move |txn| {
            Box::pin(async move {
                purchase_order::ActiveModel::rand_fake_new(vendor_count)
                    .insert(txn)
                    .await?;
                Ok(())
            })
        },
    )
    .await?;
    batch_exec(
        db,
        config.order_count,
        config.txn_size,
        config.concurrent,
        |txn| {
            Box::pin(async move {
                sales_order::ActiveModel::rand_fake_new().insert(txn).await?;
                Ok(())
            })
        },
    )
    .await?;
    info!("{} purchase and sales orders inserted", config.order_count);
    Ok(())
}

/// Splits `count` inserts over `concurrent` tasks, each committing
/// transactions of at most `txn_size_limit` rows.
async fn batch_exec<F>(
    db: &DatabaseConnection,
    count: u32,
    txn_size_limit: u32,
    concurrent: u32,
    callback: F,
) -> Result<()>
where
    F: for<'c> Fn(
            &'c DatabaseTransaction,
        )
            -> Pin<Box<dyn Future<Output = std::result::Result<(), DbErr>> + Send + 'c>>
        + Send
        + Sync
        + Copy
        + 'static,
{
    let concurrent = concurrent.max(1);
    let txn_size_limit = txn_size_limit.max(1);
    let mut join_handle_vec = Vec::new();
    for i in 0..concurrent {
        let db = db.clone();
        let handle = tokio::spawn(async move {
            let mut unit_count = count / concurrent;
            if i == concurrent - 1 {
                unit_count += count - (unit_count * concurrent);
            }
            while unit_count > 0 {
                let txn_size = unit_count.min(txn_size_limit);
                unit_count -= txn_size;
                db.transaction::<_, (), DbErr>(|txn| {
                    Box::pin(async move {
                        for _ in 0..txn_size {
                            callback(txn).await?;
                        }
                        Ok(())
                    })
                })
                .await?;
            }
            Ok::<(), sea_orm::TransactionError<DbErr>>(())
        });
        join_handle_vec.push(handle);
    }
    let join_result = join_all(join_handle_vec).await;
    for handle in join_result {
        handle??;
    }
    Ok(())
}
