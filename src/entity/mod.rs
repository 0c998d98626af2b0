use sea_orm::{
    sea_query::{Table, TableCreateStatement},
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, Schema, Statement,
    TransactionTrait,
};
use tracing::info;

pub mod product;
pub mod purchase_order;
pub mod sales_order;
pub mod stock_balance;
pub mod stock_level;
pub mod vendor;

fn create_statement<E>(db: &DatabaseConnection, entity: E) -> TableCreateStatement
where
    E: EntityTrait,
{
    Schema::new(db.get_database_backend()).create_table_from_entity(entity)
}

async fn drop_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let mut drop_stmt = Table::drop();
    drop_stmt.if_exists().table(entity);
    db.execute(db.get_database_backend().build(&drop_stmt))
        .await?;
    Ok(())
}

async fn create_table(db: &DatabaseConnection, create_stmt: TableCreateStatement) -> Result<(), DbErr> {
    let create_stmt = db.get_database_backend().build(&create_stmt);
    if db.get_database_backend() == DatabaseBackend::Postgres {
        // for crdb
        let txn = db.begin().await?;
        let serial_normalization = Statement::from_string(
            DatabaseBackend::Postgres,
            "set local serial_normalization = sql_sequence;".to_owned(),
        );
        txn.execute(serial_normalization).await?;
        txn.execute(create_stmt).await?;
        txn.commit().await?;
    } else {
        // for other db
        db.execute(create_stmt).await?;
    }
    Ok(())
}

/// Drops and recreates every table. Stock levels reference products, so they
/// are dropped first and created last.
pub async fn schema_setup(db: &DatabaseConnection) -> Result<(), DbErr> {
    drop_table(db, stock_level::Entity).await?;
    drop_table(db, sales_order::Entity).await?;
    drop_table(db, purchase_order::Entity).await?;
    drop_table(db, vendor::Entity).await?;
    drop_table(db, product::Entity).await?;

    create_table(db, create_statement(db, product::Entity)).await?;
    info!("products schema created");
    create_table(db, create_statement(db, vendor::Entity)).await?;
    info!("vendors schema created");
    create_table(db, create_statement(db, purchase_order::Entity)).await?;
    info!("purchase_orders schema created");
    create_table(db, create_statement(db, sales_order::Entity)).await?;
    info!("sales_orders schema created");
    create_table(db, create_statement(db, stock_level::Entity)).await?;
    info!("stock_levels schema created");
    Ok(())
}
