mod entity;
mod notify;
mod page;
mod prepare;
mod render;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database};
use tracing_subscriber::EnvFilter;

use notify::TerminalNotifier;
use page::{
    dashboard::DashboardPage,
    products::{ProductForm, ProductsPage},
    purchase_orders::{PurchaseOrderForm, PurchaseOrdersPage},
    reports::ReportsPage,
    sales_orders::{SalesOrderForm, SalesOrdersPage},
    stock::StockPage,
    vendors::{VendorForm, VendorsPage},
};
use render::Render;

/// Inventory dashboard: products, vendors, orders and stock balances
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: SubCommandArgs,
    #[clap(short = 'u', long, env = "DATABASE_URL")]
    db_url: String,
    /// Log at debug level unless RUST_LOG says otherwise
    #[clap(long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum SubCommandArgs {
    /// Recreate the schema and seed it with fake rows
    Prepare {
        #[clap(long, default_value = "0")]
        products: u32,
        #[clap(long, default_value = "0")]
        vendors: u32,
        #[clap(long, default_value = "0")]
        orders: u32,
        #[clap(short = 's', long, default_value = "1024")]
        txn_size: u32,
        #[clap(short = 'c', long, default_value = "4")]
        concurrent: u32,
    },
    /// Counts and low stock alerts
    Dashboard,
    #[clap(subcommand)]
    Stock(StockCommand),
    #[clap(subcommand)]
    Products(ProductsCommand),
    #[clap(subcommand)]
    Vendors(VendorsCommand),
    #[clap(subcommand)]
    PurchaseOrders(PurchaseOrdersCommand),
    #[clap(subcommand)]
    SalesOrders(SalesOrdersCommand),
    /// Order totals and quick insights
    Reports,
}

#[derive(Subcommand, Debug)]
enum StockCommand {
    List,
    /// Set the quantity on hand for a product
    Adjust {
        #[clap(long)]
        sku: String,
        #[clap(long, allow_hyphen_values = true)]
        quantity: i32,
    },
}

#[derive(Subcommand, Debug)]
enum ProductsCommand {
    List,
    Add {
        #[clap(long)]
        name: String,
        #[clap(long)]
        sku: String,
        #[clap(long, default_value = "")]
        description: String,
        #[clap(long, default_value = "pcs")]
        unit: String,
        #[clap(long, default_value = "0", allow_hyphen_values = true)]
        minimum_stock: String,
    },
}

#[derive(Subcommand, Debug)]
enum VendorsCommand {
    List,
    Add {
        #[clap(long)]
        name: String,
        #[clap(long, default_value = "")]
        email: String,
        #[clap(long, default_value = "")]
        phone: String,
        #[clap(long, default_value = "")]
        address: String,
        #[clap(long, default_value = "")]
        contact_person: String,
    },
}

#[derive(Subcommand, Debug)]
enum PurchaseOrdersCommand {
    List,
    Add {
        #[clap(long)]
        order_number: String,
        #[clap(long)]
        vendor_id: String,
        #[clap(long)]
        total_amount: String,
        /// YYYY-MM-DD, today when omitted
        #[clap(long, default_value = "")]
        order_date: String,
        #[clap(long, default_value = "pending")]
        status: String,
        #[clap(long, default_value = "")]
        notes: String,
    },
}

#[derive(Subcommand, Debug)]
enum SalesOrdersCommand {
    List,
    Add {
        #[clap(long)]
        order_number: String,
        #[clap(long)]
        total_amount: String,
        #[clap(long, default_value = "")]
        customer_name: String,
        #[clap(long, default_value = "")]
        customer_email: String,
        #[clap(long, default_value = "")]
        shipping_address: String,
        #[clap(long, default_value = "")]
        sales_channel_id: String,
        /// YYYY-MM-DD, today when omitted
        #[clap(long, default_value = "")]
        order_date: String,
        #[clap(long, default_value = "pending")]
        status: String,
    },
}

impl From<&Args> for prepare::Config {
    fn from(args: &Args) -> Self {
        match args.command {
            SubCommandArgs::Prepare {
                products,
                vendors,
                orders,
                txn_size,
                concurrent,
            } => Self {
                product_count: products,
                vendor_count: vendors,
                order_count: orders,
                txn_size,
                concurrent,
            },
            _ => unreachable!(),
        }
    }
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug).ok();

    let mut opt = ConnectOptions::new(args.db_url.clone());
    opt.sqlx_logging(args.debug);
    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let notifier = TerminalNotifier;

    let output = match &args.command {
        SubCommandArgs::Prepare { .. } => {
            prepare::execute(&db, &args)
                .await
                .context("Failed to prepare data")?;
            return Ok(());
        }
        SubCommandArgs::Dashboard => {
            let mut page = DashboardPage::default();
            page.load(&db, &notifier).await;
            page.render()
        }
        SubCommandArgs::Reports => {
            let mut page = ReportsPage::default();
            page.load(&db, &notifier).await;
            page.render()
        }
        SubCommandArgs::Stock(command) => {
            let mut page = StockPage::default();
            match command {
                StockCommand::List => page.load(&db, &notifier).await,
                StockCommand::Adjust { sku, quantity } => {
                    if !page.adjust(&db, &notifier, sku, *quantity).await {
                        page.load(&db, &notifier).await;
                    }
                }
            }
            page.render()
        }
        SubCommandArgs::Products(command) => {
            let mut page = ProductsPage::default();
            match command {
                ProductsCommand::List => page.load(&db, &notifier).await,
                ProductsCommand::Add {
                    name,
                    sku,
                    description,
                    unit,
                    minimum_stock,
                } => {
                    page.show_form = true;
                    page.form = ProductForm {
                        name: name.clone(),
                        sku: sku.clone(),
                        description: description.clone(),
                        unit: unit.clone(),
                        minimum_stock: minimum_stock.clone(),
                    };
                    if !page.submit(&db, &notifier).await {
                        page.load(&db, &notifier).await;
                    }
                }
            }
            page.render()
        }
        SubCommandArgs::Vendors(command) => {
            let mut page = VendorsPage::default();
            match command {
                VendorsCommand::List => page.load(&db, &notifier).await,
                VendorsCommand::Add {
                    name,
                    email,
                    phone,
                    address,
                    contact_person,
                } => {
                    page.show_form = true;
                    page.form = VendorForm {
                        name: name.clone(),
                        email: email.clone(),
                        phone: phone.clone(),
                        address: address.clone(),
                        contact_person: contact_person.clone(),
                    };
                    if !page.submit(&db, &notifier).await {
                        page.load(&db, &notifier).await;
                    }
                }
            }
            page.render()
        }
        SubCommandArgs::PurchaseOrders(command) => {
            let mut page = PurchaseOrdersPage::default();
            match command {
                PurchaseOrdersCommand::List => page.load(&db, &notifier).await,
                PurchaseOrdersCommand::Add {
                    order_number,
                    vendor_id,
                    total_amount,
                    order_date,
                    status,
                    notes,
                } => {
                    page.show_form = true;
                    page.form = PurchaseOrderForm {
                        order_number: order_number.clone(),
                        vendor_id: vendor_id.clone(),
                        order_date: order_date.clone(),
                        status: status.clone(),
                        total_amount: total_amount.clone(),
                        notes: notes.clone(),
                    };
                    if !page.submit(&db, &notifier).await {
                        page.load(&db, &notifier).await;
                    }
                }
            }
            page.render()
        }
        SubCommandArgs::SalesOrders(command) => {
            let mut page = SalesOrdersPage::default();
            match command {
                SalesOrdersCommand::List => page.load(&db, &notifier).await,
                SalesOrdersCommand::Add {
                    order_number,
                    total_amount,
                    customer_name,
                    customer_email,
                    shipping_address,
                    sales_channel_id,
                    order_date,
                    status,
                } => {
                    page.show_form = true;
                    page.form = SalesOrderForm {
                        order_number: order_number.clone(),
                        sales_channel_id: sales_channel_id.clone(),
                        customer_name: customer_name.clone(),
                        customer_email: customer_email.clone(),
                        shipping_address: shipping_address.clone(),
                        order_date: order_date.clone(),
                        status: status.clone(),
                        total_amount: total_amount.clone(),
                    };
                    if !page.submit(&db, &notifier).await {
                        page.load(&db, &notifier).await;
                    }
                }
            }
            page.render()
        }
    };
    print!("{}", output);
    Ok(())
}
