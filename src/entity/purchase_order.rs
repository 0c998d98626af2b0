use chrono::Local;
use fakeit::hipster;
use rand::{thread_rng, Rng};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};

pub const DEFAULT_STATUS: &str = "pending";
pub const FAKE_STATUSES: [&str; 4] = ["pending", "approved", "completed", "cancelled"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "purchase_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_number: String,
    pub vendor_id: i32,
    pub order_date: Date,
    pub status: String,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new() -> Self {
        let now = Local::now();
        Self {
            id: NotSet,
            order_number: NotSet,
            vendor_id: NotSet,
            order_date: Set(now.date_naive()),
            status: Set(DEFAULT_STATUS.to_owned()),
            total_amount: Set(0.0),
            notes: Set(None),
            created_at: Set(now.naive_local()),
        }
    }

    pub fn rand_fake_new(vendor_count: u32) -> Self {
        let mut rng = thread_rng();
        let mut active = Self::new();
        active.order_number = Set(format!("PO-{:06}", rng.gen_range(0..1_000_000)));
        active.vendor_id = Set(rng.gen_range(1..=vendor_count.max(1)) as i32);
        active.status = Set(FAKE_STATUSES[rng.gen_range(0..FAKE_STATUSES.len())].to_owned());
        active.total_amount = Set(f64::from(rng.gen_range(100..500_000)) / 100.0);
        active.notes = Set(Some(hipster::sentence(6)));
        active
    }
}
