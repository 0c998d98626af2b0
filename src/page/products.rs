use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use super::{
    form::{self, FormError},
    or_dash, report_failure,
};
use crate::entity::product;
use crate::notify::{Notification, Notifier};
use crate::render::{self, Render, Table};

/// Raw form input, kept as text the way it was entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub unit: String,
    pub minimum_stock: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            description: String::new(),
            unit: product::DEFAULT_UNIT.to_owned(),
            minimum_stock: "0".to_owned(),
        }
    }
}

impl ProductForm {
    pub fn to_active_model(&self) -> Result<product::ActiveModel, FormError> {
        let mut active = product::ActiveModel::new();
        active.name = Set(form::required("name", &self.name)?);
        active.sku = Set(form::required("sku", &self.sku)?);
        active.description = Set(form::optional(&self.description));
        active.unit = Set(self.unit.clone());
        active.minimum_stock = Set(form::leading_int("minimum_stock", &self.minimum_stock)?);
        Ok(active)
    }
}

#[derive(Debug)]
pub struct ProductsPage {
    pub products: Vec<product::Model>,
    pub loading: bool,
    pub show_form: bool,
    pub form: ProductForm,
}

impl Default for ProductsPage {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            show_form: false,
            form: ProductForm::default(),
        }
    }
}

impl ProductsPage {
    pub async fn load(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) {
        match product::Entity::find()
            .order_by_asc(product::Column::Name)
            .all(db)
            .await
        {
            Ok(products) => {
                debug!("loaded {} products", products.len());
                self.products = products;
            }
            Err(err) => report_failure(notifier, "loading products", "Failed to load products", &err),
        }
        self.loading = false;
    }

    /// Inserts the form as a new product and reloads the list. Returns whether
    /// the product was created.
    pub async fn submit(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) -> bool {
        let inserted = match self.form.to_active_model() {
            Ok(active) => active.insert(db).await.map_err(anyhow::Error::from),
            Err(err) => Err(err.into()),
        };
        if let Err(err) = inserted {
            report_failure(notifier, "creating product", "Failed to create product", &err);
            return false;
        }
        notifier.notify(Notification::success("Product created successfully"));
        self.form = ProductForm::default();
        self.show_form = false;
        self.load(db, notifier).await;
        true
    }
}

impl Render for ProductsPage {
    fn render(&self) -> String {
        let mut out = render::heading("Products", "Manage your product inventory and details");
        if self.loading {
            out.push_str(&render::loading());
            return out;
        }
        if self.products.is_empty() {
            out.push_str(&render::empty_state(
                "No products found",
                "Get started by adding your first product",
            ));
            return out;
        }
        let mut table = Table::new(["Product Name", "SKU", "Unit", "Min Stock", "Description"]);
        for product in &self.products {
            table.push([
                product.name.clone(),
                product.sku.clone(),
                product.unit.clone(),
                product.minimum_stock.to_string(),
                or_dash(product.description.as_deref()).to_owned(),
            ]);
        }
        out.push_str(&table.to_string());
        out
    }
}
