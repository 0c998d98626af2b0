use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use super::{
    form::{self, FormError},
    or_dash, report_failure,
};
use crate::entity::vendor;
use crate::notify::{Notification, Notifier};
use crate::render::{self, Render, Table};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VendorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_person: String,
}

impl VendorForm {
    pub fn to_active_model(&self) -> Result<vendor::ActiveModel, FormError> {
        let mut active = vendor::ActiveModel::new();
        active.name = Set(form::required("name", &self.name)?);
        active.email = Set(form::optional(&self.email));
        active.phone = Set(form::optional(&self.phone));
        active.address = Set(form::optional(&self.address));
        active.contact_person = Set(form::optional(&self.contact_person));
        Ok(active)
    }
}

#[derive(Debug)]
pub struct VendorsPage {
    pub vendors: Vec<vendor::Model>,
    pub loading: bool,
    pub show_form: bool,
    pub form: VendorForm,
}

impl Default for VendorsPage {
    fn default() -> Self {
        Self {
            vendors: Vec::new(),
            loading: true,
            show_form: false,
            form: VendorForm::default(),
        }
    }
}

impl VendorsPage {
    pub async fn load(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) {
        match vendor::Entity::find()
            .order_by_asc(vendor::Column::Name)
            .all(db)
            .await
        {
            Ok(vendors) => {
                debug!("loaded {} vendors", vendors.len());
                self.vendors = vendors;
            }
            Err(err) => report_failure(notifier, "loading vendors", "Failed to load vendors", &err),
        }
        self.loading = false;
    }

    pub async fn submit(&mut self, db: &DatabaseConnection, notifier: &dyn Notifier) -> bool {
        let inserted = match self.form.to_active_model() {
            Ok(active) => active.insert(db).await.map_err(anyhow::Error::from),
            Err(err) => Err(err.into()),
        };
        if let Err(err) = inserted {
            report_failure(notifier, "creating vendor", "Failed to create vendor", &err);
            return false;
        }
        notifier.notify(Notification::success("Vendor created successfully"));
        self.form = VendorForm::default();
        self.show_form = false;
        self.load(db, notifier).await;
        true
    }
}

impl Render for VendorsPage {
    fn render(&self) -> String {
        let mut out = render::heading("Vendors", "Manage your supplier and vendor relationships");
        if self.loading {
            out.push_str(&render::loading());
            return out;
        }
        if self.vendors.is_empty() {
            out.push_str(&render::empty_state(
                "No vendors found",
                "Get started by adding your first vendor",
            ));
            return out;
        }
        let mut table = Table::new(["Vendor Name", "Contact Person", "Email", "Phone", "Address"]);
        for vendor in &self.vendors {
            table.push([
                vendor.name.as_str(),
                or_dash(vendor.contact_person.as_deref()),
                or_dash(vendor.email.as_deref()),
                or_dash(vendor.phone.as_deref()),
                or_dash(vendor.address.as_deref()),
            ]);
        }
        out.push_str(&table.to_string());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::testing::RecordingNotifier;
    use crate::page::testing::{memory_db, prepared_db};

    #[tokio::test]
    async fn vendor_with_only_a_name_stores_nulls() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = VendorsPage::default();
        page.form.name = "Acme Supply".to_owned();

        assert!(page.submit(&db, &notifier).await);

        let stored = vendor::Entity::find().one(&db).await.unwrap().unwrap();
        assert_eq!(stored.name, "Acme Supply");
        assert_eq!(stored.email, None);
        assert_eq!(stored.phone, None);
        assert_eq!(stored.address, None);
        assert_eq!(stored.contact_person, None);
        assert_eq!(page.vendors, vec![stored]);
        assert_eq!(
            notifier.all(),
            vec![Notification::success("Vendor created successfully")]
        );
    }

    #[tokio::test]
    async fn missing_name_is_rejected() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = VendorsPage::default();
        page.form.email = "orders@acme.test".to_owned();

        assert!(!page.submit(&db, &notifier).await);

        assert_eq!(page.form.email, "orders@acme.test");
        assert_eq!(notifier.errors(), vec![Notification::error("Failed to create vendor")]);
    }

    #[tokio::test]
    async fn rendered_table_shows_dash_for_missing_fields() {
        let db = prepared_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = VendorsPage::default();
        page.form = VendorForm {
            name: "Bolt Bros".to_owned(),
            phone: "555-0100".to_owned(),
            ..VendorForm::default()
        };
        assert!(page.submit(&db, &notifier).await);

        let rendered = page.render();
        let row = rendered.lines().find(|l| l.starts_with("Bolt Bros")).unwrap();
        let cells: Vec<&str> = row.split('|').map(str::trim).collect();
        assert_eq!(cells, ["Bolt Bros", "-", "-", "555-0100", "-"]);
    }

    #[tokio::test]
    async fn failed_load_notifies_once() {
        let db = memory_db().await;
        let notifier = RecordingNotifier::default();
        let mut page = VendorsPage::default();
        page.load(&db, &notifier).await;
        assert!(page.vendors.is_empty());
        assert_eq!(notifier.all(), vec![Notification::error("Failed to load vendors")]);
    }
}
