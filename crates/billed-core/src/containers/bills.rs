use std::rc::Rc;

use billed_types::{format_date, Bill};

use crate::error::StoreError;
use crate::routes::{Navigator, Route};
use crate::store::BillStore;
use crate::views::{justificatory_markup, BillRow, BillsPage};

/// Share of the modal width given to the justificatory image
const PROOF_WIDTH_RATIO: f64 = 0.5;

/// Commands understood by the justificatory modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCommand {
    Show,
}

impl ModalCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            ModalCommand::Show => "show",
        }
    }
}

/// Eye icon of a table row
pub trait EyeIcon {
    /// Value of `data-bill-url`
    fn bill_url(&self) -> Option<String>;
}

/// The `#modaleFile` dialog of the bills page
pub trait JustificatoryModal {
    fn width(&self) -> f64;
    fn set_body(&self, markup: &str);
    fn modal(&self, command: ModalCommand);
}

/// Format a record for display
///
/// A date that cannot be formatted is kept as received so one bad record
/// never takes the whole list down.
pub fn format_row(bill: Bill) -> BillRow {
    let date_label = match format_date(&bill.date) {
        Ok(label) => label,
        Err(err) => {
            tracing::warn!(bill_id = %bill.id, error = %err, "keeping unformatted date");
            bill.date.clone()
        }
    };
    BillRow { bill, date_label }
}

/// Container of the employee bills page
pub struct Bills {
    store: Rc<dyn BillStore>,
    navigator: Rc<dyn Navigator>,
}

impl Bills {
    pub fn new(store: Rc<dyn BillStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Fetch and format the bill list
    pub async fn fetch_list(&self) -> Result<Vec<BillRow>, StoreError> {
        let bills = self.store.list().await?;
        tracing::debug!(count = bills.len(), "bills fetched");
        Ok(bills.into_iter().map(format_row).collect())
    }

    /// Page state after fetching; a store failure becomes the error view
    pub async fn load_page(&self) -> BillsPage {
        match self.fetch_list().await {
            Ok(rows) => BillsPage::Loaded(rows),
            Err(err) => {
                tracing::error!(error = %err, status = ?err.status, "failed to fetch bills");
                BillsPage::Failed(err.to_string())
            }
        }
    }

    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }

    /// Show the justificatory of the clicked row in the modal
    pub fn handle_click_icon_eye(&self, icon: &dyn EyeIcon, modal: &dyn JustificatoryModal) {
        let bill_url = icon.bill_url();
        let width = (modal.width() * PROOF_WIDTH_RATIO).floor().max(0.0) as u32;
        modal.set_body(&justificatory_markup(bill_url.as_deref(), width));
        modal.modal(ModalCommand::Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_format_row() {
        let bill = fixtures::bills().remove(0);
        let row = format_row(bill);
        assert_eq!(row.date_label, "4 Avr. 04");
    }

    #[test]
    fn test_format_row_keeps_bad_date() {
        let mut bill = fixtures::bills().remove(0);
        bill.date = "2004-02-31".to_string();
        let row = format_row(bill);
        assert_eq!(row.date_label, "2004-02-31");
    }

    #[test]
    fn test_modal_command_name() {
        assert_eq!(ModalCommand::Show.as_str(), "show");
    }
}
