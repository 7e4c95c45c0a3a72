//! Markup renderers
//!
//! Every function here is pure: same input, same bytes out. Interpolated
//! text is escaped by `maud`.

pub mod bills_ui;
mod icons;
pub mod layout;
pub mod new_bill_ui;
pub mod pages;

pub use bills_ui::{justificatory_markup, render_bills_list, render_bills_table, BillRow, BillsPage};
pub use layout::vertical_layout;
pub use new_bill_ui::render_new_bill_form;
pub use pages::{render_error_page, render_loading_page, render_login_page};
