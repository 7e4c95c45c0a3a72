//! Expense report front-end logic
//!
//! Everything here is plain Rust with no DOM access, so it runs under
//! `cargo test` as well as in the browser build:
//!
//! - [`store`]: the remote store seam, with [`mock::MockStore`] for tests
//! - [`containers`]: what each page does when the user acts on it
//! - [`views`]: pure markup renderers
//! - [`routes`]: route table, access rules and the [`routes::Navigator`] seam

pub mod attachment;
pub mod containers;
pub mod error;
pub mod fixtures;
pub mod mock;
pub mod routes;
pub mod session;
pub mod store;
pub mod views;

pub use attachment::{validate_file_name, ACCEPTED_EXTENSIONS};
pub use containers::{Bills, FileCheck, NewBill, NewBillForm, SubmitOutcome};
pub use error::{AttachmentError, BilledError, Result, StoreError};
pub use mock::MockStore;
pub use routes::{resolve, Navigator, Route};
pub use session::parse_session;
pub use store::{Attachment, BillStore, CreatePayload};
pub use views::{render_bills_list, render_new_bill_form, BillRow, BillsPage};
