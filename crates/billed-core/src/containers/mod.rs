//! Page containers: the logic behind each page's event handlers

pub mod bills;
pub mod new_bill;

pub use bills::{format_row, Bills, EyeIcon, JustificatoryModal, ModalCommand};
pub use new_bill::{FileCheck, NewBill, NewBillForm, PendingFile, SubmitOutcome};
