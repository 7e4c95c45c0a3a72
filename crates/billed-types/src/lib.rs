pub mod format;
pub mod types;

pub use format::{format_amount, format_date, format_naive_date, DateFormatError};
pub use types::{
    Bill, BillStatus, ExpenseType, Role, UploadedFile, User, DATE_FORMAT, DEFAULT_PCT,
};
