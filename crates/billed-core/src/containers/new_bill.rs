use std::cell::{Cell, RefCell};
use std::rc::Rc;

use billed_types::{Bill, BillStatus, UploadedFile, User, DEFAULT_PCT};

use crate::attachment::{file_name_from_path, validate_file_name};
use crate::error::{AttachmentError, StoreError};
use crate::routes::{Navigator, Route};
use crate::store::{Attachment, BillStore, CreatePayload};

/// Raw values of the new bill form, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// Result of selecting a file
#[derive(Debug, Clone, PartialEq)]
pub enum FileCheck {
    /// Accepted and uploaded; kept for the next submit
    Attached(UploadedFile),
    /// Wrong extension; nothing is attached and nothing was sent
    Rejected(AttachmentError),
    /// Accepted but the upload failed; nothing is attached
    UploadFailed(StoreError),
    /// Another file was selected while this one was uploading
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Bill written over the uploaded justificatory record
    Updated,
    /// Bill created without a prior upload
    Created,
    Failed(StoreError),
}

/// A selection whose name passed the check, waiting for its bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    selection: u64,
    file_name: String,
}

impl PendingFile {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[derive(Debug, Clone)]
struct StoredAttachment {
    key: String,
    file_url: String,
    file_name: String,
}

/// Container of the new bill page
pub struct NewBill {
    store: Rc<dyn BillStore>,
    navigator: Rc<dyn Navigator>,
    user: Option<User>,
    default_pct: u32,
    attachment: RefCell<Option<StoredAttachment>>,
    // bumped on every file selection so a slow upload can't overwrite a newer one
    selection: Cell<u64>,
}

/// Leading integer of `raw`, the way a form number input is read
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

impl NewBill {
    pub fn new(store: Rc<dyn BillStore>, navigator: Rc<dyn Navigator>, user: Option<User>) -> Self {
        Self {
            store,
            navigator,
            user,
            default_pct: DEFAULT_PCT,
            attachment: RefCell::new(None),
            selection: Cell::new(0),
        }
    }

    /// VAT percentage used when the pct field is empty, zero or not a number
    pub fn with_default_pct(mut self, pct: u32) -> Self {
        self.default_pct = pct;
        self
    }

    fn email(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    }

    /// Name of the currently attached justificatory
    pub fn attached_file_name(&self) -> Option<String> {
        self.attachment.borrow().as_ref().map(|a| a.file_name.clone())
    }

    /// Register a new file selection and check its name
    ///
    /// Runs before any byte is read. Earlier selections are superseded and
    /// any previous attachment is dropped, whatever the outcome.
    pub fn begin_file_change(&self, path: &str) -> Result<PendingFile, AttachmentError> {
        let selection = self.selection.get() + 1;
        self.selection.set(selection);
        self.attachment.borrow_mut().take();

        let file_name = file_name_from_path(path).to_string();
        match validate_file_name(&file_name) {
            Ok(_) => Ok(PendingFile {
                selection,
                file_name,
            }),
            Err(err) => {
                tracing::warn!(file_name = %file_name, error = %err, "justificatory rejected");
                Err(err)
            }
        }
    }

    /// Whether `pending` is still the latest selection
    pub fn is_current(&self, pending: &PendingFile) -> bool {
        self.selection.get() == pending.selection
    }

    /// Upload the content of an accepted selection
    pub async fn complete_file_change(&self, pending: PendingFile, file: Attachment) -> FileCheck {
        let PendingFile {
            selection,
            file_name,
        } = pending;
        if self.selection.get() != selection {
            tracing::debug!(file_name = %file_name, "selection replaced before upload");
            return FileCheck::Superseded;
        }

        let payload = CreatePayload::Justificatory {
            file: Attachment {
                file_name: file_name.clone(),
                ..file
            },
            email: self.email(),
        };
        let result = self.store.create(payload).await;

        if self.selection.get() != selection {
            tracing::debug!(file_name = %file_name, "upload superseded by a newer selection");
            return FileCheck::Superseded;
        }

        match result {
            Ok(uploaded) => {
                *self.attachment.borrow_mut() = Some(StoredAttachment {
                    key: uploaded.key.clone(),
                    file_url: uploaded.file_url.clone(),
                    file_name,
                });
                FileCheck::Attached(uploaded)
            }
            Err(err) => {
                tracing::error!(file_name = %file_name, error = %err, "justificatory upload failed");
                FileCheck::UploadFailed(err)
            }
        }
    }

    /// Validate and upload a newly selected file in one go
    pub async fn handle_change_file(&self, file: Attachment) -> FileCheck {
        match self.begin_file_change(&file.file_name) {
            Ok(pending) => self.complete_file_change(pending, file).await,
            Err(err) => FileCheck::Rejected(err),
        }
    }

    /// Build the bill sent on submit
    pub fn assemble_bill(&self, form: &NewBillForm) -> Bill {
        let attachment = self.attachment.borrow();
        let pct = parse_leading_int(&form.pct)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n != 0)
            .unwrap_or(self.default_pct);

        Bill {
            id: attachment
                .as_ref()
                .map(|a| a.key.clone())
                .unwrap_or_default(),
            email: self.email(),
            expense_type: form.expense_type.clone(),
            name: form.name.trim().to_string(),
            amount: parse_leading_int(&form.amount).unwrap_or(0),
            date: form.date.trim().to_string(),
            vat: form.vat.trim().to_string(),
            pct,
            commentary: form.commentary.clone(),
            file_url: attachment.as_ref().map(|a| a.file_url.clone()),
            file_name: attachment.as_ref().map(|a| a.file_name.clone()),
            status: BillStatus::Pending,
            comment_admin: None,
        }
    }

    /// Send the form; one store call per submit
    ///
    /// Navigates back to the bill list on success. A failure is logged and
    /// returned, the page stays where it is.
    pub async fn handle_submit(&self, form: NewBillForm) -> SubmitOutcome {
        let bill = self.assemble_bill(&form);
        let key = self.attachment.borrow().as_ref().map(|a| a.key.clone());

        let result = match key {
            Some(key) => self
                .store
                .update(&key, &bill)
                .await
                .map(|_| SubmitOutcome::Updated),
            None => self
                .store
                .create(CreatePayload::Bill(bill))
                .await
                .map(|_| SubmitOutcome::Created),
        };

        match result {
            Ok(outcome) => {
                self.navigator.navigate(Route::Bills);
                outcome
            }
            Err(err) => {
                tracing::error!(error = %err, "bill submission failed");
                SubmitOutcome::Failed(err)
            }
        }
    }
}
