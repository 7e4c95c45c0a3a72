//! Store client seam
//!
//! The remote persistence API is consumed through [`BillStore`]. The browser
//! build talks to it over `fetch`; tests and the demo mode use
//! [`crate::mock::MockStore`].

use async_trait::async_trait;
use billed_types::{Bill, UploadedFile};

use crate::error::StoreError;

/// A justificatory selected in the file input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Body of a `create` call
#[derive(Debug, Clone, PartialEq)]
pub enum CreatePayload {
    /// Upload of the justificatory, sent as multipart with the owner email
    Justificatory { file: Attachment, email: String },
    /// A complete bill submitted without a prior upload
    Bill(Bill),
}

/// Remote bill persistence
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait BillStore {
    /// All bills visible to the current user
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Create a record; returns the storage key and file url
    async fn create(&self, payload: CreatePayload) -> Result<UploadedFile, StoreError>;

    /// Overwrite the record stored under `key`
    async fn update(&self, key: &str, bill: &Bill) -> Result<Bill, StoreError>;
}
