//! In-memory store
//!
//! Records every call so handlers can be checked for what they sent, and can
//! be told to fail any operation with a given error.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use billed_types::{Bill, UploadedFile};

use crate::error::StoreError;
use crate::fixtures;
use crate::store::{BillStore, CreatePayload};

/// Base url of files "uploaded" to the mock store
const MOCK_FILE_HOST: &str = "https://localhost:3456/images";

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    Create(CreatePayload),
    Update { key: String, bill: Bill },
}

#[derive(Debug, Default)]
pub struct MockStore {
    bills: RefCell<Vec<Bill>>,
    calls: RefCell<Vec<StoreCall>>,
    list_failure: RefCell<Option<StoreError>>,
    create_failure: RefCell<Option<StoreError>>,
    update_failure: RefCell<Option<StoreError>>,
    next_key: Cell<u32>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with [`fixtures::bills`]
    pub fn with_fixtures() -> Self {
        Self::with_bills(fixtures::bills())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        let store = Self::new();
        *store.bills.borrow_mut() = bills;
        store
    }

    /// Make every following `list` fail with `error`
    pub fn fail_list(&self, error: StoreError) {
        *self.list_failure.borrow_mut() = Some(error);
    }

    pub fn fail_create(&self, error: StoreError) {
        *self.create_failure.borrow_mut() = Some(error);
    }

    pub fn fail_update(&self, error: StoreError) {
        *self.update_failure.borrow_mut() = Some(error);
    }

    /// Clear all injected failures
    pub fn recover(&self) {
        self.list_failure.borrow_mut().take();
        self.create_failure.borrow_mut().take();
        self.update_failure.borrow_mut().take();
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.bills.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.count(|c| matches!(c, StoreCall::List))
    }

    pub fn create_calls(&self) -> usize {
        self.count(|c| matches!(c, StoreCall::Create(_)))
    }

    pub fn update_calls(&self) -> usize {
        self.count(|c| matches!(c, StoreCall::Update { .. }))
    }

    fn count(&self, pred: impl Fn(&StoreCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn allocate_key(&self) -> String {
        let n = self.next_key.get() + 1;
        self.next_key.set(n);
        format!("mock-{:04}", n)
    }
}

#[async_trait(?Send)]
impl BillStore for MockStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.calls.borrow_mut().push(StoreCall::List);
        if let Some(err) = self.list_failure.borrow().clone() {
            return Err(err);
        }
        Ok(self.bills.borrow().clone())
    }

    async fn create(&self, payload: CreatePayload) -> Result<UploadedFile, StoreError> {
        self.calls
            .borrow_mut()
            .push(StoreCall::Create(payload.clone()));
        if let Some(err) = self.create_failure.borrow().clone() {
            return Err(err);
        }

        let key = self.allocate_key();
        match payload {
            CreatePayload::Justificatory { file, .. } => Ok(UploadedFile {
                file_url: format!("{}/{}", MOCK_FILE_HOST, file.file_name),
                key,
            }),
            CreatePayload::Bill(mut bill) => {
                bill.id = key.clone();
                let file_url = bill.file_url.clone().unwrap_or_default();
                self.bills.borrow_mut().push(bill);
                Ok(UploadedFile { file_url, key })
            }
        }
    }

    async fn update(&self, key: &str, bill: &Bill) -> Result<Bill, StoreError> {
        self.calls.borrow_mut().push(StoreCall::Update {
            key: key.to_string(),
            bill: bill.clone(),
        });
        if let Some(err) = self.update_failure.borrow().clone() {
            return Err(err);
        }

        let mut stored = bill.clone();
        stored.id = key.to_string();
        let mut bills = self.bills.borrow_mut();
        match bills.iter_mut().find(|b| b.id == key) {
            Some(existing) => *existing = stored.clone(),
            None => bills.push(stored.clone()),
        }
        Ok(stored)
    }
}
