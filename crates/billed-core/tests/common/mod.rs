//! Test doubles shared by the container tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use billed_core::containers::{EyeIcon, JustificatoryModal, ModalCommand};
use billed_core::{
    BillStore, Bills, CreatePayload, MockStore, Navigator, NewBill, Route, StoreError,
};
use billed_types::{Bill, UploadedFile, User};

/// Navigator that remembers every route it was asked for
#[derive(Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

pub struct FakeIcon(pub Option<&'static str>);

impl EyeIcon for FakeIcon {
    fn bill_url(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

pub struct FakeModal {
    pub width: f64,
    pub body: RefCell<String>,
    pub commands: RefCell<Vec<&'static str>>,
    pub show_calls: Cell<usize>,
}

impl FakeModal {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            body: RefCell::new(String::new()),
            commands: RefCell::new(Vec::new()),
            show_calls: Cell::new(0),
        }
    }
}

impl JustificatoryModal for FakeModal {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_body(&self, markup: &str) {
        *self.body.borrow_mut() = markup.to_string();
    }

    fn modal(&self, command: ModalCommand) {
        if command == ModalCommand::Show {
            self.show_calls.set(self.show_calls.get() + 1);
        }
        self.commands.borrow_mut().push(command.as_str());
    }
}

/// `datetime` values of the rendered rows, in document order
pub fn rendered_dates(markup: &str) -> Vec<String> {
    let re = regex::Regex::new(r#"datetime="([^"]*)""#).unwrap();
    re.captures_iter(markup).map(|c| c[1].to_string()).collect()
}

pub fn employee() -> User {
    User::employee("e@e")
}

pub fn bills_app(store: MockStore) -> (Rc<MockStore>, Rc<RecordingNavigator>, Bills) {
    let store = Rc::new(store);
    let navigator = Rc::new(RecordingNavigator::default());
    let app = Bills::new(store.clone(), navigator.clone());
    (store, navigator, app)
}

pub fn new_bill_app(user: Option<User>) -> (Rc<MockStore>, Rc<RecordingNavigator>, NewBill) {
    let store = Rc::new(MockStore::new());
    let navigator = Rc::new(RecordingNavigator::default());
    let app = NewBill::new(store.clone(), navigator.clone(), user);
    (store, navigator, app)
}

/// Resolves once the shared flag is set; polled by hand in tests
struct Released<'a>(&'a Cell<bool>);

impl Future for Released<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        if self.0.get() {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

/// Mock store whose next `create` stays pending until [`GatedStore::release`]
#[derive(Default)]
pub struct GatedStore {
    pub inner: MockStore,
    hold_next: Cell<bool>,
    released: Cell<bool>,
}

impl GatedStore {
    pub fn hold_next_create(&self) {
        self.hold_next.set(true);
        self.released.set(false);
    }

    pub fn release(&self) {
        self.released.set(true);
    }
}

#[async_trait(?Send)]
impl BillStore for GatedStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.inner.list().await
    }

    async fn create(&self, payload: CreatePayload) -> Result<UploadedFile, StoreError> {
        if self.hold_next.replace(false) {
            Released(&self.released).await;
        }
        self.inner.create(payload).await
    }

    async fn update(&self, key: &str, bill: &Bill) -> Result<Bill, StoreError> {
        self.inner.update(key, bill).await
    }
}

pub fn gated_new_bill_app() -> (Rc<GatedStore>, NewBill) {
    let store = Rc::new(GatedStore::default());
    let navigator = Rc::new(RecordingNavigator::default());
    let app = NewBill::new(store.clone(), navigator, Some(employee()));
    (store, app)
}
