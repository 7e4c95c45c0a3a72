//! Mounts pages into `#root` and wires their events

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use billed_core::views::render_login_page;
use billed_core::{
    render_bills_list, render_new_bill_form, resolve, Attachment, BillStore, Bills, BillsPage,
    FileCheck, Navigator, NewBill, Route, SubmitOutcome,
};
use billed_types::User;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, Event, EventTarget, File, HtmlElement};

use crate::config::AppConfig;
use crate::session::SessionStore;
use crate::view_model::{maybe_by_test_id, BillsView, EyeIconElement, NewBillFormView};

type Listener = Closure<dyn FnMut(Event)>;

pub struct Router {
    config: AppConfig,
    store: Rc<dyn BillStore>,
    session: SessionStore,
    user: RefCell<Option<User>>,
    root: Element,
    this: Weak<Router>,
    /// Bumped on every mount; async work started by an older page is dropped
    generation: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
    // handlers of the previous page may still be on the stack
    retired: RefCell<Vec<Listener>>,
}

/// [`Navigator`] handed to the containers
struct RouterHandle(Weak<Router>);

impl Navigator for RouterHandle {
    fn navigate(&self, route: Route) {
        if let Some(router) = self.0.upgrade() {
            router.navigate(route);
        }
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::error!(error = ?err, "page wiring failed");
    }
}

async fn read_attachment(file: File) -> Result<Attachment, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let attachment = Attachment::new(file.name(), bytes);
    let content_type = file.type_();
    Ok(if content_type.is_empty() {
        attachment
    } else {
        attachment.with_content_type(content_type)
    })
}

impl Router {
    pub fn new(
        config: AppConfig,
        store: Rc<dyn BillStore>,
        session: SessionStore,
    ) -> Result<Rc<Self>, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let root = document
            .get_element_by_id("root")
            .ok_or("Missing element: root")?;
        let user = session.user();

        Ok(Rc::new_cyclic(|this| Router {
            config,
            store,
            session,
            user: RefCell::new(user),
            root,
            this: this.clone(),
            generation: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            retired: RefCell::new(Vec::new()),
        }))
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn navigator(&self) -> Rc<dyn Navigator> {
        Rc::new(RouterHandle(self.this.clone()))
    }

    /// Show the page for `path` without touching history
    pub fn on_navigate(&self, path: &str) -> Route {
        let route = resolve(path, self.user.borrow().as_ref());
        self.mount(route);
        route
    }

    /// Go to `route` and record it in history
    pub fn navigate(&self, route: Route) {
        let route = resolve(route.path(), self.user.borrow().as_ref());
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                tracing::warn!(error = ?err, "history update failed");
            }
        }
        self.mount(route);
    }

    /// Re-render on back and forward
    pub fn listen_history(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let this = self.this.clone();
        let on_pop = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Some(router) = this.upgrade() {
                let hash = web_sys::window()
                    .and_then(|w| w.location().hash().ok())
                    .unwrap_or_default();
                router.on_navigate(&hash);
            }
        });
        window.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())?;
        // lives as long as the page
        on_pop.forget();
        Ok(())
    }

    fn listen(
        &self,
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Listener::wrap(Box::new(handler));
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.listeners.borrow_mut().push(closure);
        Ok(())
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn mount(&self, route: Route) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let previous = self.listeners.replace(Vec::new());
        *self.retired.borrow_mut() = previous;

        tracing::debug!(path = route.path(), "mounting page");
        match route {
            Route::Login => self.root.set_inner_html(&render_login_page()),
            Route::Bills => self.mount_bills(generation),
            Route::NewBill => report(self.mount_new_bill()),
        }
    }

    fn wire_layout(&self) -> Result<(), JsValue> {
        if let Some(icon) = maybe_by_test_id::<HtmlElement>(&self.root, "icon-window") {
            let this = self.this.clone();
            self.listen(&icon, "click", move |_| {
                if let Some(router) = this.upgrade() {
                    router.navigate(Route::Bills);
                }
            })?;
        }
        if let Some(icon) = maybe_by_test_id::<HtmlElement>(&self.root, "icon-mail") {
            let this = self.this.clone();
            self.listen(&icon, "click", move |_| {
                if let Some(router) = this.upgrade() {
                    router.navigate(Route::NewBill);
                }
            })?;
        }
        if let Some(icon) = maybe_by_test_id::<HtmlElement>(&self.root, "layout-disconnect") {
            let this = self.this.clone();
            self.listen(&icon, "click", move |_| {
                if let Some(router) = this.upgrade() {
                    router.sign_out();
                }
            })?;
        }
        Ok(())
    }

    fn sign_out(&self) {
        if let Err(err) = self.session.clear() {
            tracing::warn!(error = ?err, "could not clear stored session");
        }
        self.user.replace(None);
        tracing::info!("signed out");
        self.navigate(Route::Login);
    }

    fn mount_bills(&self, generation: u64) {
        let user = self.user();
        self.root
            .set_inner_html(&render_bills_list(&BillsPage::Loading, user.as_ref()));
        report(self.wire_layout());

        let bills = Rc::new(Bills::new(self.store.clone(), self.navigator()));
        let this = self.this.clone();
        spawn_local(async move {
            let page = bills.load_page().await;
            let Some(router) = this.upgrade() else {
                return;
            };
            if !router.is_current(generation) {
                tracing::debug!("bills page left before the list arrived");
                return;
            }
            router
                .root
                .set_inner_html(&render_bills_list(&page, user.as_ref()));
            report(router.wire_layout());
            if matches!(page, BillsPage::Loaded(_)) {
                report(router.wire_bills(bills));
            }
        });
    }

    fn wire_bills(&self, bills: Rc<Bills>) -> Result<(), JsValue> {
        let view = BillsView::bind(&self.root)?;

        let container = bills.clone();
        self.listen(&view.new_bill_button, "click", move |_| {
            container.handle_click_new_bill();
        })?;

        for icon in view.eye_icons {
            let container = bills.clone();
            let modal = view.modal.clone();
            let eye = EyeIconElement(icon.clone());
            self.listen(&icon, "click", move |_| {
                container.handle_click_icon_eye(&eye, &modal);
            })?;
        }

        if let Some(close) = view.modal.close_button() {
            let modal = view.modal.clone();
            self.listen(&close, "click", move |_| modal.hide())?;
        }
        Ok(())
    }

    fn mount_new_bill(&self) -> Result<(), JsValue> {
        let user = self.user();
        self.root.set_inner_html(&render_new_bill_form(user.as_ref()));
        self.wire_layout()?;

        let container = Rc::new(
            NewBill::new(self.store.clone(), self.navigator(), user)
                .with_default_pct(self.config.default_pct),
        );
        let view = Rc::new(NewBillFormView::bind(&self.root)?);

        {
            let file_input = view.file.clone();
            let container = container.clone();
            let view = view.clone();
            self.listen(&file_input, "change", move |_| {
                let Some(file) = view.selected_file() else {
                    return;
                };
                // name check and supersession happen before any byte is read
                let pending = match container.begin_file_change(&file.name()) {
                    Ok(pending) => pending,
                    Err(err) => {
                        view.show_file_error(&err.to_string());
                        view.clear_file();
                        return;
                    }
                };
                let container = container.clone();
                let view = view.clone();
                spawn_local(async move {
                    let attachment = match read_attachment(file).await {
                        Ok(attachment) => attachment,
                        Err(err) => {
                            tracing::error!(error = ?err, "could not read selected file");
                            if container.is_current(&pending) {
                                view.clear_file();
                            }
                            return;
                        }
                    };
                    match container.complete_file_change(pending, attachment).await {
                        FileCheck::Attached(_) => view.clear_file_error(),
                        FileCheck::UploadFailed(err) => {
                            view.show_file_error(&err.to_string());
                            view.clear_file();
                        }
                        // rejections were shown before the read started
                        FileCheck::Rejected(_) | FileCheck::Superseded => {}
                    }
                });
            })?;
        }

        let form = view.form.clone();
        self.listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let values = view.values();
            let container = container.clone();
            spawn_local(async move {
                if let SubmitOutcome::Failed(err) = container.handle_submit(values).await {
                    tracing::warn!(error = %err, "bill kept on the form after a failed submit");
                }
            });
        })?;
        Ok(())
    }
}
