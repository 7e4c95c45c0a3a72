//! `fetch` client for the bills API

use async_trait::async_trait;
use billed_core::{BillStore, CreatePayload, StoreError};
use billed_types::{Bill, UploadedFile};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

/// Record returned by `POST /bills`; a plain bill create may omit the file url
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedRecord {
    #[serde(default)]
    file_url: String,
    #[serde(alias = "id")]
    key: String,
}

impl From<CreatedRecord> for UploadedFile {
    fn from(record: CreatedRecord) -> Self {
        UploadedFile {
            file_url: record.file_url,
            key: record.key,
        }
    }
}

fn js_error(err: JsValue) -> StoreError {
    let message = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err));
    StoreError::other(message)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, StoreError> {
    serde_json::from_str(body).map_err(|e| StoreError::other(format!("Invalid response: {}", e)))
}

enum Body {
    Empty,
    Json(String),
    Form(FormData),
}

/// Bills API reached over HTTP with a bearer token
pub struct HttpStore {
    base_url: String,
    token: Option<String>,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send a request and return the response text of a 2xx reply
    async fn send(&self, method: &str, path: &str, body: Body) -> Result<String, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::other("No window"))?;

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        match &body {
            Body::Empty => {}
            Body::Json(json) => opts.set_body(&JsValue::from_str(json)),
            Body::Form(form) => opts.set_body(form),
        }

        let url = self.url(path);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        let headers = request.headers();
        if matches!(body, Body::Json(_)) {
            headers
                .set("Content-Type", "application/json")
                .map_err(js_error)?;
        }
        if let Some(token) = &self.token {
            headers
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(js_error)?;
        }

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response.dyn_into().map_err(js_error)?;

        if !response.ok() {
            tracing::warn!(method, url = %url, status = response.status(), "store request failed");
            return Err(StoreError::http(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        Ok(text.as_string().unwrap_or_default())
    }
}

fn justificatory_form(file: &billed_core::Attachment, email: &str) -> Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let bag = BlobPropertyBag::new();
    if let Some(content_type) = &file.content_type {
        bag.set_type(content_type);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", &blob, &file.file_name)?;
    form.append_with_str("email", email)?;
    Ok(form)
}

#[async_trait(?Send)]
impl BillStore for HttpStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let body = self.send("GET", "bills", Body::Empty).await?;
        decode(&body)
    }

    async fn create(&self, payload: CreatePayload) -> Result<UploadedFile, StoreError> {
        let body = match &payload {
            CreatePayload::Justificatory { file, email } => {
                Body::Form(justificatory_form(file, email).map_err(js_error)?)
            }
            CreatePayload::Bill(bill) => Body::Json(
                serde_json::to_string(bill).map_err(|e| StoreError::other(e.to_string()))?,
            ),
        };
        let reply = self.send("POST", "bills", body).await?;
        decode::<CreatedRecord>(&reply).map(UploadedFile::from)
    }

    async fn update(&self, key: &str, bill: &Bill) -> Result<Bill, StoreError> {
        let json = serde_json::to_string(bill).map_err(|e| StoreError::other(e.to_string()))?;
        let reply = self
            .send("PATCH", &format!("bills/{}", key), Body::Json(json))
            .await?;
        if reply.trim().is_empty() {
            return Ok(bill.clone());
        }
        decode(&reply)
    }
}
