//! New bill container: file checks, upload and submission

mod common;

use billed_core::mock::StoreCall;
use billed_core::{
    Attachment, AttachmentError, CreatePayload, FileCheck, NewBillForm, Route, StoreError,
    SubmitOutcome,
};
use billed_types::BillStatus;
use common::{employee, gated_new_bill_app, new_bill_app};
use pretty_assertions::assert_eq;
use tokio_test::{assert_pending, assert_ready, block_on, task};

fn image(name: &str) -> Attachment {
    Attachment::new(name, b"file".to_vec()).with_content_type("image/jpeg")
}

fn filled_form() -> NewBillForm {
    NewBillForm {
        expense_type: "Transports".to_string(),
        name: "Vol Paris Londres".to_string(),
        date: "2022-05-14".to_string(),
        amount: "348".to_string(),
        vat: "70".to_string(),
        pct: "20".to_string(),
        commentary: "séminaire".to_string(),
    }
}

#[test]
fn image_files_are_uploaded_and_attached() {
    for name in ["file.jpg", "file.jpeg", "file.png", "SCAN.PNG"] {
        let (store, _, app) = new_bill_app(Some(employee()));
        let check = block_on(app.handle_change_file(image(name)));

        assert!(matches!(check, FileCheck::Attached(_)), "{} not attached", name);
        assert_eq!(app.attached_file_name().as_deref(), Some(name));
        assert_eq!(store.create_calls(), 1);
    }
}

#[test]
fn upload_carries_file_and_session_email() {
    let (store, _, app) = new_bill_app(Some(employee()));
    block_on(app.handle_change_file(image("C:\\fakepath\\ticket.jpg")));

    match &store.calls()[0] {
        StoreCall::Create(CreatePayload::Justificatory { file, email }) => {
            assert_eq!(file.file_name, "ticket.jpg");
            assert_eq!(file.bytes, b"file".to_vec());
            assert_eq!(email, "e@e");
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn pdf_is_rejected_before_any_upload() {
    let (store, _, app) = new_bill_app(Some(employee()));
    let check = block_on(app.handle_change_file(image("file.pdf")));

    assert_eq!(
        check,
        FileCheck::Rejected(AttachmentError::UnsupportedExtension("pdf".to_string()))
    );
    assert_eq!(app.attached_file_name(), None);
    assert!(store.calls().is_empty());
}

#[test]
fn second_valid_file_replaces_the_first() {
    let (_, _, app) = new_bill_app(Some(employee()));
    block_on(app.handle_change_file(image("first.jpg")));
    block_on(app.handle_change_file(image("second.png")));

    assert_eq!(app.attached_file_name().as_deref(), Some("second.png"));
    let bill = app.assemble_bill(&filled_form());
    assert_eq!(bill.file_name.as_deref(), Some("second.png"));
    assert_eq!(
        bill.file_url.as_deref(),
        Some("https://localhost:3456/images/second.png")
    );
}

#[test]
fn invalid_file_discards_previous_attachment() {
    let (_, _, app) = new_bill_app(Some(employee()));
    block_on(app.handle_change_file(image("first.jpg")));
    block_on(app.handle_change_file(image("notes.txt")));

    assert_eq!(app.attached_file_name(), None);
    assert_eq!(app.assemble_bill(&filled_form()).file_name, None);
}

#[test]
fn slow_upload_of_older_selection_is_superseded() {
    let (store, app) = gated_new_bill_app();
    store.hold_next_create();

    let mut first = task::spawn(app.handle_change_file(image("large-scan.jpg")));
    assert_pending!(first.poll());

    let second = block_on(app.handle_change_file(image("ticket.png")));
    assert!(matches!(second, FileCheck::Attached(_)));

    store.release();
    assert_eq!(assert_ready!(first.poll()), FileCheck::Superseded);
    assert_eq!(app.attached_file_name().as_deref(), Some("ticket.png"));
    assert_eq!(store.inner.create_calls(), 2);
}

#[test]
fn selection_replaced_while_reading_is_never_uploaded() {
    let (store, _, app) = new_bill_app(Some(employee()));
    let older = app.begin_file_change("large-scan.jpg").unwrap();
    let newer = app.begin_file_change("ticket.png").unwrap();
    assert!(!app.is_current(&older));
    assert!(app.is_current(&newer));

    // the older file finishes reading last
    let check = block_on(app.complete_file_change(newer, image("ticket.png")));
    assert!(matches!(check, FileCheck::Attached(_)));
    let check = block_on(app.complete_file_change(older, image("large-scan.jpg")));
    assert_eq!(check, FileCheck::Superseded);

    assert_eq!(store.create_calls(), 1);
    assert_eq!(app.attached_file_name().as_deref(), Some("ticket.png"));
}

#[test]
fn name_check_runs_before_reading() {
    let (store, _, app) = new_bill_app(Some(employee()));
    block_on(app.handle_change_file(image("first.jpg")));

    let err = app.begin_file_change("C:\\fakepath\\report.pdf").unwrap_err();
    assert_eq!(err, AttachmentError::UnsupportedExtension("pdf".to_string()));
    assert_eq!(app.attached_file_name(), None);
    assert_eq!(store.create_calls(), 1);

    let pending = app.begin_file_change("C:\\fakepath\\ticket.JPG").unwrap();
    assert_eq!(pending.file_name(), "ticket.JPG");
}

#[test]
fn failed_upload_leaves_nothing_attached() {
    let (store, _, app) = new_bill_app(Some(employee()));
    store.fail_create(StoreError::http(500));

    let check = block_on(app.handle_change_file(image("ticket.png")));
    assert_eq!(check, FileCheck::UploadFailed(StoreError::http(500)));
    assert_eq!(app.attached_file_name(), None);
}

#[test]
fn submit_updates_uploaded_record_then_navigates() {
    let (store, navigator, app) = new_bill_app(Some(employee()));
    let key = match block_on(app.handle_change_file(image("ticket.jpg"))) {
        FileCheck::Attached(uploaded) => uploaded.key,
        other => panic!("unexpected {:?}", other),
    };

    let outcome = block_on(app.handle_submit(filled_form()));
    assert_eq!(outcome, SubmitOutcome::Updated);
    assert_eq!(store.update_calls(), 1);
    assert_eq!(navigator.routes(), vec![Route::Bills]);

    match store.calls().last() {
        Some(StoreCall::Update { key: sent_key, bill }) => {
            assert_eq!(sent_key, &key);
            assert_eq!(bill.email, "e@e");
            assert_eq!(bill.status, BillStatus::Pending);
            assert_eq!(bill.expense_type, "Transports");
            assert_eq!(bill.amount, 348);
            assert_eq!(bill.pct, 20);
            assert_eq!(bill.vat, "70");
            assert_eq!(bill.file_name.as_deref(), Some("ticket.jpg"));
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn submit_without_upload_creates_the_bill() {
    let (store, navigator, app) = new_bill_app(Some(employee()));
    let outcome = block_on(app.handle_submit(filled_form()));

    assert_eq!(outcome, SubmitOutcome::Created);
    assert_eq!(store.create_calls(), 1);
    assert_eq!(store.update_calls(), 0);
    assert_eq!(navigator.routes(), vec![Route::Bills]);
    assert_eq!(store.bills()[0].status, BillStatus::Pending);
}

#[test]
fn optional_fields_may_be_empty() {
    let (_, _, app) = new_bill_app(Some(employee()));
    let form = NewBillForm {
        name: String::new(),
        vat: String::new(),
        commentary: String::new(),
        pct: String::new(),
        ..filled_form()
    };
    let bill = app.assemble_bill(&form);
    assert_eq!(bill.name, "");
    assert_eq!(bill.vat, "");
    assert_eq!(bill.pct, 20);
}

#[test]
fn custom_default_pct_applies() {
    let (_, _, app) = new_bill_app(Some(employee()));
    let app = app.with_default_pct(10);
    let form = NewBillForm {
        pct: "abc".to_string(),
        ..filled_form()
    };
    assert_eq!(app.assemble_bill(&form).pct, 10);
}

#[test]
fn submit_failure_keeps_user_on_form() {
    let (store, navigator, app) = new_bill_app(Some(employee()));
    block_on(app.handle_change_file(image("ticket.jpg")));
    store.fail_update(StoreError::http(500));

    let outcome = block_on(app.handle_submit(filled_form()));
    assert_eq!(outcome, SubmitOutcome::Failed(StoreError::http(500)));
    assert!(navigator.routes().is_empty());
    assert_eq!(app.attached_file_name().as_deref(), Some("ticket.jpg"));
}

#[test]
fn session_without_email_stamps_empty_email() {
    let user = billed_types::User::from_json(r#"{"type":"Employee"}"#).unwrap();
    let (_, _, app) = new_bill_app(Some(user));
    assert_eq!(app.assemble_bill(&filled_form()).email, "");
}
