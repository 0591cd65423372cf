//! New-bill page scenarios, as seen by a connected employee
//!
//! Covers the submission flow end to end: picking a proof file, the
//! accept/reject gate, handing the payload to the mocked store and
//! surfacing API failures verbatim.

mod common;

use billed::prelude::*;

fn employee_session() -> SessionContext {
    SessionContext::employee("a@a")
}

fn filled_form() -> NewBillForm {
    NewBillForm {
        bill_type: "Transports".to_string(),
        name: "Vol Paris Londres".to_string(),
        date: "2023-09-01".to_string(),
        amount: Some(348.0),
        vat: Some("70".to_string()),
        pct: Some(20),
        commentary: "vol aller retour".to_string(),
    }
}

#[tokio::test]
async fn supported_proof_file_is_kept_in_the_form() {
    common::init_tracing();
    let mut controller =
        NewBillController::with_defaults(Arc::new(MockBillService::new()), employee_session());

    controller
        .handle_file_change(Some(ProofFile::new("hello.png", Some("image/png"))))
        .unwrap();

    assert_eq!(
        controller.state().file().map(|f| f.name.as_str()),
        Some("hello.png")
    );
    assert!(controller.alert().is_none());
    assert!(controller.can_submit());
}

#[tokio::test]
async fn unsupported_proof_file_pops_an_alert_and_clears_the_input() {
    common::init_tracing();
    let mut controller =
        NewBillController::with_defaults(Arc::new(MockBillService::new()), employee_session());

    controller
        .handle_file_change(Some(ProofFile::new("hello.mp4", Some("video/mp4"))))
        .unwrap();

    assert!(controller.alert().is_some());
    assert!(controller.input_cleared());
    assert_eq!(controller.state().file(), None);
    assert!(!controller.can_submit());
}

#[tokio::test]
async fn submitting_a_bill_with_a_supported_file_reaches_the_store() {
    common::init_tracing();
    let store = Arc::new(MockBillService::new());
    let mut controller = NewBillController::with_defaults(store.clone(), employee_session());

    controller
        .handle_file_change(Some(ProofFile::new("hello.jpeg", Some("image/jpeg"))))
        .unwrap();
    assert!(controller.alert().is_none());

    let bill = controller.handle_submit(filled_form()).await.unwrap();

    assert_eq!(store.create_count(), 1);
    assert_eq!(bill.file_name.as_deref(), Some("hello.jpeg"));
    assert_eq!(bill.email, "a@a");
    assert_eq!(bill.status, BillStatus::Pending);
    assert_eq!(controller.state().label(), "submitted");
}

#[tokio::test]
async fn submitting_with_a_rejected_file_never_invokes_the_store() {
    common::init_tracing();
    let store = Arc::new(MockBillService::new());
    let mut controller = NewBillController::with_defaults(store.clone(), employee_session());

    controller
        .handle_file_change(Some(ProofFile::new("hello.mp4", Some("video/mp4"))))
        .unwrap();
    let result = controller.handle_submit(filled_form()).await;

    assert!(result.is_err());
    assert_eq!(store.create_count(), 0);
    assert_eq!(store.update_count(), 0);
}

#[tokio::test]
async fn the_mocked_update_resolves_the_canonical_bill() {
    common::init_tracing();
    let store = MockBillService::new();

    let bill = store
        .update(UpdateBillPayload {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            status: None,
            comment_admin: None,
            amount: None,
            date: None,
        })
        .await
        .unwrap();

    assert_eq!(bill.id, "47qAXb6fIm2zOKkLzMro");
    assert_eq!(bill.vat.as_deref(), Some("80"));
    assert_eq!(bill.status, BillStatus::Pending);
    assert_eq!(bill.bill_type, "Hôtel et logement");
    assert_eq!(bill.commentary, "séminaire billed");
    assert_eq!(bill.name, "encore");
    assert_eq!(
        bill.file_name.as_deref(),
        Some("preview-facture-free-201801-pdf-1.jpg")
    );
    assert_eq!(bill.date, "2004-04-04");
    assert_eq!(bill.amount, Some(400.0));
    assert_eq!(bill.comment_admin.as_deref(), Some("ok"));
    assert_eq!(bill.email, "a@a");
    assert_eq!(bill.pct, Some(20));
}

#[tokio::test]
async fn api_failure_with_404_is_displayed_verbatim() {
    common::init_tracing();
    let mut controller = NewBillController::with_defaults(
        Arc::new(FailingBillService::new("Erreur 404")),
        employee_session(),
    );

    controller
        .handle_file_change(Some(ProofFile::new("hello.png", None)))
        .unwrap();
    let err = controller.handle_submit(filled_form()).await.unwrap_err();

    assert!(err.to_string().contains("Erreur 404"));
    assert!(controller.error().unwrap().contains("Erreur 404"));
}

#[tokio::test]
async fn api_failure_with_500_is_displayed_verbatim() {
    common::init_tracing();
    let mut controller = NewBillController::with_defaults(
        Arc::new(FailingBillService::new("Erreur 500")),
        employee_session(),
    );

    controller
        .handle_file_change(Some(ProofFile::new("hello.png", None)))
        .unwrap();
    let err = controller.handle_submit(filled_form()).await.unwrap_err();

    assert!(err.to_string().contains("Erreur 500"));
    assert!(controller.error().unwrap().contains("Erreur 500"));
}

#[tokio::test]
async fn failed_submission_allows_a_manual_retry() {
    common::init_tracing();
    let mut controller = NewBillController::with_defaults(
        Arc::new(FailingBillService::new("Erreur 500")),
        employee_session(),
    );

    controller
        .handle_file_change(Some(ProofFile::new("hello.png", None)))
        .unwrap();
    controller.handle_submit(filled_form()).await.unwrap_err();
    assert_eq!(controller.state().label(), "submission-failed");

    controller.retry().unwrap();
    assert!(controller.can_submit());
}
