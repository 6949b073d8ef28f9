//! Integration tests for the chat service over the model port.

use std::sync::Arc;

use cognita::application::ChatService;
use cognita::domain::{DomainError, FinishReason, Role};
use cognita::error::Error;
use cognita::testkit::model::ScriptedModel;

#[test]
fn reply_wraps_message_in_single_user_turn() {
    let model = Arc::new(ScriptedModel::replying("Paris."));
    let service = ChatService::new(model.clone());

    let completion = tokio_test::block_on(service.reply(Some("Capital of France?"))).unwrap();

    assert_eq!(completion.text, "Paris.");
    assert_eq!(completion.finish, FinishReason::Stop);

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 1);
    assert_eq!(calls[0][0].role, Role::User);
    assert_eq!(calls[0][0].content, "Capital of France?");
}

#[test]
fn each_request_is_independent() {
    let model = Arc::new(ScriptedModel::replying("ok"));
    let service = ChatService::new(model.clone());

    tokio_test::block_on(service.reply(Some("first"))).unwrap();
    tokio_test::block_on(service.reply(Some("second"))).unwrap();

    let calls = model.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].len(), 1, "no history carried between requests");
    assert_eq!(calls[1][0].content, "second");
}

#[test]
fn missing_message_is_a_domain_error() {
    let service = ChatService::new(Arc::new(ScriptedModel::replying("unused")));

    let result = tokio_test::block_on(service.reply(None));

    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::EmptyMessage))
    ));
}

#[test]
fn service_reports_model_name() {
    let service = ChatService::new(Arc::new(ScriptedModel::replying("unused")));
    assert_eq!(service.model_name(), "scripted");
}
