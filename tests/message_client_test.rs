use chat_clients::model::Message;
use chat_clients::wire::mock::ScriptedTransport;
use chat_clients::wire::{service_channel, CallOptions, Dispatch, MessageCall, TransportFault};
use chat_clients::{ClientError, MessageClient};

fn assert_invalid<T: std::fmt::Debug>(result: Result<T, ClientError>) {
    assert!(
        matches!(result, Err(ClientError::InvalidArgument { .. })),
        "expected a local validation error, got {result:?}"
    );
}

#[tokio::test]
async fn get_messages_between_users_rejects_a_blank_sender_without_calling_the_transport() {
    let transport =
        ScriptedTransport::new(|_: Dispatch<MessageCall>| panic!("transport must not be reached"));
    let client = MessageClient::new(transport.channel());

    let err = client
        .get_messages_between_users("", "u2", CallOptions::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::InvalidArgument {
            fields: vec!["sender_id"]
        }
    );
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn every_mutation_rejects_blank_identifiers_without_calling_the_transport() {
    let transport =
        ScriptedTransport::new(|_: Dispatch<MessageCall>| panic!("transport must not be reached"));
    let client = MessageClient::new(transport.channel());
    let options = CallOptions::default;

    assert_invalid(
        client
            .create_message(Message::direct("", "u2", "ciphertext", 1), options())
            .await,
    );
    assert_invalid(
        client
            .create_message(Message::direct("u1", "u2", "  ", 1), options())
            .await,
    );
    // A recipient or group id that is present but blank is rejected too.
    assert_invalid(
        client
            .create_message(Message::direct("u1", "", "ciphertext", 1), options())
            .await,
    );
    assert_invalid(
        client
            .create_message(Message::group("u1", " ", "ciphertext", 1), options())
            .await,
    );
    assert_invalid(client.update_message_content("", "ciphertext", options()).await);
    assert_invalid(client.update_message_content("m1", "", options()).await);
    assert_invalid(client.delete_message("", options()).await);
    assert_invalid(client.soft_delete_message("\t", options()).await);

    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn implicit_success_mutations_synthesize_their_envelopes() {
    let transport = ScriptedTransport::new(|dispatch| match dispatch.call {
        MessageCall::CreateMessage { respond_to, .. } => {
            let _ = respond_to.send(Ok(()));
        }
        MessageCall::UpdateMessageContent { respond_to, .. } => {
            let _ = respond_to.send(Ok(()));
        }
        MessageCall::DeleteMessage { respond_to, .. } => {
            let _ = respond_to.send(Ok(()));
        }
        MessageCall::SoftDeleteMessage { respond_to, .. } => {
            let _ = respond_to.send(Ok(()));
        }
        other => panic!("unexpected call: {other:?}"),
    });
    let client = MessageClient::new(transport.channel());

    let created = client
        .create_message(
            Message::direct("u1", "u2", "ciphertext", 1_700_000_000),
            CallOptions::default(),
        )
        .await
        .unwrap();
    assert!(created.success);
    assert_eq!(created.message, "Message created successfully.");

    let updated = client
        .update_message_content("m1", "new ciphertext", CallOptions::default())
        .await
        .unwrap();
    assert_eq!(updated.message, "Message content updated successfully.");

    let deleted = client.delete_message("m1", CallOptions::default()).await.unwrap();
    assert_eq!(deleted.message, "Message deleted successfully.");

    let soft_deleted = client
        .soft_delete_message("m1", CallOptions::default())
        .await
        .unwrap();
    assert_eq!(soft_deleted.message, "Message soft-deleted successfully.");

    assert_eq!(transport.calls(), 4);
}

#[tokio::test]
async fn mutation_fault_degrades_into_a_failed_envelope() {
    let transport = ScriptedTransport::new(|dispatch| match dispatch.call {
        MessageCall::SoftDeleteMessage { respond_to, .. } => {
            let _ = respond_to.send(Err(TransportFault::Remote("message store offline".into())));
        }
        _ => panic!("unexpected call"),
    });
    let client = MessageClient::new(transport.channel());

    let status = client
        .soft_delete_message("m1", CallOptions::default())
        .await
        .unwrap();

    assert!(!status.success);
    assert_eq!(
        status.message,
        "Error during soft-deleting message: message store offline"
    );
}

#[tokio::test]
async fn query_fault_is_raised_with_the_transport_detail() {
    let transport = ScriptedTransport::new(|dispatch| match dispatch.call {
        MessageCall::GetMessagesForGroup { respond_to, .. } => {
            let _ = respond_to.send(Err(TransportFault::Cancelled));
        }
        _ => panic!("unexpected call"),
    });
    let client = MessageClient::new(transport.channel());

    let err = client
        .get_messages_for_group("g1", CallOptions::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Rpc {
            action: "retrieving group messages",
            detail: "Call cancelled".to_owned(),
        }
    );
}

#[tokio::test]
async fn conversation_query_returns_the_messages() {
    let transport = ScriptedTransport::new(|dispatch| match dispatch.call {
        MessageCall::GetMessagesBetweenUsers { request, respond_to } => {
            let _ = respond_to.send(Ok(vec![
                Message::direct(request.sender_id.clone(), request.recipient_id.clone(), "hi", 1),
                Message::direct(request.recipient_id, request.sender_id, "hello", 2),
            ]));
        }
        _ => panic!("unexpected call"),
    });
    let client = MessageClient::new(transport.channel());

    let messages = client
        .get_messages_between_users("u1", "u2", CallOptions::default())
        .await
        .unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender_id, "u1");
    assert_eq!(messages[1].sender_id, "u2");
}

#[tokio::test]
async fn create_message_ships_the_full_record() {
    let (channel, mut receiver) = service_channel::<MessageCall>(4);
    let client = MessageClient::new(channel);

    let task = tokio::spawn(async move {
        client
            .create_message(
                Message::group("u1", "g1", "ciphertext", 1_700_000_000),
                CallOptions::default(),
            )
            .await
    });

    let dispatch = receiver.recv().await.expect("expected a dispatch");
    match dispatch.call {
        MessageCall::CreateMessage { request, respond_to } => {
            assert_eq!(request.message.sender_id, "u1");
            assert_eq!(request.message.group_id.as_deref(), Some("g1"));
            assert_eq!(request.message.recipient_id, None);
            assert!(!request.message.deleted);
            let _ = respond_to.send(Ok(()));
        }
        other => panic!("unexpected call: {other:?}"),
    }

    assert!(task.await.unwrap().unwrap().success);
}
