//! # Message Client
//!
//! Provides a high-level API for the remote Message service. The remote
//! mutations are implicit-success (no envelope in the reply), so this client
//! synthesizes the user-facing [`ResponseStatus`] itself.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::adapter::ServiceAdapter;
use crate::clients::error::ClientError;
use crate::clients::validation::require_non_blank;
use crate::model::{
    CreateMessageRequest, GroupMessagesRequest, Message, MessageIdRequest,
    MessagesBetweenUsersRequest, ResponseStatus, UpdateMessageContentRequest,
};
use crate::wire::{CallOptions, MessageCall, ServiceChannel};

/// Client for the remote Message service.
#[derive(Clone)]
pub struct MessageClient {
    channel: ServiceChannel<MessageCall>,
}

impl MessageClient {
    pub fn new(channel: ServiceChannel<MessageCall>) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl ServiceAdapter for MessageClient {
    type Call = MessageCall;

    fn channel(&self) -> &ServiceChannel<MessageCall> {
        &self.channel
    }

    fn service(&self) -> &'static str {
        "message"
    }
}

impl MessageClient {
    /// Stores a new message.
    ///
    /// Whether a message may target a recipient, a group, or both is the
    /// remote service's rule; locally only blank fields are rejected,
    /// including a recipient or group id that is present but blank.
    #[instrument(skip(self, message, options))]
    pub async fn create_message(
        &self,
        message: Message,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        let mut required = vec![
            ("sender_id", message.sender_id.as_str()),
            ("content_encrypted", message.content_encrypted.as_str()),
        ];
        if let Some(recipient_id) = &message.recipient_id {
            required.push(("recipient_id", recipient_id));
        }
        if let Some(group_id) = &message.group_id {
            required.push(("group_id", group_id));
        }
        require_non_blank(&required)?;
        debug!("Sending request");
        let request = CreateMessageRequest { message };
        Ok(self
            .mutate_unit(
                "creating message",
                "Message created successfully.",
                options,
                |respond_to| MessageCall::CreateMessage { request, respond_to },
            )
            .await)
    }

    /// Fetches the conversation between two users.
    #[instrument(skip(self, options))]
    pub async fn get_messages_between_users(
        &self,
        sender_id: &str,
        recipient_id: &str,
        options: CallOptions,
    ) -> Result<Vec<Message>, ClientError> {
        require_non_blank(&[("sender_id", sender_id), ("recipient_id", recipient_id)])?;
        debug!("Sending request");
        let request = MessagesBetweenUsersRequest {
            sender_id: sender_id.to_owned(),
            recipient_id: recipient_id.to_owned(),
        };
        self.query("retrieving messages", options, |respond_to| {
            MessageCall::GetMessagesBetweenUsers { request, respond_to }
        })
        .await
    }

    /// Fetches a group's messages.
    #[instrument(skip(self, options))]
    pub async fn get_messages_for_group(
        &self,
        group_id: &str,
        options: CallOptions,
    ) -> Result<Vec<Message>, ClientError> {
        require_non_blank(&[("group_id", group_id)])?;
        debug!("Sending request");
        let request = GroupMessagesRequest {
            group_id: group_id.to_owned(),
        };
        self.query("retrieving group messages", options, |respond_to| {
            MessageCall::GetMessagesForGroup { request, respond_to }
        })
        .await
    }

    /// Replaces a message's encrypted content.
    #[instrument(skip(self, new_content_encrypted, options))]
    pub async fn update_message_content(
        &self,
        message_id: &str,
        new_content_encrypted: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[
            ("message_id", message_id),
            ("new_content_encrypted", new_content_encrypted),
        ])?;
        debug!("Sending request");
        let request = UpdateMessageContentRequest {
            message_id: message_id.to_owned(),
            new_content_encrypted: new_content_encrypted.to_owned(),
        };
        Ok(self
            .mutate_unit(
                "updating message content",
                "Message content updated successfully.",
                options,
                |respond_to| MessageCall::UpdateMessageContent { request, respond_to },
            )
            .await)
    }

    /// Removes a message permanently.
    #[instrument(skip(self, options))]
    pub async fn delete_message(
        &self,
        message_id: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("message_id", message_id)])?;
        debug!("Sending request");
        let request = MessageIdRequest {
            message_id: message_id.to_owned(),
        };
        Ok(self
            .mutate_unit(
                "deleting message",
                "Message deleted successfully.",
                options,
                |respond_to| MessageCall::DeleteMessage { request, respond_to },
            )
            .await)
    }

    /// Hides a message without removing the stored record.
    #[instrument(skip(self, options))]
    pub async fn soft_delete_message(
        &self,
        message_id: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("message_id", message_id)])?;
        debug!("Sending request");
        let request = MessageIdRequest {
            message_id: message_id.to_owned(),
        };
        Ok(self
            .mutate_unit(
                "soft-deleting message",
                "Message soft-deleted successfully.",
                options,
                |respond_to| MessageCall::SoftDeleteMessage { request, respond_to },
            )
            .await)
    }
}
