//! Message entity and the request shapes of the Message service.

use serde::{Deserialize, Serialize};

/// A chat message as the remote Message service stores it.
///
/// Exactly one of `recipient_id` (direct message) or `group_id` (group
/// message) is expected to be set; the remote service owns that rule. The
/// content is encrypted before it ever reaches this layer, and `sent_at`
/// (unix seconds) implies ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: Option<String>,
    pub group_id: Option<String>,
    pub content_encrypted: String,
    pub sent_at: i64,
    pub deleted: bool,
}

impl Message {
    /// A direct message ready for sending; the remote service assigns `id`.
    pub fn direct(
        sender_id: impl Into<String>,
        recipient_id: impl Into<String>,
        content_encrypted: impl Into<String>,
        sent_at: i64,
    ) -> Self {
        Self {
            id: String::new(),
            sender_id: sender_id.into(),
            recipient_id: Some(recipient_id.into()),
            group_id: None,
            content_encrypted: content_encrypted.into(),
            sent_at,
            deleted: false,
        }
    }

    /// A group message ready for sending; the remote service assigns `id`.
    pub fn group(
        sender_id: impl Into<String>,
        group_id: impl Into<String>,
        content_encrypted: impl Into<String>,
        sent_at: i64,
    ) -> Self {
        Self {
            id: String::new(),
            sender_id: sender_id.into(),
            recipient_id: None,
            group_id: Some(group_id.into()),
            content_encrypted: content_encrypted.into(),
            sent_at,
            deleted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesBetweenUsersRequest {
    pub sender_id: String,
    pub recipient_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMessagesRequest {
    pub group_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMessageContentRequest {
    pub message_id: String,
    pub new_content_encrypted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageIdRequest {
    pub message_id: String,
}
