//! # Call Messages
//!
//! This module defines the message types that travel over a service channel:
//! one enum per remote service, one variant per remote method. Each variant
//! carries its request payload and a `respond_to` channel the transport uses
//! to deliver the typed reply or a [`TransportFault`].
//!
//! The associated request/response shapes keep every operation type-safe:
//! a user request cannot be dispatched on the friendship channel, and a
//! reply channel only accepts the response type its method produces.

use std::time::Duration;

use tokio::sync::oneshot;

use crate::model::{
    CreateMessageRequest, EmailRequest, Friendship, FriendshipPairRequest,
    FriendshipStatusRequest, FriendshipUserIdRequest, GroupMessagesRequest, LoginRequest,
    Message, MessageIdRequest, MessagesBetweenUsersRequest, ResponseStatus,
    UpdateEmailRequest, UpdateMessageContentRequest, UpdatePasswordRequest,
    UpdateUsernameRequest, User, UserIdRequest, UsernameRequest,
};
use crate::wire::fault::TransportFault;

/// Type alias for the one-shot reply channel used by the transport.
pub type Response<T> = oneshot::Sender<Result<T, TransportFault>>;

/// Optional per-call controls, forwarded unchanged to the transport.
///
/// The adapters never enforce these themselves; a deadline that expires or a
/// cancellation signal that fires surfaces as an ordinary [`TransportFault`].
#[derive(Debug, Default)]
pub struct CallOptions {
    /// Maximum time the transport may spend on the round trip.
    pub deadline: Option<Duration>,
    /// Fires to abandon the call early.
    pub cancel: Option<oneshot::Receiver<()>>,
}

impl CallOptions {
    /// Options carrying only a deadline.
    pub fn with_deadline(deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
            cancel: None,
        }
    }
}

/// A call envelope as the transport receives it.
#[derive(Debug)]
pub struct Dispatch<C> {
    pub options: CallOptions,
    pub call: C,
}

/// Requests understood by the remote User service.
#[derive(Debug)]
pub enum UserCall {
    CreateUser {
        user: User,
        respond_to: Response<ResponseStatus>,
    },
    GetUserByUsername {
        request: UsernameRequest,
        respond_to: Response<User>,
    },
    GetUserByEmail {
        request: EmailRequest,
        respond_to: Response<User>,
    },
    LoginUser {
        request: LoginRequest,
        respond_to: Response<ResponseStatus>,
    },
    LoginUserByEmail {
        request: LoginRequest,
        respond_to: Response<ResponseStatus>,
    },
    UpdateUsername {
        request: UpdateUsernameRequest,
        respond_to: Response<ResponseStatus>,
    },
    UpdateEmail {
        request: UpdateEmailRequest,
        respond_to: Response<ResponseStatus>,
    },
    UpdatePassword {
        request: UpdatePasswordRequest,
        respond_to: Response<ResponseStatus>,
    },
    // DeleteUser and LogoutUser are distinct remote operations even though
    // they share the request shape.
    DeleteUser {
        request: UserIdRequest,
        respond_to: Response<ResponseStatus>,
    },
    LogoutUser {
        request: UserIdRequest,
        respond_to: Response<ResponseStatus>,
    },
}

/// Requests understood by the remote Friendship service.
#[derive(Debug)]
pub enum FriendshipCall {
    CreateFriendship {
        request: FriendshipStatusRequest,
        respond_to: Response<ResponseStatus>,
    },
    GetFriendship {
        request: FriendshipPairRequest,
        respond_to: Response<Friendship>,
    },
    GetAllFriendships {
        request: FriendshipUserIdRequest,
        respond_to: Response<Vec<Friendship>>,
    },
    UpdateFriendshipStatus {
        request: FriendshipStatusRequest,
        respond_to: Response<ResponseStatus>,
    },
    DeleteFriendship {
        request: FriendshipPairRequest,
        respond_to: Response<ResponseStatus>,
    },
}

/// Requests understood by the remote Message service.
///
/// The mutations reply with `()`: the remote contract is implicit-success,
/// and the adapter synthesizes the user-facing envelope.
#[derive(Debug)]
pub enum MessageCall {
    CreateMessage {
        request: CreateMessageRequest,
        respond_to: Response<()>,
    },
    GetMessagesBetweenUsers {
        request: MessagesBetweenUsersRequest,
        respond_to: Response<Vec<Message>>,
    },
    GetMessagesForGroup {
        request: GroupMessagesRequest,
        respond_to: Response<Vec<Message>>,
    },
    UpdateMessageContent {
        request: UpdateMessageContentRequest,
        respond_to: Response<()>,
    },
    DeleteMessage {
        request: MessageIdRequest,
        respond_to: Response<()>,
    },
    SoftDeleteMessage {
        request: MessageIdRequest,
        respond_to: Response<()>,
    },
}
