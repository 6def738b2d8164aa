//! # Friendship Client
//!
//! Provides a high-level API for the remote Friendship service: creating,
//! querying, re-statusing, and deleting the friendship edge between two
//! users.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::adapter::ServiceAdapter;
use crate::clients::error::ClientError;
use crate::clients::validation::require_non_blank;
use crate::model::{
    Friendship, FriendshipPairRequest, FriendshipStatus, FriendshipStatusRequest,
    FriendshipUserIdRequest, ResponseStatus,
};
use crate::wire::{CallOptions, FriendshipCall, ServiceChannel};

/// Client for the remote Friendship service.
#[derive(Clone)]
pub struct FriendshipClient {
    channel: ServiceChannel<FriendshipCall>,
}

impl FriendshipClient {
    pub fn new(channel: ServiceChannel<FriendshipCall>) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl ServiceAdapter for FriendshipClient {
    type Call = FriendshipCall;

    fn channel(&self) -> &ServiceChannel<FriendshipCall> {
        &self.channel
    }

    fn service(&self) -> &'static str {
        "friendship"
    }
}

impl FriendshipClient {
    /// Creates a new friendship between two users.
    #[instrument(skip(self, options))]
    pub async fn create_friendship(
        &self,
        user_id1: &str,
        user_id2: &str,
        status: FriendshipStatus,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("user_id1", user_id1), ("user_id2", user_id2)])?;
        debug!("Sending request");
        let request = FriendshipStatusRequest {
            user_id1: user_id1.to_owned(),
            user_id2: user_id2.to_owned(),
            status,
        };
        Ok(self
            .mutate("creating friendship", options, |respond_to| {
                FriendshipCall::CreateFriendship { request, respond_to }
            })
            .await)
    }

    /// Fetches the friendship between two users.
    #[instrument(skip(self, options))]
    pub async fn get_friendship(
        &self,
        user_id1: &str,
        user_id2: &str,
        options: CallOptions,
    ) -> Result<Friendship, ClientError> {
        require_non_blank(&[("user_id1", user_id1), ("user_id2", user_id2)])?;
        debug!("Sending request");
        let request = FriendshipPairRequest {
            user_id1: user_id1.to_owned(),
            user_id2: user_id2.to_owned(),
        };
        self.query("fetching friendship", options, |respond_to| {
            FriendshipCall::GetFriendship { request, respond_to }
        })
        .await
    }

    /// Fetches every friendship the given user participates in.
    #[instrument(skip(self, options))]
    pub async fn get_all_friendships(
        &self,
        user_id: &str,
        options: CallOptions,
    ) -> Result<Vec<Friendship>, ClientError> {
        require_non_blank(&[("user_id", user_id)])?;
        debug!("Sending request");
        let request = FriendshipUserIdRequest {
            user_id: user_id.to_owned(),
        };
        self.query("fetching all friendships", options, |respond_to| {
            FriendshipCall::GetAllFriendships { request, respond_to }
        })
        .await
    }

    /// Moves a friendship to a new status.
    #[instrument(skip(self, options))]
    pub async fn update_friendship_status(
        &self,
        user_id1: &str,
        user_id2: &str,
        new_status: FriendshipStatus,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("user_id1", user_id1), ("user_id2", user_id2)])?;
        debug!("Sending request");
        let request = FriendshipStatusRequest {
            user_id1: user_id1.to_owned(),
            user_id2: user_id2.to_owned(),
            status: new_status,
        };
        Ok(self
            .mutate("updating friendship status", options, |respond_to| {
                FriendshipCall::UpdateFriendshipStatus { request, respond_to }
            })
            .await)
    }

    /// Removes the friendship between two users.
    #[instrument(skip(self, options))]
    pub async fn delete_friendship(
        &self,
        user_id1: &str,
        user_id2: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("user_id1", user_id1), ("user_id2", user_id2)])?;
        debug!("Sending request");
        let request = FriendshipPairRequest {
            user_id1: user_id1.to_owned(),
            user_id2: user_id2.to_owned(),
        };
        Ok(self
            .mutate("deleting friendship", options, |respond_to| {
                FriendshipCall::DeleteFriendship { request, respond_to }
            })
            .await)
    }
}
