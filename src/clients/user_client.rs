//! # User Client
//!
//! Provides a high-level API for the remote User service. It wraps a
//! `ServiceChannel<UserCall>` and exposes domain-specific methods covering
//! registration, lookup, login, profile updates, and account removal.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::adapter::ServiceAdapter;
use crate::clients::error::ClientError;
use crate::clients::validation::require_non_blank;
use crate::model::{
    EmailRequest, LoginRequest, ResponseStatus, UpdateEmailRequest, UpdatePasswordRequest,
    UpdateUsernameRequest, User, UserIdRequest, UsernameRequest,
};
use crate::wire::{CallOptions, ServiceChannel, UserCall};

/// Client for the remote User service.
#[derive(Clone)]
pub struct UserClient {
    channel: ServiceChannel<UserCall>,
}

impl UserClient {
    pub fn new(channel: ServiceChannel<UserCall>) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl ServiceAdapter for UserClient {
    type Call = UserCall;

    fn channel(&self) -> &ServiceChannel<UserCall> {
        &self.channel
    }

    fn service(&self) -> &'static str {
        "user"
    }
}

impl UserClient {
    /// Registers a new account.
    #[instrument(skip(self, user, options))]
    pub async fn create_user(
        &self,
        user: User,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[
            ("username", &user.username),
            ("email", &user.email),
            ("password", &user.password),
        ])?;
        debug!("Sending request");
        Ok(self
            .mutate("creating user", options, |respond_to| {
                UserCall::CreateUser { user, respond_to }
            })
            .await)
    }

    #[instrument(skip(self, options))]
    pub async fn get_user_by_username(
        &self,
        username: &str,
        options: CallOptions,
    ) -> Result<User, ClientError> {
        require_non_blank(&[("username", username)])?;
        debug!("Sending request");
        let request = UsernameRequest {
            username: username.to_owned(),
        };
        self.query("fetching user by username", options, |respond_to| {
            UserCall::GetUserByUsername { request, respond_to }
        })
        .await
    }

    #[instrument(skip(self, options))]
    pub async fn get_user_by_email(
        &self,
        email: &str,
        options: CallOptions,
    ) -> Result<User, ClientError> {
        require_non_blank(&[("email", email)])?;
        debug!("Sending request");
        let request = EmailRequest {
            email: email.to_owned(),
        };
        self.query("fetching user by email", options, |respond_to| {
            UserCall::GetUserByEmail { request, respond_to }
        })
        .await
    }

    /// Authenticates by username.
    #[instrument(skip(self, password, options))]
    pub async fn login_user(
        &self,
        username: &str,
        password: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("username", username), ("password", password)])?;
        debug!("Sending request");
        let request = LoginRequest::with_username(username, password);
        Ok(self
            .mutate("logging in user", options, |respond_to| {
                UserCall::LoginUser { request, respond_to }
            })
            .await)
    }

    /// Authenticates by email address.
    #[instrument(skip(self, password, options))]
    pub async fn login_user_by_email(
        &self,
        email: &str,
        password: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("email", email), ("password", password)])?;
        debug!("Sending request");
        let request = LoginRequest::with_email(email, password);
        Ok(self
            .mutate("logging in user by email", options, |respond_to| {
                UserCall::LoginUserByEmail { request, respond_to }
            })
            .await)
    }

    #[instrument(skip(self, options))]
    pub async fn update_username(
        &self,
        user_id: &str,
        new_username: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("user_id", user_id), ("new_username", new_username)])?;
        debug!("Sending request");
        let request = UpdateUsernameRequest {
            user_id: user_id.to_owned(),
            new_username: new_username.to_owned(),
        };
        Ok(self
            .mutate("updating username", options, |respond_to| {
                UserCall::UpdateUsername { request, respond_to }
            })
            .await)
    }

    #[instrument(skip(self, options))]
    pub async fn update_email(
        &self,
        user_id: &str,
        new_email: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("user_id", user_id), ("new_email", new_email)])?;
        debug!("Sending request");
        let request = UpdateEmailRequest {
            user_id: user_id.to_owned(),
            new_email: new_email.to_owned(),
        };
        Ok(self
            .mutate("updating email", options, |respond_to| {
                UserCall::UpdateEmail { request, respond_to }
            })
            .await)
    }

    #[instrument(skip(self, new_password, options))]
    pub async fn update_password(
        &self,
        user_id: &str,
        new_password: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("user_id", user_id), ("new_password", new_password)])?;
        debug!("Sending request");
        let request = UpdatePasswordRequest {
            user_id: user_id.to_owned(),
            new_password: new_password.to_owned(),
        };
        Ok(self
            .mutate("updating password", options, |respond_to| {
                UserCall::UpdatePassword { request, respond_to }
            })
            .await)
    }

    /// Removes the account permanently.
    #[instrument(skip(self, options))]
    pub async fn delete_user(
        &self,
        user_id: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("user_id", user_id)])?;
        debug!("Sending request");
        let request = UserIdRequest {
            user_id: user_id.to_owned(),
        };
        Ok(self
            .mutate("deleting user", options, |respond_to| {
                UserCall::DeleteUser { request, respond_to }
            })
            .await)
    }

    /// Ends the account's current session.
    #[instrument(skip(self, options))]
    pub async fn logout_user(
        &self,
        user_id: &str,
        options: CallOptions,
    ) -> Result<ResponseStatus, ClientError> {
        require_non_blank(&[("user_id", user_id)])?;
        debug!("Sending request");
        let request = UserIdRequest {
            user_id: user_id.to_owned(),
        };
        Ok(self
            .mutate("logging out user", options, |respond_to| {
                UserCall::LogoutUser { request, respond_to }
            })
            .await)
    }
}
