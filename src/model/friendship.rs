//! Friendship entity, its status enumeration, and the Friendship service
//! request shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A friendship edge between two users, as the remote service stores it.
///
/// Which user is `user_id1` versus `user_id2` is the remote service's
/// convention; the adapter treats the pair as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friendship {
    pub user_id1: String,
    pub user_id2: String,
    pub status: FriendshipStatus,
}

/// Lifecycle state of a friendship.
///
/// Serializes to the lowercase wire form (`"pending"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Declined,
    Blocked,
}

impl FriendshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendshipStatus::Pending => "pending",
            FriendshipStatus::Accepted => "accepted",
            FriendshipStatus::Declined => "declined",
            FriendshipStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for FriendshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The given string is not a known friendship status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown friendship status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for FriendshipStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FriendshipStatus::Pending),
            "accepted" => Ok(FriendshipStatus::Accepted),
            "declined" => Ok(FriendshipStatus::Declined),
            "blocked" => Ok(FriendshipStatus::Blocked),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipPairRequest {
    pub user_id1: String,
    pub user_id2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipStatusRequest {
    pub user_id1: String,
    pub user_id2: String,
    pub status: FriendshipStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipUserIdRequest {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_the_wire_form() {
        for status in [
            FriendshipStatus::Pending,
            FriendshipStatus::Accepted,
            FriendshipStatus::Declined,
            FriendshipStatus::Blocked,
        ] {
            assert_eq!(status.to_string().parse::<FriendshipStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        let err = "enemies".parse::<FriendshipStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("enemies".to_owned()));
    }
}
