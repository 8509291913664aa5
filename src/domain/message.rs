use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EmailAddress, MessageId};

/// Contact-form submission. Messages are never edited once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub subject: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Message`]. The store stamps `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub subject: String,
    pub message: String,
}

impl NewMessage {
    pub fn into_message(self, id: MessageId, created_at: NaiveDateTime) -> Message {
        Message {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}
