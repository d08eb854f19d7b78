use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::StudentProfile;
use crate::session::shortlist::Shortlist;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    Student,
    Advisor,
}

/// One turn of the counseling conversation, in send order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// All per-student state. Everything here is lost when the session is
/// destroyed or the process stops; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub profile: Option<StudentProfile>,
    pub shortlist: Shortlist,
    pub chat_history: Vec<ChatTurn>,
    pub sop_feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        Session {
            id,
            profile: None,
            shortlist: Shortlist::default(),
            chat_history: Vec::new(),
            sop_feedback: None,
            created_at: Utc::now(),
        }
    }
}
