//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating models with standard test values. These are in-memory
//! model instances that don't require database interaction, suitable for unit tests.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::IdeaStatus;

use crate::model::{AccountModel, IdeaModel};

/// Create a mock account model that joined at `date_joined`.
pub fn mock_account_model(id: i32, username: &str, date_joined: NaiveDateTime) -> AccountModel {
    AccountModel {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        firstname: String::new(),
        lastname: String::new(),
        phone: None,
        linkedin: None,
        repository: None,
        experience: None,
        sex: None,
        birthdate: None,
        description: String::new(),
        is_staff: false,
        is_active: true,
        is_verified: false,
        date_joined,
        last_seen: Utc::now().naive_utc(),
    }
}

/// Create a mock open idea model created at `date_created`.
pub fn mock_idea_model(
    id: i32,
    founder_id: i32,
    title: &str,
    date_created: NaiveDateTime,
) -> IdeaModel {
    IdeaModel {
        id,
        title: title.to_string(),
        title_slug: title.to_lowercase().replace(' ', "-"),
        founder_id,
        advancement: String::new(),
        repository: None,
        description: format!("Description of {}", title),
        date_created,
        status: IdeaStatus::Open,
        team_size: 4,
    }
}
