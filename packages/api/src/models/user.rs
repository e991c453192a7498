//! # Player identity as the backend reports it
//!
//! [`User`] is a read-only projection of the backend's user document. Every
//! display field is optional because players can sign in anonymously and fill in
//! their profile later. `avatar_choices` lists the avatars the player may pick
//! from; the chosen one ends up in `image`.

use serde::{Deserialize, Serialize};

/// An avatar the player may select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarChoice {
    pub id: String,
    pub url: String,
}

/// User information as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub avatar_choices: Vec<AvatarChoice>,
}

impl User {
    /// Get display name, falling back to username, then email, then "Player".
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("Player")
    }

    /// The avatar to show: the chosen image, else the first available choice.
    pub fn avatar_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.avatar_choices.first().map(|choice| choice.url.as_str()))
    }
}
