//! UserProfile domain model.
//!
//! Mirrors the subset of the Spotify `/me` object the backend proxies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback shown when the account has no display name.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// A single profile picture entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub url: String,
}

/// User profile, rendered as the sun of the solar system.
///
/// Missing fields deserialize to their empty values; Spotify sends a null
/// `display_name` for some accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub images: Vec<ProfileImage>,
}

impl UserProfile {
    /// Builds a profile from any parsed `/me` body.
    ///
    /// Non-object bodies (including `null`) are no profile. Fields of the
    /// wrong type read as absent, and a numeric `id` is kept as text.
    pub fn from_value(body: &Value) -> Option<Self> {
        let fields = body.as_object()?;
        let display_name = fields
            .get("display_name")
            .and_then(Value::as_str)
            .map(str::to_string);
        let id = match fields.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => String::new(),
        };
        let images = fields
            .get("images")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| ProfileImage {
                        url: entry
                            .get("url")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            display_name,
            id,
            images,
        })
    }

    /// Display name, or `"User"` when absent or empty.
    pub fn name_or_default(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_DISPLAY_NAME,
        }
    }

    /// URL of the first profile picture, if any.
    pub fn avatar_url(&self) -> Option<&str> {
        self.images
            .first()
            .map(|image| image.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_profile() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"display_name":"Ada","id":"ada42","images":[{"url":"https://i/a.png","height":64}],"country":"GB"}"#,
        )
        .unwrap();
        assert_eq!(profile.name_or_default(), "Ada");
        assert_eq!(profile.id, "ada42");
        assert_eq!(profile.avatar_url(), Some("https://i/a.png"));
    }

    #[test]
    fn test_deserialize_null_name_and_missing_images() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"display_name":null,"id":"x"}"#).unwrap();
        assert_eq!(profile.name_or_default(), DEFAULT_DISPLAY_NAME);
        assert!(profile.images.is_empty());
        assert_eq!(profile.avatar_url(), None);
    }

    #[test]
    fn test_from_value_tolerates_wrong_types() {
        let profile = UserProfile::from_value(&json!({
            "display_name": 7,
            "id": 42,
            "images": null,
        }))
        .unwrap();
        assert_eq!(profile.name_or_default(), DEFAULT_DISPLAY_NAME);
        assert_eq!(profile.id, "42");
        assert!(profile.images.is_empty());
    }

    #[test]
    fn test_from_value_keeps_first_image_position() {
        let profile = UserProfile::from_value(&json!({
            "display_name": "Ada",
            "images": [{ "url": null }, { "url": "https://i/second.png" }],
        }))
        .unwrap();
        assert_eq!(profile.name_or_default(), "Ada");
        assert_eq!(profile.id, "");
        assert_eq!(profile.avatar_url(), None);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        for body in [Value::Null, json!([]), json!("Ada"), json!(1)] {
            assert_eq!(UserProfile::from_value(&body), None, "body {body}");
        }
    }
}
