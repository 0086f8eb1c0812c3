//! Per-platform `settings` objects for post creation.
//!
//! The Postiz post payload carries a `settings` object whose `__type`
//! discriminator names the provider. Some providers require extra fields;
//! providers without a known shape receive the bare discriminator and the
//! remote service decides whether that is acceptable.

use schemars::JsonSchema;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Instagram publishing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InstagramPostType {
    // Variants carry no doc comments: the schema must stay a plain string `enum`.
    // Permanent feed post.
    #[default]
    Post,
    // 24-hour story.
    Story,
}

impl InstagramPostType {
    pub fn as_str(self) -> &'static str {
        match self {
            InstagramPostType::Post => "post",
            InstagramPostType::Story => "story",
        }
    }
}

/// Per-call options that influence settings resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsOptions {
    pub instagram_post_type: InstagramPostType,
}

/// Platform-specific settings for one post entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformSettings {
    X {
        who_can_reply_post: String,
        community: String,
    },
    LinkedIn,
    Instagram {
        post_type: InstagramPostType,
        collaborators: Vec<String>,
    },
    /// Any provider without a dedicated shape; carries only its identifier.
    Other(String),
}

impl PlatformSettings {
    /// Map a provider identifier to its settings object. Never fails.
    pub fn resolve(platform: &str, options: &SettingsOptions) -> Self {
        match platform {
            "x" => PlatformSettings::X {
                who_can_reply_post: "everyone".to_string(),
                community: String::new(),
            },
            "linkedin" => PlatformSettings::LinkedIn,
            "instagram" => PlatformSettings::Instagram {
                post_type: options.instagram_post_type,
                collaborators: Vec::new(),
            },
            other => PlatformSettings::Other(other.to_string()),
        }
    }

    /// Value of the `__type` discriminator.
    pub fn platform(&self) -> &str {
        match self {
            PlatformSettings::X { .. } => "x",
            PlatformSettings::LinkedIn => "linkedin",
            PlatformSettings::Instagram { .. } => "instagram",
            PlatformSettings::Other(platform) => platform,
        }
    }
}

impl Serialize for PlatformSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlatformSettings::X {
                who_can_reply_post,
                community,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("__type", self.platform())?;
                map.serialize_entry("who_can_reply_post", who_can_reply_post)?;
                map.serialize_entry("community", community)?;
                map.end()
            }
            PlatformSettings::Instagram {
                post_type,
                collaborators,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("__type", self.platform())?;
                map.serialize_entry("post_type", post_type)?;
                map.serialize_entry("collaborators", collaborators)?;
                map.end()
            }
            PlatformSettings::LinkedIn | PlatformSettings::Other(_) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("__type", self.platform())?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve_json(platform: &str, options: SettingsOptions) -> serde_json::Value {
        serde_json::to_value(PlatformSettings::resolve(platform, &options)).unwrap()
    }

    #[test]
    fn test_x_settings() {
        assert_eq!(
            resolve_json("x", SettingsOptions::default()),
            json!({"__type": "x", "who_can_reply_post": "everyone", "community": ""})
        );
    }

    #[test]
    fn test_linkedin_settings() {
        assert_eq!(
            resolve_json("linkedin", SettingsOptions::default()),
            json!({"__type": "linkedin"})
        );
    }

    #[test]
    fn test_instagram_defaults_to_post() {
        assert_eq!(
            resolve_json("instagram", SettingsOptions::default()),
            json!({"__type": "instagram", "post_type": "post", "collaborators": []})
        );
    }

    #[test]
    fn test_instagram_story() {
        let options = SettingsOptions {
            instagram_post_type: InstagramPostType::Story,
        };
        assert_eq!(
            resolve_json("instagram", options),
            json!({"__type": "instagram", "post_type": "story", "collaborators": []})
        );
    }

    #[test]
    fn test_instagram_option_ignored_elsewhere() {
        let options = SettingsOptions {
            instagram_post_type: InstagramPostType::Story,
        };
        assert_eq!(resolve_json("linkedin", options), json!({"__type": "linkedin"}));
    }

    #[test]
    fn test_unknown_platform_carries_only_discriminator() {
        let settings = PlatformSettings::resolve("unknown_platform", &SettingsOptions::default());
        assert_eq!(settings.platform(), "unknown_platform");
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"__type": "unknown_platform"})
        );
    }

    #[test]
    fn test_instagram_post_type_parses_lowercase() {
        let parsed: InstagramPostType = serde_json::from_value(json!("story")).unwrap();
        assert_eq!(parsed, InstagramPostType::Story);
        assert_eq!(parsed.as_str(), "story");
        assert!(serde_json::from_value::<InstagramPostType>(json!("reel")).is_err());
    }

    #[test]
    fn test_instagram_post_type_schema_is_string_enum() {
        let schema = schemars::schema_for!(InstagramPostType);
        let schema = schema.as_value();
        assert_eq!(schema["type"], "string");
        assert_eq!(schema["enum"], json!(["post", "story"]));
        assert!(schema.get("oneOf").is_none());
    }
}
