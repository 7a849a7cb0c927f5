use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LinkScheme;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<SpaceIconScheme>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<SpaceOperationScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<SpaceDescriptionScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<SpaceHomepageScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<SpaceHistoryScheme>,
    #[serde(rename = "_links")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<LinkScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpacePageScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<SpaceScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(rename = "_links")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<LinkScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceIconScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(rename = "isDefault")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceOperationScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(rename = "targetType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceDescriptionScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain: Option<SpaceDescriptionValueScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<SpaceDescriptionValueScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceDescriptionValueScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation: Option<String>,
    #[serde(rename = "embeddedContent")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedded_content: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceHomepageScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "_links")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<LinkScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceHistoryScheme {
    #[serde(rename = "createdDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "createdBy")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<ContentUserScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUserScheme {
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Filters for listing spaces. Every unset field is left out of the query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetSpacesOptionScheme {
    pub space_keys: Vec<String>,
    pub space_ids: Vec<i64>,
    pub space_type: Option<String>,
    pub status: Option<String>,
    pub labels: Vec<String>,
    pub favourite: Option<bool>,
    pub favourite_user_key: Option<String>,
    pub expand: Vec<String>,
}

impl GetSpacesOptionScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn space_keys(mut self, keys: Vec<String>) -> Self {
        self.space_keys = keys;
        self
    }

    pub fn space_ids(mut self, ids: Vec<i64>) -> Self {
        self.space_ids = ids;
        self
    }

    pub fn space_type(mut self, space_type: impl Into<String>) -> Self {
        self.space_type = Some(space_type.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn favourite(mut self, favourite: bool) -> Self {
        self.favourite = Some(favourite);
        self
    }

    pub fn favourite_user_key(mut self, key: impl Into<String>) -> Self {
        self.favourite_user_key = Some(key.into());
        self
    }

    pub fn expand(mut self, expand: Vec<String>) -> Self {
        self.expand = expand;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceScheme {
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<CreateSpaceDescriptionScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlicensed_access: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateSpaceDescriptionScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain: Option<CreateSpaceDescriptionPlainScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateSpaceDescriptionPlainScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation: Option<String>,
}

impl CreateSpaceDescriptionScheme {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            plain: Some(CreateSpaceDescriptionPlainScheme {
                value: Some(value.into()),
                representation: Some("plain".to_string()),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateSpaceScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<CreateSpaceDescriptionScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<UpdateSpaceHomepageScheme>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateSpaceHomepageScheme {
    pub id: String,
}

/// Long-running task handle returned when a space is deleted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentTaskScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<TaskLinkScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskLinkScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
