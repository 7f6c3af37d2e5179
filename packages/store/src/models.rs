//! # Domain models for memories and travels
//!
//! Defines the records returned by a [`crate::RecordStore`] and the validated
//! inputs it accepts. Every type is `Serialize + Deserialize` so the same
//! structs travel as JSON through the API and into the page components.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Memory`] | A stored memory: title, optional description, ordered image URLs, age category, type and audit timestamps. |
//! | [`Travel`] | A stored trip: title, optional description, a geocoded [`Location`], ordered image URLs and the visit date. |
//! | [`AgeCategory`] | One of eleven fixed life-stage labels (`0-12meses`, `1ano` … `10anos`). |
//! | [`MemoryType`] | `memory` or `schoolwork`. |
//! | [`NewMemory`] / [`NewTravel`] | Validated, timestamped inputs for an insert. The store assigns the identifier. |
//! | [`MemoryFilter`] | Optional equality filters for listing memories. |
//!
//! Identifiers serialize as `_id` and the remaining fields as camelCase, which is
//! the shape the browser client reads.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returned when a string does not name any variant of a fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Child's age bucket a memory belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "0-12meses")]
    Months0To12,
    #[default]
    #[serde(rename = "1ano")]
    Year1,
    #[serde(rename = "2anos")]
    Years2,
    #[serde(rename = "3anos")]
    Years3,
    #[serde(rename = "4anos")]
    Years4,
    #[serde(rename = "5anos")]
    Years5,
    #[serde(rename = "6anos")]
    Years6,
    #[serde(rename = "7anos")]
    Years7,
    #[serde(rename = "8anos")]
    Years8,
    #[serde(rename = "9anos")]
    Years9,
    #[serde(rename = "10anos")]
    Years10,
}

impl AgeCategory {
    /// All categories in display order.
    pub const ALL: [AgeCategory; 11] = [
        AgeCategory::Months0To12,
        AgeCategory::Year1,
        AgeCategory::Years2,
        AgeCategory::Years3,
        AgeCategory::Years4,
        AgeCategory::Years5,
        AgeCategory::Years6,
        AgeCategory::Years7,
        AgeCategory::Years8,
        AgeCategory::Years9,
        AgeCategory::Years10,
    ];

    /// Wire value, e.g. `"1ano"`.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeCategory::Months0To12 => "0-12meses",
            AgeCategory::Year1 => "1ano",
            AgeCategory::Years2 => "2anos",
            AgeCategory::Years3 => "3anos",
            AgeCategory::Years4 => "4anos",
            AgeCategory::Years5 => "5anos",
            AgeCategory::Years6 => "6anos",
            AgeCategory::Years7 => "7anos",
            AgeCategory::Years8 => "8anos",
            AgeCategory::Years9 => "9anos",
            AgeCategory::Years10 => "10anos",
        }
    }

    /// Human label, e.g. `"1 ano"`.
    pub fn label(self) -> &'static str {
        match self {
            AgeCategory::Months0To12 => "0-12 meses",
            AgeCategory::Year1 => "1 ano",
            AgeCategory::Years2 => "2 anos",
            AgeCategory::Years3 => "3 anos",
            AgeCategory::Years4 => "4 anos",
            AgeCategory::Years5 => "5 anos",
            AgeCategory::Years6 => "6 anos",
            AgeCategory::Years7 => "7 anos",
            AgeCategory::Years8 => "8 anos",
            AgeCategory::Years9 => "9 anos",
            AgeCategory::Years10 => "10 anos",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "ageCategory",
                value: s.to_string(),
            })
    }
}

/// Whether a memory is a moment or a piece of schoolwork.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryType {
    #[default]
    Memory,
    Schoolwork,
}

impl MemoryType {
    pub const ALL: [MemoryType; 2] = [MemoryType::Memory, MemoryType::Schoolwork];

    pub fn as_str(self) -> &'static str {
        match self {
            MemoryType::Memory => "memory",
            MemoryType::Schoolwork => "schoolwork",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MemoryType::Memory => "Memória",
            MemoryType::Schoolwork => "Trabalho Escolar",
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoryType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(MemoryType::Memory),
            "schoolwork" => Ok(MemoryType::Schoolwork),
            _ => Err(UnknownVariant {
                kind: "type",
                value: s.to_string(),
            }),
        }
    }
}

/// A stored memory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Display order is insertion order.
    pub images: Vec<String>,
    pub age_category: AgeCategory,
    pub r#type: MemoryType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Where a trip took place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

/// A stored trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Travel {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: Location,
    pub images: Vec<String>,
    pub date_visited: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated memory ready to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMemory {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub age_category: AgeCategory,
    pub r#type: MemoryType,
    /// Stamped into both `createdAt` and `updatedAt`.
    pub created_at: DateTime<Utc>,
}

impl NewMemory {
    pub fn into_memory(self, id: Uuid) -> Memory {
        Memory {
            id,
            title: self.title,
            description: self.description,
            images: self.images,
            age_category: self.age_category,
            r#type: self.r#type,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// A validated trip ready to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTravel {
    pub title: String,
    pub description: String,
    pub location: Location,
    pub images: Vec<String>,
    pub date_visited: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl NewTravel {
    pub fn into_travel(self, id: Uuid) -> Travel {
        Travel {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            images: self.images,
            date_visited: self.date_visited,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Equality filters for listing memories. `None` matches everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryFilter {
    pub age_category: Option<AgeCategory>,
    pub r#type: Option<MemoryType>,
}

impl MemoryFilter {
    pub fn matches(&self, memory: &Memory) -> bool {
        self.age_category.map_or(true, |c| c == memory.age_category)
            && self.r#type.map_or(true, |t| t == memory.r#type)
    }
}
