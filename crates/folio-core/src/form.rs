use crate::error::FolioError;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// FormField
// ---------------------------------------------------------------------------

/// A closed set of field names making up one composer's record.
pub trait FormField:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr<Err = FolioError> + 'static
{
    /// Every field, in the order the form presents them.
    fn all() -> &'static [Self];

    fn as_str(self) -> &'static str;
}

// ---------------------------------------------------------------------------
// HireField
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HireField {
    Intent,
    Location,
    Company,
    Role,
    Timeline,
    Message,
    Name,
    Email,
}

impl HireField {
    /// Free-text fields edited on the details step.
    pub fn details() -> &'static [HireField] {
        &[
            HireField::Name,
            HireField::Email,
            HireField::Company,
            HireField::Role,
            HireField::Timeline,
            HireField::Message,
        ]
    }
}

impl FormField for HireField {
    fn all() -> &'static [Self] {
        &[
            HireField::Intent,
            HireField::Location,
            HireField::Company,
            HireField::Role,
            HireField::Timeline,
            HireField::Message,
            HireField::Name,
            HireField::Email,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            HireField::Intent => "intent",
            HireField::Location => "location",
            HireField::Company => "company",
            HireField::Role => "role",
            HireField::Timeline => "timeline",
            HireField::Message => "message",
            HireField::Name => "name",
            HireField::Email => "email",
        }
    }
}

impl fmt::Display for HireField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HireField {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HireField::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FolioError::UnknownField(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ContactField
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField for ContactField {
    fn all() -> &'static [Self] {
        &[
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FolioError::UnknownField(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FormRecord
// ---------------------------------------------------------------------------

/// Values entered so far. Every field reads as an empty string until set;
/// empty values are not stored, so two records compare equal whenever they
/// read the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRecord<F: FormField> {
    values: HashMap<F, String>,
}

impl<F: FormField> Default for FormRecord<F> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<F: FormField> FormRecord<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: F, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }

    /// Builder form of [`FormRecord::set`].
    pub fn with(mut self, field: F, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_filled(&self, field: F) -> bool {
        !self.get(field).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// All fields in declaration order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        F::all().iter().map(move |&f| (f, self.get(f)))
    }
}

impl<F: FormField> Serialize for FormRecord<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(F::all().len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de, F: FormField> Deserialize<'de> for FormRecord<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, String>::deserialize(deserializer)?;
        let mut record = Self::default();
        for (key, value) in raw {
            let field = key.parse::<F>().map_err(D::Error::custom)?;
            record.set(field, value);
        }
        Ok(record)
    }
}
