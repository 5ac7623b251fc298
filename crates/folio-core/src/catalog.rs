use crate::error::{FolioError, Result};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Choice
// ---------------------------------------------------------------------------

/// One entry of a closed option table: the stored key, the label that ends
/// up in the message, and the hint shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const INTENT_OPTIONS: &[Choice] = &[
    Choice {
        value: "internship",
        label: "Internship",
        description: "Looking for an intern",
    },
    Choice {
        value: "fulltime",
        label: "Full-time",
        description: "Full-time position",
    },
    Choice {
        value: "freelance",
        label: "Freelance",
        description: "Project-based work",
    },
    Choice {
        value: "collaboration",
        label: "Collaboration",
        description: "Research or side project",
    },
];

pub const LOCATION_OPTIONS: &[Choice] = &[
    Choice {
        value: "india",
        label: "India",
        description: "Based in Chennai",
    },
    Choice {
        value: "thailand",
        label: "Thailand",
        description: "Thai national",
    },
    Choice {
        value: "remote",
        label: "Remote",
        description: "Work from anywhere",
    },
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

pub fn find(options: &'static [Choice], key: &str) -> Option<&'static Choice> {
    options.iter().find(|c| c.value == key)
}

pub fn is_known(options: &'static [Choice], key: &str) -> bool {
    find(options, key).is_some()
}

/// Label for `key`, or an empty string when the key is not in the table.
pub fn resolve_label(options: &'static [Choice], key: &str) -> &'static str {
    find(options, key).map(|c| c.label).unwrap_or("")
}

/// Strict variant of [`find`] for user-facing entry points (CLI flags).
pub fn parse_choice(kind: &str, options: &'static [Choice], key: &str) -> Result<&'static Choice> {
    find(options, key).ok_or_else(|| FolioError::UnknownOption {
        kind: kind.to_string(),
        value: key.to_string(),
        choices: options
            .iter()
            .map(|c| c.value)
            .collect::<Vec<_>>()
            .join(", "),
    })
}
