use am_core::{Role, UserIdentity};
use log::warn;
use serde_json::{Map, Value};

/// Tokens a browser-era writer could leave behind for "no user".
const EMPTY_TOKENS: [&str; 2] = ["undefined", "null"];

/// Fields stored as plain or optional strings.
const TEXT_FIELDS: [&str; 8] = [
    "name", "email", "bio", "avatar", "phone", "location", "website", "jobTitle",
];

/// What hydration found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// No record, or a record meaning "nobody"
    Empty,
    /// A valid record was loaded
    Restored { id: String },
    /// The record was unreadable or invalid and has been removed
    Discarded { reason: String },
}

impl Hydration {
    pub fn is_restored(&self) -> bool {
        matches!(self, Self::Restored { .. })
    }
}

#[derive(Debug)]
pub(crate) enum Record {
    Blank,
    Valid(UserIdentity),
    Corrupt(String),
}

/// Validate a raw stored record.
///
/// Accepted: a JSON object whose `id` is a non-blank string or a number
/// (numbers are kept in their decimal form). Other fields of the wrong type
/// are repaired rather than rejected: `skills` keeps only its strings (or
/// becomes empty), an unknown `role` falls back to the default, and
/// non-string text fields are dropped.
pub(crate) fn parse_record(raw: &str) -> Record {
    let trimmed = raw.trim();
    if trimmed.is_empty() || EMPTY_TOKENS.contains(&trimmed) {
        return Record::Blank;
    }

    let value: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(e) => return Record::Corrupt(format!("invalid JSON: {e}")),
    };

    let mut object = match value {
        Value::Object(object) => object,
        other => {
            return Record::Corrupt(format!("expected an object, found {}", kind_of(&other)));
        }
    };

    match object.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => {}
        Some(Value::Number(n)) => {
            let id = Value::String(n.to_string());
            object.insert(String::from("id"), id);
        }
        Some(Value::Null) | None => return Record::Corrupt(String::from("record has no id")),
        Some(other) => {
            return Record::Corrupt(format!("record id is {}", kind_of(other)));
        }
    }

    let repaired = repair_fields(&mut object);
    if !repaired.is_empty() {
        warn!("Session record had mistyped fields, reset: {}", repaired.join(", "));
    }

    match serde_json::from_value::<UserIdentity>(Value::Object(object)) {
        Ok(user) => Record::Valid(user),
        Err(e) => Record::Corrupt(format!("record does not describe a user: {e}")),
    }
}

/// Bring every known field to a type `UserIdentity` accepts. Returns the
/// names of the fields that had to change.
fn repair_fields(object: &mut Map<String, Value>) -> Vec<&'static str> {
    let mut repaired = Vec::new();

    for field in TEXT_FIELDS {
        if matches!(object.get(field), Some(value) if !value.is_string() && !value.is_null()) {
            object.remove(field);
            repaired.push(field);
        }
    }

    let unknown_role = match object.get("role") {
        None | Some(Value::Null) => false,
        Some(role) => serde_json::from_value::<Role>(role.clone()).is_err(),
    };
    if unknown_role {
        object.remove("role");
        repaired.push("role");
    }

    match object.get_mut("skills") {
        None | Some(Value::Null) => {}
        Some(Value::Array(skills)) => {
            let before = skills.len();
            skills.retain(Value::is_string);
            if skills.len() != before {
                repaired.push("skills");
            }
        }
        Some(other) => {
            *other = Value::Array(Vec::new());
            repaired.push("skills");
        }
    }

    repaired
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(s) if s.trim().is_empty() => "blank",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
