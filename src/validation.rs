//! Field constraints for untrusted write payloads.
//!
//! Each record kind has a static table of [`FieldSpec`]s. A payload is checked
//! against the table, unknown keys are dropped, and the surviving object is
//! converted into the kind's insert shape from [`crate::schema`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::{
    ExperienceIcon, ExperienceKind, InsertContactMessage, InsertExperience, InsertPublication,
    InsertResearchProject, InsertUser, ProjectStatus, PublicationBadge, CONTACT_TOPIC_VALUES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    TooSmall,
    TooBig,
    InvalidString,
    InvalidEnumValue,
}

/// One rejected field. `path` is empty when the payload itself is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub path: Vec<String>,
    pub code: IssueCode,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &str, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.to_string()],
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {} field(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    fn root(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue {
                path: Vec::new(),
                code,
                message: message.into(),
            }],
        }
    }

    /// Names of the offending fields, in table order.
    pub fn fields(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter_map(|i| i.path.first().map(String::as_str))
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Integer { min: Option<i64>, max: Option<i64> },
    Boolean,
    TextList,
}

/// Refinement applied to a text field once its type is correct.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    MinLength { min: usize, message: &'static str },
    Email { message: &'static str },
    OneOf {
        values: &'static [&'static str],
        message: Option<&'static str>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub constraints: &'static [Constraint],
}

impl FieldSpec {
    const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: true,
            constraints: &[],
        }
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    const fn with(mut self, constraints: &'static [Constraint]) -> Self {
        self.constraints = constraints;
        self
    }

    const fn of(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            constraints: &[],
        }
    }
}

const NON_NEGATIVE_U32: FieldKind = FieldKind::Integer {
    min: Some(0),
    max: Some(u32::MAX as i64),
};

const YEAR: FieldKind = FieldKind::Integer {
    min: Some(i32::MIN as i64),
    max: Some(i32::MAX as i64),
};

const NOT_EMPTY: &[Constraint] = &[Constraint::MinLength {
    min: 1,
    message: "String must contain at least 1 character(s)",
}];

pub const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("username").with(NOT_EMPTY),
    FieldSpec::text("password").with(NOT_EMPTY),
];

pub const RESEARCH_PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("description"),
    FieldSpec::text("status").with(&[Constraint::OneOf {
        values: ProjectStatus::VALUES,
        message: None,
    }]),
    FieldSpec::text("period"),
    FieldSpec::text("imageUrl"),
    FieldSpec::of("tags", FieldKind::TextList),
    FieldSpec::text("link").optional(),
];

pub const PUBLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("journal"),
    FieldSpec::of("year", YEAR),
    FieldSpec::text("abstract"),
    FieldSpec::of("citations", NON_NEGATIVE_U32),
    FieldSpec::of("views", NON_NEGATIVE_U32),
    FieldSpec::of("featured", FieldKind::Boolean).optional(),
    FieldSpec::text("badge").optional().with(&[Constraint::OneOf {
        values: PublicationBadge::VALUES,
        message: None,
    }]),
    FieldSpec::text("pdfUrl").optional(),
    FieldSpec::text("externalUrl").optional(),
];

pub const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title"),
    FieldSpec::text("organization"),
    FieldSpec::text("period"),
    FieldSpec::text("description"),
    FieldSpec::text("type").with(&[Constraint::OneOf {
        values: ExperienceKind::VALUES,
        message: None,
    }]),
    FieldSpec::of("current", FieldKind::Boolean).optional(),
    FieldSpec::text("icon").with(&[Constraint::OneOf {
        values: ExperienceIcon::VALUES,
        message: None,
    }]),
];

/// Contact form rules. Stricter than the stored shape requires.
pub const CONTACT_MESSAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name").with(&[Constraint::MinLength {
        min: 2,
        message: "Name must be at least 2 characters",
    }]),
    FieldSpec::text("email").with(&[Constraint::Email {
        message: "Please enter a valid email address",
    }]),
    FieldSpec::text("subject").with(&[
        Constraint::MinLength {
            min: 1,
            message: "Please select a subject",
        },
        Constraint::OneOf {
            values: CONTACT_TOPIC_VALUES,
            message: None,
        },
    ]),
    FieldSpec::text("message").with(&[Constraint::MinLength {
        min: 10,
        message: "Message must be at least 10 characters",
    }]),
];

pub fn validate_user(input: &Value) -> Result<InsertUser, ValidationError> {
    validate_into(input, USER_FIELDS)
}

pub fn validate_research_project(input: &Value) -> Result<InsertResearchProject, ValidationError> {
    validate_into(input, RESEARCH_PROJECT_FIELDS)
}

pub fn validate_publication(input: &Value) -> Result<InsertPublication, ValidationError> {
    validate_into(input, PUBLICATION_FIELDS)
}

pub fn validate_experience(input: &Value) -> Result<InsertExperience, ValidationError> {
    validate_into(input, EXPERIENCE_FIELDS)
}

pub fn validate_contact_message(input: &Value) -> Result<InsertContactMessage, ValidationError> {
    validate_into(input, CONTACT_MESSAGE_FIELDS)
}

fn validate_into<T: DeserializeOwned>(
    input: &Value,
    specs: &[FieldSpec],
) -> Result<T, ValidationError> {
    let normalized = validate_object(input, specs)?;
    serde_json::from_value(Value::Object(normalized))
        .map_err(|e| ValidationError::root(IssueCode::InvalidType, e.to_string()))
}

/// Check `input` against `specs` and return only the known fields.
/// Absent or null optional fields are left out.
pub fn validate_object(input: &Value, specs: &[FieldSpec]) -> Result<Map<String, Value>, ValidationError> {
    let Some(obj) = input.as_object() else {
        return Err(ValidationError::root(
            IssueCode::InvalidType,
            format!("Expected object, received {}", type_name(input)),
        ));
    };

    let mut out = Map::new();
    let mut issues = Vec::new();
    for spec in specs {
        match obj.get(spec.name) {
            None | Some(Value::Null) if !spec.required => {}
            None => issues.push(FieldIssue::new(spec.name, IssueCode::InvalidType, "Required")),
            Some(value) => match check_field(spec, value) {
                Ok(()) => {
                    out.insert(spec.name.to_string(), value.clone());
                }
                Err(issue) => issues.push(issue),
            },
        }
    }

    if issues.is_empty() {
        Ok(out)
    } else {
        Err(ValidationError { issues })
    }
}

fn check_field(spec: &FieldSpec, value: &Value) -> Result<(), FieldIssue> {
    let mismatch = |expected: &str| {
        FieldIssue::new(
            spec.name,
            IssueCode::InvalidType,
            format!("Expected {expected}, received {}", type_name(value)),
        )
    };

    match spec.kind {
        FieldKind::Text => {
            let s = value.as_str().ok_or_else(|| mismatch("string"))?;
            spec.constraints
                .iter()
                .try_for_each(|c| check_constraint(spec.name, c, s))
        }
        FieldKind::Boolean => value.as_bool().map(|_| ()).ok_or_else(|| mismatch("boolean")),
        FieldKind::TextList => {
            let items = value.as_array().ok_or_else(|| mismatch("array"))?;
            match items.iter().position(|v| !v.is_string()) {
                None => Ok(()),
                Some(idx) => Err(FieldIssue {
                    path: vec![spec.name.to_string(), idx.to_string()],
                    code: IssueCode::InvalidType,
                    message: format!("Expected string, received {}", type_name(&items[idx])),
                }),
            }
        }
        FieldKind::Integer { min, max } => {
            let n = match value {
                Value::Number(n) => match n.as_i64() {
                    Some(n) => n,
                    None if n.is_u64() => i64::MAX,
                    None => {
                        return Err(FieldIssue::new(
                            spec.name,
                            IssueCode::InvalidType,
                            "Expected integer, received float",
                        ))
                    }
                },
                _ => return Err(mismatch("number")),
            };
            if let Some(min) = min.filter(|m| n < *m) {
                return Err(FieldIssue::new(
                    spec.name,
                    IssueCode::TooSmall,
                    format!("Number must be greater than or equal to {min}"),
                ));
            }
            if let Some(max) = max.filter(|m| n > *m) {
                return Err(FieldIssue::new(
                    spec.name,
                    IssueCode::TooBig,
                    format!("Number must be less than or equal to {max}"),
                ));
            }
            Ok(())
        }
    }
}

fn check_constraint(field: &str, constraint: &Constraint, s: &str) -> Result<(), FieldIssue> {
    match *constraint {
        Constraint::MinLength { min, message } if s.chars().count() < min => {
            Err(FieldIssue::new(field, IssueCode::TooSmall, message))
        }
        Constraint::Email { message } if !is_valid_email(s) => {
            Err(FieldIssue::new(field, IssueCode::InvalidString, message))
        }
        Constraint::OneOf { values, message } if !values.contains(&s) => {
            let message = match message {
                Some(m) => m.to_string(),
                None => format!(
                    "Invalid enum value. Expected {}, received '{s}'",
                    values
                        .iter()
                        .map(|v| format!("'{v}'"))
                        .collect::<Vec<_>>()
                        .join(" | ")
                ),
            };
            Err(FieldIssue::new(field, IssueCode::InvalidEnumValue, message))
        }
        _ => Ok(()),
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
