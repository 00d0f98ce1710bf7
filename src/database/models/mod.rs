pub mod about;
pub mod admin;
pub mod blog_post;
pub mod contact;
pub mod project;

pub use about::{About, AboutInput};
pub use admin::Admin;
pub use blog_post::{BlogPost, BlogPostInput, BlogPostPatch};
pub use contact::{Contact, ContactInput};
pub use project::{Project, ProjectInput, ProjectPatch};

use std::collections::BTreeMap;

/// Field name -> human readable problem, reported back to the client as `field_errors`.
pub type FieldErrors = BTreeMap<String, String>;

/// How a singleton upsert treats fields the caller left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFields {
    /// Keep the stored value (HTTP edits).
    Preserve,
    /// Reset to empty string (bulk import).
    Clear,
}

/// Record `field` as missing when `value` is `None`.
pub(crate) fn require<'a>(
    errors: &mut FieldErrors,
    field: &str,
    value: &'a Option<String>,
) -> &'a str {
    match value {
        Some(v) => v,
        None => {
            errors.insert(field.to_string(), "This field is required".to_string());
            ""
        }
    }
}

/// Resolve one singleton field against the stored value.
pub(crate) fn merge_field(input: &Option<String>, stored: Option<&str>, missing: MissingFields) -> String {
    match (input, missing) {
        (Some(v), _) => v.clone(),
        (None, MissingFields::Preserve) => stored.unwrap_or_default().to_string(),
        (None, MissingFields::Clear) => String::new(),
    }
}
