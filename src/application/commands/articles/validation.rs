// src/application/commands/articles/validation.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::value_objects::{TAG_MIN_CHARS, normalize_tag},
};
use validator::{Validate, ValidationError, ValidationErrors};

pub(super) fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trims a field and turns an empty result into `None`.
pub(super) fn trim_optional(value: &mut Option<String>) {
    if let Some(inner) = value.as_mut() {
        trim_in_place(inner);
    }
    if value.as_deref().is_some_and(str::is_empty) {
        *value = None;
    }
}

pub(super) fn normalize_tags(tags: &mut [String]) {
    for tag in tags.iter_mut() {
        *tag = normalize_tag(tag);
    }
}

fn tag_error(tags: &[String]) -> Option<ValidationError> {
    if tags.iter().any(|t| t.chars().count() < TAG_MIN_CHARS) {
        return Some(
            ValidationError::new("length")
                .with_message("each tag must be at least 2 characters long".into()),
        );
    }
    if tags.iter().any(|t| *t != t.to_lowercase()) {
        return Some(
            ValidationError::new("lowercase").with_message("each tag must be lower case".into()),
        );
    }
    None
}

/// Runs the derived field rules plus the tag rules and folds every failure
/// into one message.
pub(super) fn check_payload<T: Validate>(payload: &T, tags: &[String]) -> ApplicationResult<()> {
    let mut errors = payload.validate().err().unwrap_or_else(ValidationErrors::new);
    if let Some(err) = tag_error(tags) {
        errors.add("tags", err);
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::validation(render(&errors)))
    }
}

fn render(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reason = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map_or_else(|| "is invalid".to_string(), ToString::to_string);
            format!("{field}: {reason}")
        })
        .collect();
    parts.sort();
    format!("{}.", parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_optional_drops_blank_values() {
        let mut blank = Some("   ".to_string());
        trim_optional(&mut blank);
        assert_eq!(blank, None);

        let mut padded = Some("  hello ".to_string());
        trim_optional(&mut padded);
        assert_eq!(padded.as_deref(), Some("hello"));
    }

    #[test]
    fn tags_are_trimmed_and_lowercased_in_place() {
        let mut tags = vec![" Rust".to_string(), "WEB ".to_string()];
        normalize_tags(&mut tags);
        assert_eq!(tags, vec!["rust", "web"]);
    }

    #[test]
    fn short_tag_is_reported() {
        let err = tag_error(&["a".into()]).unwrap();
        assert_eq!(err.code, "length");
        assert!(tag_error(&["ab".into()]).is_none());
    }

    #[test]
    fn uppercase_tag_is_reported() {
        let err = tag_error(&["Rust".into()]).unwrap();
        assert_eq!(err.code, "lowercase");
    }
}
