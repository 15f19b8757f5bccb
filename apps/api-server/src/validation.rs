//! Declarative request validation.
//!
//! Each route carries a rule set mapping field names to an ordered list of
//! predicate + message pairs. A single evaluator walks the set and collects
//! every violation in field order; any violation short-circuits the handler
//! with a 400 before its logic runs. Optional fields skip their checks when
//! absent.

use quill_shared::FieldError;

use crate::middleware::error::{AppError, AppResult};

/// A single predicate with its violation message.
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

/// Constraints for one body field.
pub struct FieldRules {
    pub field: &'static str,
    pub required: bool,
    pub rules: &'static [Rule],
}

fn min_len_3(value: &str) -> bool {
    value.trim().chars().count() >= 3
}

fn min_len_6(value: &str) -> bool {
    value.chars().count() >= 6
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn is_alpha(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

pub static SIGNUP_RULES: &[FieldRules] = &[
    FieldRules {
        field: "name",
        required: true,
        rules: &[Rule {
            check: min_len_3,
            message: "Name is required",
        }],
    },
    FieldRules {
        field: "email",
        required: true,
        rules: &[Rule {
            check: is_email,
            message: "Invalid email",
        }],
    },
    FieldRules {
        field: "password",
        required: true,
        rules: &[Rule {
            check: min_len_6,
            message: "Password must be at least 6 characters long",
        }],
    },
];

pub static LOGIN_RULES: &[FieldRules] = &[
    FieldRules {
        field: "email",
        required: true,
        rules: &[Rule {
            check: is_email,
            message: "Invalid email",
        }],
    },
    FieldRules {
        field: "password",
        required: true,
        rules: &[Rule {
            check: min_len_6,
            message: "Password must be at least 6 characters long",
        }],
    },
];

pub static PROFILE_UPDATE_RULES: &[FieldRules] = &[
    FieldRules {
        field: "name",
        required: false,
        rules: &[Rule {
            check: is_alpha,
            message: "Name must contain only letters",
        }],
    },
    FieldRules {
        field: "password",
        required: false,
        rules: &[Rule {
            check: min_len_6,
            message: "Password must be at least 6 characters long",
        }],
    },
];

pub static POST_RULES: &[FieldRules] = &[
    FieldRules {
        field: "title",
        required: false,
        rules: &[Rule {
            check: min_len_3,
            message: "Title must be at least 3 characters long",
        }],
    },
    FieldRules {
        field: "content",
        required: false,
        rules: &[Rule {
            check: min_len_3,
            message: "Content must be at least 3 characters long",
        }],
    },
];

/// Evaluate a rule set against extracted field values.
///
/// `values` pairs each field name with its submitted value; `None` means
/// the field was absent from the body.
pub fn validate(rule_set: &[FieldRules], values: &[(&str, Option<&str>)]) -> AppResult<()> {
    let mut errors = Vec::new();

    for field_rules in rule_set {
        let value = values
            .iter()
            .find(|(name, _)| *name == field_rules.field)
            .and_then(|(_, value)| *value);

        match value {
            None => {
                // An absent required field fails its first constraint.
                if field_rules.required {
                    if let Some(rule) = field_rules.rules.first() {
                        errors.push(FieldError::new(field_rules.field, rule.message));
                    }
                }
            }
            Some(value) => {
                for rule in field_rules.rules {
                    if !(rule.check)(value) {
                        errors.push(FieldError::new(field_rules.field, rule.message));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
