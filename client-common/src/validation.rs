//! Credential validation and password-strength scoring.
//!
//! Everything here is a pure function over its input string(s): no I/O, no
//! shared state, safe to call from anywhere, any number of times. Callers
//! decide what to do with the returned values; nothing in this module talks
//! to the user or the network.

use common::api::{FieldError, LoginRequest, SignupRequest};
use serde::Serialize;
use strum::Display;

/// The special characters accepted by the password rules. Fixed set, shared
/// by the pass/fail gate and the cumulative scorer.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 8;
const PASSWORD_LONG: usize = 12;

/// Outcome of a single field check. `message` is always non-empty: a reason
/// on failure, the canonical "valid" phrase on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldResult {
    pub is_valid: bool,
    pub message: String,
}

impl FieldResult {
    fn valid(message: &str) -> Self {
        Self { is_valid: true, message: message.to_owned() }
    }

    fn invalid(message: &str) -> Self {
        Self { is_valid: false, message: message.to_owned() }
    }
}

/// Label attached to the pass/fail password gate. On rejection it reflects
/// the first rule that failed, not an overall measure; use
/// [`password_strength`] for the continuous score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordResult {
    pub is_valid: bool,
    pub message: String,
    pub strength: PasswordStrength,
}

impl PasswordResult {
    fn invalid(message: &str, strength: PasswordStrength) -> Self {
        Self { is_valid: false, message: message.to_owned(), strength }
    }
}

/// Band of the 0..=100 cumulative score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    fn from_score(score: u8) -> Self {
        match score {
            0..=39 => StrengthLevel::Weak,
            40..=59 => StrengthLevel::Fair,
            60..=79 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    /// Indicator color for a strength meter.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "#ff4444",
            StrengthLevel::Fair => "#ff9944",
            StrengthLevel::Good => "#44aa44",
            StrengthLevel::Strong => "#00cc00",
        }
    }
}

/// Continuous strength indicator: every check contributes to the score and
/// every failed check appends one remediation hint, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub strength: StrengthLevel,
    pub color: &'static str,
    pub percentage: u8,
    pub feedback: Vec<&'static str>,
}

/// Aggregated outcome of a whole form. `is_valid` holds iff `errors` is
/// empty; errors keep the fixed field order they were checked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }
}

/// Checks a username: required, 3-20 characters, `[A-Za-z0-9_]` only.
/// Rules run in order and the first failure wins.
pub fn validate_username(username: &str) -> FieldResult {
    if username.trim().is_empty() {
        return FieldResult::invalid("Username is required");
    }

    let len = username.chars().count();
    if len < USERNAME_MIN {
        return FieldResult::invalid("Username must be at least 3 characters long");
    }
    if len > USERNAME_MAX {
        return FieldResult::invalid("Username must not exceed 20 characters");
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return FieldResult::invalid("Username can only contain letters, numbers, and underscores");
    }

    FieldResult::valid("Valid username")
}

/// Checks an email syntactically: something@something.something, no
/// whitespace, exactly one `@`. Deliberately permissive, nowhere near
/// RFC 5322; the server remains authoritative.
pub fn validate_email(email: &str) -> FieldResult {
    if email.trim().is_empty() {
        return FieldResult::invalid("Email is required");
    }

    if is_plausible_email(email) {
        FieldResult::valid("Valid email")
    } else {
        FieldResult::invalid("Please enter a valid email address")
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false, // zero or several '@'
    };
    if local.is_empty() {
        return false;
    }

    // the domain needs a dot with at least one character on each side
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// Pass/fail password gate used at credential creation. Rules run in order
/// and the first failure short-circuits, so the attached strength label
/// describes that failure rather than the password as a whole.
pub fn validate_password(password: &str) -> PasswordResult {
    if password.is_empty() {
        return PasswordResult::invalid("Password is required", PasswordStrength::None);
    }

    if password.chars().count() < PASSWORD_MIN {
        return PasswordResult::invalid(
            "Password must be at least 8 characters long",
            PasswordStrength::Weak,
        );
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return PasswordResult::invalid(
            "Password must contain at least one uppercase letter",
            PasswordStrength::Weak,
        );
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return PasswordResult::invalid(
            "Password must contain at least one lowercase letter",
            PasswordStrength::Weak,
        );
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return PasswordResult::invalid(
            "Password must contain at least one number",
            PasswordStrength::Weak,
        );
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return PasswordResult::invalid(
            "Password must contain at least one special character (!@#$%^&*...)",
            PasswordStrength::Medium,
        );
    }

    let strength = if password.chars().count() >= PASSWORD_LONG {
        PasswordStrength::VeryStrong
    } else {
        PasswordStrength::Strong
    };
    PasswordResult {
        is_valid: true,
        message: "Password meets all requirements".to_owned(),
        strength,
    }
}

/// Cumulative 0..=100 strength score. Unlike [`validate_password`] this
/// never short-circuits: every check runs, contributes its points when
/// satisfied and a remediation hint when not.
///
/// Length gives up to 40 (thresholds 8, 12, 16); each character class
/// (lowercase, uppercase, digit, special) gives 15.
pub fn password_strength(password: &str) -> StrengthReport {
    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    let len = password.chars().count();
    if len >= 8 {
        score += 20;
    }
    if len >= 12 {
        score += 10;
    }
    if len >= 16 {
        score += 10;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15;
    } else {
        feedback.push("Add lowercase letters");
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    } else {
        feedback.push("Add uppercase letters");
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    } else {
        feedback.push("Add numbers");
    }
    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        score += 15;
    } else {
        feedback.push("Add special characters");
    }

    let strength = StrengthLevel::from_score(score);
    StrengthReport { strength, color: strength.color(), percentage: score, feedback }
}

/// Validates a whole registration form. Every field is checked (no
/// cross-field short-circuit) so one call reports all violations at once,
/// in field order: name, email, password, language.
pub fn validate_registration(data: &SignupRequest) -> FormErrors {
    let mut errors = Vec::new();

    let name = validate_username(&data.name);
    if !name.is_valid {
        errors.push(FieldError { field: "name".to_owned(), message: name.message });
    }

    let email = validate_email(&data.email);
    if !email.is_valid {
        errors.push(FieldError { field: "email".to_owned(), message: email.message });
    }

    let password = validate_password(&data.password);
    if !password.is_valid {
        errors.push(FieldError { field: "password".to_owned(), message: password.message });
    }

    if data.language.trim().is_empty() {
        errors.push(FieldError {
            field: "language".to_owned(),
            message: "Please select a language".to_owned(),
        });
    }

    if !errors.is_empty() {
        tracing::debug!(fields = errors.len(), "registration form failed validation");
    }
    FormErrors::from_errors(errors)
}

/// Validates a login form: email format plus password presence. Strength
/// rules only apply when credentials are created, not when they are used.
pub fn validate_login(data: &LoginRequest) -> FormErrors {
    let mut errors = Vec::new();

    let email = validate_email(&data.email);
    if !email.is_valid {
        errors.push(FieldError { field: "email".to_owned(), message: email.message });
    }

    if data.password.is_empty() {
        errors.push(FieldError {
            field: "password".to_owned(),
            message: "Password is required".to_owned(),
        });
    }

    if !errors.is_empty() {
        tracing::debug!(fields = errors.len(), "login form failed validation");
    }
    FormErrors::from_errors(errors)
}
