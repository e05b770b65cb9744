//! Add-user wizard: step machine, form record, and per-step validation.
//!
//! The wizard is a strictly linear three-step flow. Steps advance only when
//! the current step validates, retreat only through an explicit back action,
//! and never wrap past either end.

use std::sync::LazyLock;

use regex::Regex;

/// One `@` with non-whitespace on both sides and a dot followed by
/// non-whitespace after it. Matched anywhere in the input, not anchored.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Wizard step, in flow order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    /// Name and email entry
    #[default]
    BasicInfo,
    /// Street, city, and ZIP entry
    Address,
    /// Read-only summary before submission
    Review,
}

impl WizardStep {
    /// Step title shown in the progress header.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Information",
            WizardStep::Address => "Address Details",
            WizardStep::Review => "Review & Confirm",
        }
    }

    /// Step number (1-indexed).
    pub fn number(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Address => 2,
            WizardStep::Review => 3,
        }
    }

    /// Total number of steps.
    pub fn total_steps() -> usize {
        3
    }

    pub fn is_first(&self) -> bool {
        matches!(self, WizardStep::BasicInfo)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, WizardStep::Review)
    }

    /// Next step, or `None` at the end of the flow.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::Address),
            WizardStep::Address => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// Previous step, or `None` at the start of the flow.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::Address => Some(WizardStep::BasicInfo),
            WizardStep::Review => Some(WizardStep::Address),
        }
    }

    /// All steps in flow order.
    pub fn all_steps() -> [WizardStep; 3] {
        [WizardStep::BasicInfo, WizardStep::Address, WizardStep::Review]
    }

    /// Fields edited on this step, in focus order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            WizardStep::BasicInfo => &[Field::Name, Field::Email],
            WizardStep::Address => &[Field::Street, Field::City, Field::Zip],
            WizardStep::Review => &[],
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// The closed set of form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Street,
    City,
    Zip,
}

impl Field {
    /// Input label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Street => "Street",
            Field::City => "City",
            Field::Zip => "ZIP Code",
        }
    }

    /// Placeholder hint shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john.doe@example.com",
            Field::Street => "123 Main St",
            Field::City => "New York",
            Field::Zip => "10001",
        }
    }
}

/// The form record being assembled by the wizard. All fields start empty and
/// are mutated one at a time by user input; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub zip: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Street => &self.street,
            Field::City => &self.city,
            Field::Zip => &self.zip,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Street => &mut self.street,
            Field::City => &mut self.city,
            Field::Zip => &mut self.zip,
        }
    }
}

/// Per-field validation messages. Same shape as [`FormData`]; an empty string
/// means the field is valid. The field set is closed, so this is a fixed
/// record rather than a keyed map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub street: String,
    pub city: String,
    pub zip: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Street => &self.street,
            Field::City => &self.city,
            Field::Zip => &self.zip,
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        *self.slot(field) = message.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.slot(field).clear();
    }

    pub fn is_clear(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.street.is_empty()
            && self.city.is_empty()
            && self.zip.is_empty()
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Street => &mut self.street,
            Field::City => &mut self.city,
            Field::Zip => &mut self.zip,
        }
    }
}

/// Outcome of validating one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepValidation {
    pub valid: bool,
    pub errors: FieldErrors,
}

/// Whether `email` looks like an email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates the fields belonging to `step` against `form`.
///
/// Pure function of the form data. Errors are recomputed wholesale: fields of
/// the step that pass come back empty, fields of other steps are untouched by
/// the caller's contract (the returned record only ever mentions this step's
/// fields). The review step has nothing to check and is always valid.
pub fn validate_step(step: WizardStep, form: &FormData) -> StepValidation {
    let mut errors = FieldErrors::default();
    let mut valid = true;

    match step {
        WizardStep::BasicInfo => {
            if form.name.trim().is_empty() {
                errors.set(Field::Name, "Name is required");
                valid = false;
            }
            if form.email.trim().is_empty() {
                errors.set(Field::Email, "Email is required");
                valid = false;
            } else if !is_valid_email(&form.email) {
                errors.set(Field::Email, "Please enter a valid email address");
                valid = false;
            }
        }
        WizardStep::Address => {
            if form.street.trim().is_empty() {
                errors.set(Field::Street, "Street is required");
                valid = false;
            }
            if form.city.trim().is_empty() {
                errors.set(Field::City, "City is required");
                valid = false;
            }
            if form.zip.trim().is_empty() {
                errors.set(Field::Zip, "ZIP code is required");
                valid = false;
            }
        }
        WizardStep::Review => {}
    }

    StepValidation { valid, errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order_is_total() {
        assert!(WizardStep::BasicInfo < WizardStep::Address);
        assert!(WizardStep::Address < WizardStep::Review);
        assert_eq!(WizardStep::default(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_step_navigation() {
        assert!(WizardStep::BasicInfo.is_first());
        assert!(WizardStep::Review.is_last());
        assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::Address));
        assert_eq!(WizardStep::Address.next(), Some(WizardStep::Review));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::BasicInfo.previous(), None);
        assert_eq!(WizardStep::Review.previous(), Some(WizardStep::Address));
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::BasicInfo.number(), 1);
        assert_eq!(WizardStep::Review.number(), 3);
        assert_eq!(WizardStep::total_steps(), 3);
        assert_eq!(WizardStep::all_steps().len(), 3);
    }

    #[test]
    fn test_step_fields() {
        assert_eq!(WizardStep::BasicInfo.fields(), &[Field::Name, Field::Email]);
        assert_eq!(
            WizardStep::Address.fields(),
            &[Field::Street, Field::City, Field::Zip]
        );
        assert!(WizardStep::Review.fields().is_empty());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jo@x.co"));
        assert!(is_valid_email("john.doe@example.com"));
        // Unanchored, so surrounding text is tolerated
        assert!(is_valid_email("say jo@x.co today"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@x.co"));
        assert!(!is_valid_email("a @b.co"));
    }

    #[test]
    fn test_validate_basic_info_empty_name() {
        let form = FormData {
            email: "jo@x.co".to_string(),
            ..FormData::default()
        };
        let result = validate_step(WizardStep::BasicInfo, &form);
        assert!(!result.valid);
        assert_eq!(result.errors.name, "Name is required");
        assert!(result.errors.email.is_empty());
    }

    #[test]
    fn test_validate_basic_info_whitespace_name() {
        let form = FormData {
            name: "   ".to_string(),
            email: "jo@x.co".to_string(),
            ..FormData::default()
        };
        let result = validate_step(WizardStep::BasicInfo, &form);
        assert!(!result.valid);
        assert_eq!(result.errors.name, "Name is required");
    }

    #[test]
    fn test_validate_basic_info_missing_email() {
        let form = FormData {
            name: "Jo".to_string(),
            ..FormData::default()
        };
        let result = validate_step(WizardStep::BasicInfo, &form);
        assert!(!result.valid);
        assert_eq!(result.errors.email, "Email is required");
    }

    #[test]
    fn test_validate_basic_info_malformed_email() {
        let form = FormData {
            name: "Jo".to_string(),
            email: "bad".to_string(),
            ..FormData::default()
        };
        let result = validate_step(WizardStep::BasicInfo, &form);
        assert!(!result.valid);
        assert_eq!(result.errors.email, "Please enter a valid email address");
        assert!(result.errors.name.is_empty());
    }

    #[test]
    fn test_validate_basic_info_valid() {
        let form = FormData {
            name: "Jo".to_string(),
            email: "jo@x.co".to_string(),
            ..FormData::default()
        };
        let result = validate_step(WizardStep::BasicInfo, &form);
        assert!(result.valid);
        assert!(result.errors.is_clear());
    }

    #[test]
    fn test_validate_address_all_missing() {
        let result = validate_step(WizardStep::Address, &FormData::default());
        assert!(!result.valid);
        assert_eq!(result.errors.street, "Street is required");
        assert_eq!(result.errors.city, "City is required");
        assert_eq!(result.errors.zip, "ZIP code is required");
    }

    #[test]
    fn test_validate_address_valid() {
        let form = FormData {
            street: "123 Main St".to_string(),
            city: "New York".to_string(),
            zip: "10001".to_string(),
            ..FormData::default()
        };
        let result = validate_step(WizardStep::Address, &form);
        assert!(result.valid);
        assert!(result.errors.is_clear());
    }

    #[test]
    fn test_validate_review_always_valid() {
        let result = validate_step(WizardStep::Review, &FormData::default());
        assert!(result.valid);
        assert!(result.errors.is_clear());
    }

    #[test]
    fn test_field_errors_set_and_clear() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_clear());

        errors.set(Field::Zip, "ZIP code is required");
        assert_eq!(errors.get(Field::Zip), "ZIP code is required");
        assert!(!errors.is_clear());

        errors.clear(Field::Zip);
        assert!(errors.is_clear());
    }

    #[test]
    fn test_form_data_field_access() {
        let mut form = FormData::default();
        form.get_mut(Field::City).push_str("Oslo");
        assert_eq!(form.get(Field::City), "Oslo");
        assert_eq!(form.city, "Oslo");
    }
}
