//! Feedback form widget.

/// Whether the form is collecting input or showing the thank-you state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitted,
}

/// A validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    Empty(&'static str),

    #[error("email address looks invalid")]
    InvalidEmail,
}

/// The feedback form.
///
/// Validation is entirely local: a failed submit reports every offending
/// field and leaves the input untouched for correction; a successful submit
/// clears the fields and flips to the submitted state.
#[derive(Debug, Default)]
pub struct FeedbackForm {
    name: String,
    email: String,
    message: String,
    state: FormState,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Attempt submission. All required fields must be non-empty and the
    /// email must at least look like one.
    pub fn submit(&mut self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FormError::Empty("name"));
        }
        if self.email.trim().is_empty() {
            errors.push(FormError::Empty("email"));
        } else if !looks_like_email(self.email.trim()) {
            errors.push(FormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(FormError::Empty("message"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.state = FormState::Submitted;

        Ok(())
    }

    /// "Send another" button on the thank-you state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Something before and after a single `@`, with a dot in the domain.
fn looks_like_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.set_name("Ada");
        form.set_email("ada@example.com");
        form.set_message("Your carousel hypnotized me.");
        form
    }

    #[test]
    fn rejects_empty_message() {
        let mut form = filled_form();
        form.set_message("");

        let errors = form.submit().unwrap_err();

        assert_eq!(errors, vec![FormError::Empty("message")]);
        assert_eq!(form.state(), FormState::Editing);
        // Other fields survive for correction
        assert_eq!(form.name(), "Ada");
    }

    #[test]
    fn reports_every_missing_field() {
        let mut form = FeedbackForm::new();

        let errors = form.submit().unwrap_err();

        assert_eq!(
            errors,
            vec![
                FormError::Empty("name"),
                FormError::Empty("email"),
                FormError::Empty("message"),
            ]
        );
    }

    #[test]
    fn rejects_implausible_email() {
        let mut form = filled_form();
        form.set_email("not-an-email");

        let errors = form.submit().unwrap_err();

        assert_eq!(errors, vec![FormError::InvalidEmail]);
    }

    #[test]
    fn accepts_and_clears_to_success_state() {
        let mut form = filled_form();

        form.submit().unwrap();

        assert_eq!(form.state(), FormState::Submitted);
        assert!(form.name().is_empty());
        assert!(form.email().is_empty());
        assert!(form.message().is_empty());
    }

    #[test]
    fn reset_returns_to_editing() {
        let mut form = filled_form();
        form.submit().unwrap();

        form.reset();

        assert_eq!(form.state(), FormState::Editing);
    }
}
