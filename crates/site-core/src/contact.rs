use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
}

/// Transient notification shown to the user (title + description,
/// auto-dismissed by the frontend).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// The contact form's entered values.
///
/// Submission performs no transport: the payload is logged, a success notice
/// is returned and the fields are cleared. A validation failure preserves the
/// entered values so the user can correct and retry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingField("message"));
        }
        Ok(())
    }

    pub fn submit(&mut self) -> Result<Notice, FormError> {
        self.validate()?;
        log::info!(
            "[form] message from {} <{}> ({} chars)",
            self.name,
            self.email,
            self.message.len()
        );
        *self = Self::default();
        Ok(Notice {
            title: "Message sent!".to_owned(),
            description: "Thanks for reaching out. I'll get back to you soon.".to_owned(),
        })
    }
}
