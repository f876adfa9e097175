// Host-side tests for the contact form model.

use site_core::{ContactForm, FormError};

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello there".to_owned(),
    }
}

#[test]
fn complete_form_submits_and_clears() {
    let mut form = filled_form();
    let notice = form.submit().expect("complete form should submit");
    assert_eq!(notice.title, "Message sent!");
    assert!(!notice.description.is_empty());
    assert_eq!(form, ContactForm::default());
}

#[test]
fn missing_field_preserves_entered_values() {
    let mut form = filled_form();
    form.email.clear();
    let err = form.submit().unwrap_err();
    assert_eq!(err, FormError::MissingField("email"));
    // Entered values survive the failed attempt.
    assert_eq!(form.name, "Ada");
    assert_eq!(form.message, "Hello there");
}

#[test]
fn whitespace_only_counts_as_missing() {
    let mut form = filled_form();
    form.message = "   \n\t".to_owned();
    assert_eq!(form.submit().unwrap_err(), FormError::MissingField("message"));
}

#[test]
fn validation_reports_first_missing_field() {
    let form = ContactForm::default();
    assert_eq!(form.validate().unwrap_err(), FormError::MissingField("name"));
}
