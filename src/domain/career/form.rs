// SPDX-License-Identifier: MPL-2.0
//! Application form model and validation.

use std::fmt;
use std::path::{Path, PathBuf};

/// The only open position.
pub const INTERNSHIP_POSITION: &str = "Student Internship Application";

/// Accepted resume file extensions (lowercase, without dot).
pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Minimum digit count of a phone number.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Maximum digit count of a phone number.
pub const MAX_PHONE_DIGITS: usize = 15;

// =============================================================================
// ValidationError
// =============================================================================

/// Reasons a form cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    PhoneRequired,
    PhoneInvalid,
    ResumeExtension,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::NameRequired => "error-validation-name-required",
            ValidationError::EmailRequired => "error-validation-email-required",
            ValidationError::EmailInvalid => "error-validation-email-invalid",
            ValidationError::PhoneRequired => "error-validation-phone-required",
            ValidationError::PhoneInvalid => "error-validation-phone-invalid",
            ValidationError::ResumeExtension => "error-validation-resume-extension",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameRequired => write!(f, "Full name is required"),
            ValidationError::EmailRequired => write!(f, "Email is required"),
            ValidationError::EmailInvalid => write!(f, "Email address is not valid"),
            ValidationError::PhoneRequired => write!(f, "Phone is required"),
            ValidationError::PhoneInvalid => write!(
                f,
                "Phone must contain {MIN_PHONE_DIGITS} to {MAX_PHONE_DIGITS} digits"
            ),
            ValidationError::ResumeExtension => write!(f, "Resume must be a PDF, DOC or DOCX file"),
        }
    }
}

impl std::error::Error for ValidationError {}

// =============================================================================
// ResumeFile
// =============================================================================

/// A resume chosen from disk, with an accepted extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    path: PathBuf,
}

impl ResumeFile {
    /// Wraps `path` if its extension is one of [`RESUME_EXTENSIONS`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ResumeExtension`] otherwise.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ValidationError> {
        let path = path.into();
        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .is_some_and(|ext| RESUME_EXTENSIONS.contains(&ext.as_str()));
        if accepted {
            Ok(Self { path })
        } else {
            Err(ValidationError::ResumeExtension)
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown next to the picker and sent with the upload.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// MIME type matching the extension.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }
}

// =============================================================================
// ApplicationForm
// =============================================================================

/// Editable form fields. Fields are kept as typed, even after a failed
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub resume: Option<ResumeFile>,
}

impl ApplicationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks every field and returns the first problem found, in field order.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first invalid field.
    pub fn validate(&self) -> Result<Application, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !is_plausible_email(email) {
            return Err(ValidationError::EmailInvalid);
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::PhoneRequired);
        }
        if !is_plausible_phone(phone) {
            return Err(ValidationError::PhoneInvalid);
        }

        Ok(Application {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            cover_letter: self.cover_letter.trim().to_string(),
            resume: self.resume.clone(),
            position: INTERNSHIP_POSITION.to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        _ => false,
    }
}

fn is_plausible_phone(phone: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')');
    if !phone.chars().all(allowed) {
        return false;
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

// =============================================================================
// Application
// =============================================================================

/// A validated application, ready to hand to a submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub resume: Option<ResumeFile>,
    pub position: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ApplicationForm {
        ApplicationForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "+91 98482 94006".into(),
            cover_letter: String::new(),
            resume: None,
        }
    }

    #[test]
    fn valid_form_produces_application() {
        let application = filled().validate().expect("valid form");
        assert_eq!(application.name, "Asha Rao");
        assert_eq!(application.position, INTERNSHIP_POSITION);
        assert!(application.resume.is_none());
    }

    #[test]
    fn fields_are_trimmed() {
        let mut form = filled();
        form.name = "  Asha  ".into();
        form.cover_letter = "\nHello\n".into();
        let application = form.validate().expect("valid form");
        assert_eq!(application.name, "Asha");
        assert_eq!(application.cover_letter, "Hello");
    }

    #[test]
    fn blank_required_fields_are_rejected_in_order() {
        assert_eq!(
            ApplicationForm::new().validate(),
            Err(ValidationError::NameRequired)
        );

        let mut form = filled();
        form.email = "   ".into();
        assert_eq!(form.validate(), Err(ValidationError::EmailRequired));

        let mut form = filled();
        form.phone.clear();
        assert_eq!(form.validate(), Err(ValidationError::PhoneRequired));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["asha", "@example.com", "asha@", "a@b@c", "as ha@example.com"] {
            let mut form = filled();
            form.email = bad.into();
            assert_eq!(form.validate(), Err(ValidationError::EmailInvalid), "{bad}");
        }
    }

    #[test]
    fn phone_digit_count_is_checked() {
        for bad in ["123456", "1234567890123456", "98482-abc-94006"] {
            let mut form = filled();
            form.phone = bad.into();
            assert_eq!(form.validate(), Err(ValidationError::PhoneInvalid), "{bad}");
        }
        for good in ["1234567", "(040) 2345-6789", "123456789012345"] {
            let mut form = filled();
            form.phone = good.into();
            assert!(form.validate().is_ok(), "{good}");
        }
    }

    #[test]
    fn resume_extensions() {
        assert!(ResumeFile::new("/tmp/cv.pdf").is_ok());
        assert!(ResumeFile::new("/tmp/cv.DOCX").is_ok());
        assert!(ResumeFile::new("cv.doc").is_ok());
        assert_eq!(
            ResumeFile::new("/tmp/cv.txt"),
            Err(ValidationError::ResumeExtension)
        );
        assert_eq!(
            ResumeFile::new("/tmp/cv"),
            Err(ValidationError::ResumeExtension)
        );
    }

    #[test]
    fn resume_metadata() {
        let resume = ResumeFile::new("/home/asha/Resume.PDF").expect("pdf accepted");
        assert_eq!(resume.file_name(), "Resume.PDF");
        assert_eq!(resume.mime_type(), "application/pdf");
    }

    #[test]
    fn validation_errors_have_keys() {
        assert_eq!(
            ValidationError::PhoneInvalid.i18n_key(),
            "error-validation-phone-invalid"
        );
        assert!(ValidationError::PhoneInvalid.to_string().contains("7 to 15"));
    }
}
