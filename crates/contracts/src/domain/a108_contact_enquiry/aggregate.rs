use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки заполнения формы обратной связи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnquiryError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please tell us a little about your project")]
    MissingMessage,
}

impl EnquiryError {
    /// Поле формы, к которому относится ошибка
    pub fn field(&self) -> &'static str {
        match self {
            EnquiryError::MissingName => "name",
            EnquiryError::MissingEmail | EnquiryError::InvalidEmail => "email",
            EnquiryError::MissingMessage => "message",
        }
    }
}

/// Заявка из формы обратной связи.
///
/// Заявка никуда не отправляется: бэкенда у формы нет.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEnquiry {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactEnquiry {
    pub fn validate(&self) -> Result<(), Vec<EnquiryError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(EnquiryError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(EnquiryError::MissingEmail);
        } else if !looks_like_email(email) {
            errors.push(EnquiryError::InvalidEmail);
        }

        if self.message.trim().is_empty() {
            errors.push(EnquiryError::MissingMessage);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enquiry(name: &str, email: &str, message: &str) -> ContactEnquiry {
        ContactEnquiry {
            name: name.into(),
            email: email.into(),
            company: String::new(),
            message: message.into(),
        }
    }

    #[test]
    fn test_valid_enquiry() {
        assert!(enquiry("Sarah", "sarah@amc.com.au", "Predictive maintenance").validate().is_ok());
    }

    #[test]
    fn test_empty_enquiry_reports_all_fields() {
        let errors = ContactEnquiry::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                EnquiryError::MissingName,
                EnquiryError::MissingEmail,
                EnquiryError::MissingMessage
            ]
        );
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["sarah", "@amc.com", "sarah@", "sarah@amc", "sa rah@amc.com", "a@b@c.com", "a@.com"] {
            let errors = enquiry("Sarah", email, "hi").validate().unwrap_err();
            assert_eq!(errors, vec![EnquiryError::InvalidEmail], "email {email:?}");
        }
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let errors = enquiry("   ", " contact@nextwave.au ", "\n").validate().unwrap_err();
        assert_eq!(errors, vec![EnquiryError::MissingName, EnquiryError::MissingMessage]);
        assert_eq!(errors[1].field(), "message");
        assert_eq!(errors[1].to_string(), "Please tell us a little about your project");
    }
}
