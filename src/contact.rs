use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::effects::TimedSlot;

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(4000);

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing {0}")]
    MissingField(Field),
    #[error("malformed email address")]
    InvalidEmail,
}

impl ContactError {
    pub fn notice(&self) -> Notice {
        match self {
            ContactError::MissingField(_) => Notice::error("Please fill in all fields."),
            ContactError::InvalidEmail => Notice::error("Please enter a valid email address."),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Subject, &self.subject),
            (Field::Message, &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.is_empty()) {
            return Err(ContactError::MissingField(*field));
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and build the `mailto:` link for `destination`.
    pub fn mailto(&self, destination: &str) -> Result<String, ContactError> {
        self.validate()?;
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        );
        Ok(format!(
            "mailto:{destination}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body)
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn sent() -> Self {
        Self::success("Thank you for your message! I'll get back to you soon.")
    }
}

/// The notice on screen, if any. Only the newest notice's timer clears it.
pub type NoticeSlot = TimedSlot<Notice>;

/// Outcome of a form submission: the link to hand to the mail client (if
/// any) and the notice to show.
pub fn submit(form: &ContactForm, destination: &str) -> (Option<String>, Notice) {
    match form.mailto(destination) {
        Ok(link) => (Some(link), Notice::sent()),
        Err(e) => {
            log::debug!("contact form rejected: {e}");
            (None, e.notice())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEST: &str = "owner@example.org";

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_hands_off() {
        let (link, notice) = submit(&jane(), DEST);
        let link = link.expect("valid form should produce a link");
        assert!(link.starts_with("mailto:owner@example.org?subject=Hi&body="));
        assert_eq!(notice, Notice::sent());
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_malformed_email() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..jane()
        };
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
        let (link, notice) = submit(&form, DEST);
        assert!(link.is_none());
        assert_eq!(notice, Notice::error("Please enter a valid email address."));
    }

    #[test]
    fn test_missing_message() {
        let form = ContactForm {
            message: String::new(),
            ..jane()
        };
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(Field::Message))
        );
        let (link, notice) = submit(&form, DEST);
        assert!(link.is_none());
        assert_eq!(notice, Notice::error("Please fill in all fields."));
    }

    #[test]
    fn test_first_missing_field_reported() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingField(Field::Name))
        );
        let form = ContactForm {
            email: String::new(),
            subject: String::new(),
            ..jane()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Email)));
    }

    #[test]
    fn test_missing_field_wins_over_bad_email() {
        let form = ContactForm {
            email: "bad".to_string(),
            subject: String::new(),
            ..jane()
        };
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(Field::Subject))
        );
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b.com "));
    }

    #[test]
    fn test_mailto_encoding() {
        let form = ContactForm {
            subject: "Collab & more?".to_string(),
            message: "Line one\nLine two".to_string(),
            ..jane()
        };
        let link = form.mailto(DEST).unwrap();
        assert_eq!(
            link,
            "mailto:owner@example.org?subject=Collab%20%26%20more%3F&body=Name%3A%20Jane%0AEmail%3A%20jane%40example.com%0A%0AMessage%3A%0ALine%20one%0ALine%20two"
        );
    }

    #[test]
    fn test_mailto_keeps_reserved_marks_encoded() {
        let form = ContactForm {
            subject: "Hi! (it's me)*".to_string(),
            ..jane()
        };
        let link = form.mailto(DEST).unwrap();
        assert!(link.starts_with("mailto:owner@example.org?subject=Hi%21%20%28it%27s%20me%29%2A&body="));
    }

    #[test]
    fn test_older_notice_timer_keeps_newer_notice() {
        let mut slot = NoticeSlot::new();
        let rejected = slot.show(Notice::error("Please fill in all fields."));
        let sent = slot.show(Notice::sent());

        assert!(!slot.expire(rejected));
        assert_eq!(slot.current(), Some(&Notice::sent()));

        assert!(slot.expire(sent));
        assert_eq!(slot.current(), None);
    }
}
