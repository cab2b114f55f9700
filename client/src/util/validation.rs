//! Client-side credential checks applied before any auth request is sent.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";
pub const EMAIL_FORMAT_MESSAGE: &str = "Email must look like kmc1234@kamiyama.ac.jp.";
pub const PASSWORD_FORMAT_MESSAGE: &str = "Password must be exactly four digits.";

const EMAIL_PREFIX: &str = "kmc";
const EMAIL_DOMAIN: &str = "@kamiyama.ac.jp";

/// How strictly credentials are checked before submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// School accounts only: `kmc` + four digits at `kamiyama.ac.jp`, four-digit PIN.
    #[default]
    Institutional,
    /// Both fields present; the backend decides the rest.
    Open,
}

impl CredentialPolicy {
    /// `open` (any case) selects `Open`; anything else is `Institutional`.
    pub fn from_name(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(name) if name.eq_ignore_ascii_case("open") => Self::Open,
            _ => Self::Institutional,
        }
    }

    pub fn email_placeholder(self) -> &'static str {
        match self {
            Self::Institutional => "kmc1234@kamiyama.ac.jp",
            Self::Open => "you@example.com",
        }
    }
}

/// `kmc` followed by exactly four ASCII digits, then `@kamiyama.ac.jp`.
pub fn is_institution_email(email: &str) -> bool {
    let Some(local) = email.strip_suffix(EMAIL_DOMAIN) else {
        return false;
    };
    let Some(digits) = local.strip_prefix(EMAIL_PREFIX) else {
        return false;
    };
    is_four_digits(digits)
}

pub fn is_pin_password(password: &str) -> bool {
    is_four_digits(password)
}

fn is_four_digits(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Check already-trimmed credentials against `policy`.
///
/// # Errors
///
/// Returns the message to show inline when a check fails.
pub fn validate_credentials(policy: CredentialPolicy, email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    match policy {
        CredentialPolicy::Open => Ok(()),
        CredentialPolicy::Institutional => {
            if !is_institution_email(email) {
                return Err(EMAIL_FORMAT_MESSAGE);
            }
            if !is_pin_password(password) {
                return Err(PASSWORD_FORMAT_MESSAGE);
            }
            Ok(())
        }
    }
}

/// Trimmed username, or `None` when the optional field was left blank.
pub fn optional_username(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
