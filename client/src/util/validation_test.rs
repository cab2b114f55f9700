use super::*;

#[test]
fn institutional_accepts_school_email_and_pin() {
    assert_eq!(validate_credentials(CredentialPolicy::Institutional, "kmc1234@kamiyama.ac.jp", "1234"), Ok(()));
}

#[test]
fn institutional_rejects_foreign_email() {
    assert_eq!(
        validate_credentials(CredentialPolicy::Institutional, "bad@x.com", "1234"),
        Err(EMAIL_FORMAT_MESSAGE)
    );
}

#[test]
fn institutional_rejects_non_digit_pin() {
    assert_eq!(
        validate_credentials(CredentialPolicy::Institutional, "kmc1234@kamiyama.ac.jp", "12a4"),
        Err(PASSWORD_FORMAT_MESSAGE)
    );
}

#[test]
fn institution_email_requires_exactly_four_digits() {
    assert!(!is_institution_email("kmc123@kamiyama.ac.jp"));
    assert!(!is_institution_email("kmc12345@kamiyama.ac.jp"));
    assert!(!is_institution_email("kmcabcd@kamiyama.ac.jp"));
    assert!(!is_institution_email("kmc1234@kamiyama.ac.jp.evil"));
    assert!(!is_institution_email("xkmc1234@kamiyama.ac.jp"));
}

#[test]
fn pin_rejects_wrong_length_and_unicode_digits() {
    assert!(!is_pin_password("123"));
    assert!(!is_pin_password("12345"));
    assert!(!is_pin_password("１２３４"));
}

#[test]
fn open_policy_only_requires_both_fields() {
    assert_eq!(validate_credentials(CredentialPolicy::Open, "bad@x.com", "hunter2"), Ok(()));
    assert_eq!(validate_credentials(CredentialPolicy::Open, "", "hunter2"), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn optional_username_treats_blank_as_absent() {
    assert_eq!(optional_username("   "), None);
    assert_eq!(optional_username(" taro "), Some("taro".to_owned()));
}

#[test]
fn policy_from_name_and_placeholder_follow_policy() {
    assert_eq!(CredentialPolicy::from_name(Some(" OPEN ")), CredentialPolicy::Open);
    assert_eq!(CredentialPolicy::from_name(None), CredentialPolicy::Institutional);
    assert_eq!(CredentialPolicy::Institutional.email_placeholder(), "kmc1234@kamiyama.ac.jp");
    assert_eq!(CredentialPolicy::Open.email_placeholder(), "you@example.com");
}
