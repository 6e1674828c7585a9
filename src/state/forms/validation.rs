//! Field validators and error-state derivation

use super::field::Field;
use super::form_state::FormState;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Whitespace as the browser's form layer sees it: the Unicode space
/// separators, line terminators and U+FEFF, but not U+0085
const INPUT_WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let word = format!("[^{INPUT_WHITESPACE}]+");
    Regex::new(&format!(r"^{word}@{word}\.{word}$")).expect("email pattern compiles")
});
static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("symbol pattern compiles"));
static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]").expect("digit pattern compiles"));
static UPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern compiles"));
static LOWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]").expect("lowercase pattern compiles"));

/// Exactly ten ASCII decimal digits
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    PHONE_RE.is_match(phone_number)
}

/// `something@something.something` with no whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least eight UTF-16 code units with a symbol, a digit, an uppercase
/// and a lowercase ASCII letter
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
        && SYMBOL_RE.is_match(password)
        && DIGIT_RE.is_match(password)
        && UPPER_RE.is_match(password)
        && LOWER_RE.is_match(password)
}

/// Leading integer of `age` within `MIN_AGE..=MAX_AGE`
pub fn is_valid_age(age: &str) -> bool {
    parse_leading_int(age).is_some_and(|n| (MIN_AGE..=MAX_AGE).contains(&n))
}

/// Parses the integer at the start of `input`, ignoring whatever follows it.
///
/// Leading whitespace is skipped and an optional sign is honoured. A `0x` or
/// `0X` prefix switches to base 16. Returns `None` when no digit is found.
/// Values too large for `i64` saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start_matches(is_input_whitespace);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

fn is_input_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Mapping from field to its validation message.
///
/// A field without an entry is valid (or has never been validated).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorState {
    errors: BTreeMap<Field, &'static str>,
}

impl ErrorState {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Runs every field rule against `state` and returns a fresh error mapping.
///
/// Rules are independent: each field reports at most one message, and the
/// "required" message wins over the format message when the value is empty.
pub fn validate(state: &FormState) -> ErrorState {
    let mut errors = ErrorState::default();

    if state.first_name.is_empty() {
        errors.insert(Field::FirstName, "First Name is required");
    }

    if state.last_name.is_empty() {
        errors.insert(Field::LastName, "Last name is required");
    }

    if state.phone_number.is_empty() {
        errors.insert(Field::PhoneNumber, "Phone number is required");
    } else if !is_valid_phone_number(&state.phone_number) {
        errors.insert(Field::PhoneNumber, "Please enter valid phone number");
    }

    if state.email.is_empty() {
        errors.insert(Field::Email, "Enter your email Id");
    } else if !is_valid_email(&state.email) {
        errors.insert(Field::Email, "Please enter valid Email");
    }

    if state.password.is_empty() {
        errors.insert(Field::Password, "Please enter your password");
    } else if !is_valid_password(&state.password) {
        errors.insert(Field::Password, "Please enter valid password");
    }

    if state.confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, "Please confirm your password");
    } else if state.password != state.confirm_password {
        errors.insert(Field::ConfirmPassword, "Password does not match");
    }

    if state.age.is_empty() {
        errors.insert(Field::Age, "Please enter your age");
    } else if !is_valid_age(&state.age) {
        errors.insert(
            Field::Age,
            "Age must be greater than 18 years and less than 100 years",
        );
    }

    if state.gender.is_none() {
        errors.insert(Field::Gender, "Gender is required");
    }

    if state.interests.is_empty() {
        errors.insert(Field::Interests, "Please select atleast one interest");
    }

    if state.birth_date.is_empty() {
        errors.insert(Field::BirthDate, "Date of birth is required");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{Gender, Interest};

    fn valid_state() -> FormState {
        FormState {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "1234567890".to_string(),
            password: "Abcdef1!".to_string(),
            confirm_password: "Abcdef1!".to_string(),
            age: "36".to_string(),
            gender: Some(Gender::Female),
            interests: [Interest::Coding].into_iter().collect(),
            birth_date: "1815-12-10".to_string(),
        }
    }

    mod phone_number {
        use super::*;

        #[test]
        fn test_ten_digits_is_valid() {
            assert!(is_valid_phone_number("1234567890"));
        }

        #[test]
        fn test_wrong_length_is_invalid() {
            assert!(!is_valid_phone_number("123456789"));
            assert!(!is_valid_phone_number("12345678901"));
        }

        #[test]
        fn test_separators_are_invalid() {
            assert!(!is_valid_phone_number("123-456-789"));
            assert!(!is_valid_phone_number("123 456 78"));
        }

        #[test]
        fn test_non_ascii_digits_are_invalid() {
            assert!(!is_valid_phone_number("١٢٣٤٥٦٧٨٩٠"));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_simple_address_is_valid() {
            assert!(is_valid_email("ada@example.com"));
            assert!(is_valid_email("a@b.c"));
        }

        #[test]
        fn test_missing_parts_are_invalid() {
            assert!(!is_valid_email("ada"));
            assert!(!is_valid_email("ada@example"));
            assert!(!is_valid_email("@example.com"));
            assert!(!is_valid_email("ada@.com"));
        }

        #[test]
        fn test_whitespace_is_invalid() {
            assert!(!is_valid_email("ada @example.com"));
            assert!(!is_valid_email("ada@example.com "));
        }

        #[test]
        fn test_byte_order_mark_counts_as_whitespace() {
            assert!(!is_valid_email("ada\u{FEFF}@example.com"));
            assert!(!is_valid_email("ada@example.com\u{3000}"));
            assert!(is_valid_email("ada\u{85}@example.com"));
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_all_classes_is_valid() {
            assert!(is_valid_password("Abcdef1!"));
        }

        #[test]
        fn test_missing_classes_is_invalid() {
            assert!(!is_valid_password("abcdefgh"));
            assert!(!is_valid_password("Abcdefg!"));
            assert!(!is_valid_password("abcdef1!"));
            assert!(!is_valid_password("ABCDEF1!"));
            assert!(!is_valid_password("Abcdefg1"));
        }

        #[test]
        fn test_too_short_is_invalid() {
            assert!(!is_valid_password("Abc1!"));
            assert!(!is_valid_password("Abcde1!"));
        }

        #[test]
        fn test_symbol_must_come_from_the_symbol_set() {
            assert!(!is_valid_password("Abcdef1_"));
            assert!(is_valid_password("Abcdef1|"));
            assert!(is_valid_password("Abcdef1\""));
        }

        #[test]
        fn test_length_counts_utf16_units() {
            // Each emoji is a surrogate pair, so this is eight units long
            assert!(is_valid_password("Ab1!\u{1F600}\u{1F600}"));
            assert!(!is_valid_password("Ab1!\u{E9}\u{E9}\u{E9}"));
        }
    }

    mod age {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_range_bounds() {
            assert!(!is_valid_age("17"));
            assert!(is_valid_age("18"));
            assert!(is_valid_age("100"));
            assert!(!is_valid_age("101"));
        }

        #[test]
        fn test_non_numeric_is_invalid() {
            assert!(!is_valid_age("abc"));
            assert!(!is_valid_age(" "));
            assert!(!is_valid_age("-"));
        }

        #[test]
        fn test_trailing_garbage_is_ignored() {
            assert!(is_valid_age("25abc"));
            assert!(is_valid_age("42.9"));
            assert!(is_valid_age("25e1"));
            assert!(!is_valid_age("2e1"));
        }

        #[test]
        fn test_leading_whitespace_and_sign() {
            assert!(is_valid_age("  30"));
            assert!(is_valid_age("+30"));
            assert!(!is_valid_age("-30"));
        }

        #[test]
        fn test_leading_byte_order_mark_is_skipped() {
            assert_eq!(parse_leading_int("\u{FEFF}30"), Some(30));
            assert_eq!(parse_leading_int("\u{A0}\u{2028}42"), Some(42));
            assert_eq!(parse_leading_int("\u{85}30"), None);
        }

        #[test]
        fn test_hex_prefix() {
            assert_eq!(parse_leading_int("0x20"), Some(32));
            assert!(is_valid_age("0x20"));
            assert_eq!(parse_leading_int("0x"), None);
        }

        #[test]
        fn test_parse_leading_int() {
            assert_eq!(parse_leading_int("17"), Some(17));
            assert_eq!(parse_leading_int("-5kg"), Some(-5));
            assert_eq!(parse_leading_int("007"), Some(7));
            assert_eq!(parse_leading_int(""), None);
            assert_eq!(parse_leading_int("x1"), None);
        }

        #[test]
        fn test_huge_value_saturates_out_of_range() {
            assert_eq!(
                parse_leading_int("99999999999999999999999"),
                Some(i64::MAX)
            );
            assert!(!is_valid_age("99999999999999999999999"));
        }
    }

    mod validate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_state_has_no_errors() {
            assert!(validate(&valid_state()).is_empty());
        }

        #[test]
        fn test_empty_form_reports_every_field() {
            let errors = validate(&FormState::default());
            assert_eq!(errors.len(), 10);
            for field in Field::ALL {
                assert!(errors.contains(field), "{field} missing");
            }
        }

        #[test]
        fn test_empty_form_uses_required_messages() {
            let errors = validate(&FormState::default());
            assert_eq!(errors.get(Field::FirstName), Some("First Name is required"));
            assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
            assert_eq!(errors.get(Field::PhoneNumber), Some("Phone number is required"));
            assert_eq!(errors.get(Field::Email), Some("Enter your email Id"));
            assert_eq!(errors.get(Field::Password), Some("Please enter your password"));
            assert_eq!(
                errors.get(Field::ConfirmPassword),
                Some("Please confirm your password")
            );
            assert_eq!(errors.get(Field::Age), Some("Please enter your age"));
            assert_eq!(errors.get(Field::Gender), Some("Gender is required"));
            assert_eq!(
                errors.get(Field::Interests),
                Some("Please select atleast one interest")
            );
            assert_eq!(errors.get(Field::BirthDate), Some("Date of birth is required"));
        }

        fn with_cleared(field: Field) -> FormState {
            let mut state = valid_state();
            match field {
                Field::FirstName => state.first_name.clear(),
                Field::LastName => state.last_name.clear(),
                Field::Email => state.email.clear(),
                Field::PhoneNumber => state.phone_number.clear(),
                Field::Password => state.password.clear(),
                Field::ConfirmPassword => state.confirm_password.clear(),
                Field::Age => state.age.clear(),
                Field::Gender => state.gender = None,
                Field::Interests => state.interests.clear(),
                Field::BirthDate => state.birth_date.clear(),
            }
            state
        }

        #[test]
        fn test_single_empty_field_is_reported() {
            for field in Field::ALL {
                let errors = validate(&with_cleared(field));
                assert!(errors.contains(field), "{field} should be reported");
                // Clearing the password also breaks the confirmation match
                if field != Field::Password {
                    assert_eq!(errors.len(), 1, "only {field} should be reported");
                }
            }
        }

        #[test]
        fn test_empty_password_also_breaks_confirmation() {
            let mut state = valid_state();
            state.password.clear();
            let errors = validate(&state);
            assert_eq!(errors.get(Field::Password), Some("Please enter your password"));
            assert_eq!(
                errors.get(Field::ConfirmPassword),
                Some("Password does not match")
            );
        }

        #[test]
        fn test_required_wins_over_format() {
            let mut state = valid_state();
            state.phone_number.clear();
            state.age.clear();
            let errors = validate(&state);
            assert_eq!(errors.get(Field::PhoneNumber), Some("Phone number is required"));
            assert_eq!(errors.get(Field::Age), Some("Please enter your age"));
        }

        #[test]
        fn test_format_messages() {
            let mut state = valid_state();
            state.phone_number = "123".to_string();
            state.email = "nope".to_string();
            state.age = "abc".to_string();
            let errors = validate(&state);
            assert_eq!(
                errors.get(Field::PhoneNumber),
                Some("Please enter valid phone number")
            );
            assert_eq!(errors.get(Field::Email), Some("Please enter valid Email"));
            assert_eq!(
                errors.get(Field::Age),
                Some("Age must be greater than 18 years and less than 100 years")
            );
            assert_eq!(errors.len(), 3);
        }

        #[test]
        fn test_mismatch_reported_even_when_password_is_invalid() {
            let mut state = valid_state();
            state.password = "weak".to_string();
            state.confirm_password = "weaker".to_string();
            let errors = validate(&state);
            assert_eq!(errors.get(Field::Password), Some("Please enter valid password"));
            assert_eq!(
                errors.get(Field::ConfirmPassword),
                Some("Password does not match")
            );
        }

        #[test]
        fn test_matching_invalid_passwords_only_flag_password() {
            let mut state = valid_state();
            state.password = "weak".to_string();
            state.confirm_password = "weak".to_string();
            let errors = validate(&state);
            assert!(errors.contains(Field::Password));
            assert!(!errors.contains(Field::ConfirmPassword));
        }

        #[test]
        fn test_whitespace_only_name_counts_as_filled() {
            let mut state = valid_state();
            state.first_name = " ".to_string();
            assert!(validate(&state).is_empty());
        }

        #[test]
        fn test_error_state_serializes_with_field_names() {
            let mut state = valid_state();
            state.first_name.clear();
            state.interests.clear();
            let json = serde_json::to_value(validate(&state)).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "firstName": "First Name is required",
                    "interests": "Please select atleast one interest",
                })
            );
        }

        #[test]
        fn test_iter_follows_field_order() {
            let errors = validate(&FormState::default());
            let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
            assert_eq!(fields, Field::ALL.to_vec());
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeSet;

        fn valid_password() -> impl Strategy<Value = String> {
            (
                "[A-Z]",
                "[a-z]",
                "[0-9]",
                r#"[!@#$%^*(),.?":{}|<>]"#,
                "[A-Za-z0-9 ]{4,12}",
            )
                .prop_flat_map(|(upper, lower, digit, symbol, rest)| {
                    let chars: Vec<char> = [upper, lower, digit, symbol, rest]
                        .concat()
                        .chars()
                        .collect();
                    Just(chars).prop_shuffle()
                })
                .prop_map(|chars| chars.into_iter().collect())
        }

        fn valid_age() -> impl Strategy<Value = String> {
            (MIN_AGE..=MAX_AGE, "[a-z.]{0,3}").prop_map(|(age, suffix)| format!("{age}{suffix}"))
        }

        fn valid_interests() -> impl Strategy<Value = BTreeSet<Interest>> {
            prop::sample::subsequence(Interest::ALL.to_vec(), 1..=Interest::ALL.len())
                .prop_map(|interests| interests.into_iter().collect())
        }

        fn well_formed_state() -> impl Strategy<Value = FormState> {
            (
                "[A-Za-z][A-Za-z '-]{0,15}",
                "[A-Za-z][A-Za-z '-]{0,15}",
                "[a-z0-9._+]{1,12}@[a-z0-9-]{1,10}\\.[a-z]{2,6}",
                "[0-9]{10}",
                valid_password(),
                valid_age(),
                prop::sample::select(Gender::ALL.to_vec()),
                valid_interests(),
                "[0-9]{4}-[0-9]{2}-[0-9]{2}",
            )
                .prop_map(
                    |(
                        first_name,
                        last_name,
                        email,
                        phone_number,
                        password,
                        age,
                        gender,
                        interests,
                        birth_date,
                    )| FormState {
                        first_name,
                        last_name,
                        email,
                        phone_number,
                        confirm_password: password.clone(),
                        password,
                        age,
                        gender: Some(gender),
                        interests,
                        birth_date,
                    },
                )
        }

        fn clear(state: &mut FormState, field: Field) {
            match field {
                Field::FirstName => state.first_name.clear(),
                Field::LastName => state.last_name.clear(),
                Field::Email => state.email.clear(),
                Field::PhoneNumber => state.phone_number.clear(),
                Field::Password => state.password.clear(),
                Field::ConfirmPassword => state.confirm_password.clear(),
                Field::Age => state.age.clear(),
                Field::Gender => state.gender = None,
                Field::Interests => state.interests.clear(),
                Field::BirthDate => state.birth_date.clear(),
            }
        }

        fn required_message(field: Field) -> &'static str {
            match field {
                Field::FirstName => "First Name is required",
                Field::LastName => "Last name is required",
                Field::Email => "Enter your email Id",
                Field::PhoneNumber => "Phone number is required",
                Field::Password => "Please enter your password",
                Field::ConfirmPassword => "Please confirm your password",
                Field::Age => "Please enter your age",
                Field::Gender => "Gender is required",
                Field::Interests => "Please select atleast one interest",
                Field::BirthDate => "Date of birth is required",
            }
        }

        proptest! {
            #[test]
            fn property_well_formed_state_has_no_errors(state in well_formed_state()) {
                let errors = validate(&state);
                prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
            }

            #[test]
            fn property_emptied_field_reports_required_message(
                state in well_formed_state(),
                field in prop::sample::select(Field::ALL.to_vec()),
            ) {
                let mut state = state;
                clear(&mut state, field);
                let errors = validate(&state);
                prop_assert_eq!(errors.get(field), Some(required_message(field)));
                let expected = if field == Field::Password { 2 } else { 1 };
                prop_assert_eq!(errors.len(), expected);
            }

            #[test]
            fn property_mismatch_reported_exactly_when_passwords_differ(
                state in well_formed_state(),
                confirm in prop::option::of("[ -~]{1,16}"),
            ) {
                let mut state = state;
                if let Some(confirm) = confirm {
                    state.confirm_password = confirm;
                }
                let differs = state.password != state.confirm_password;
                let errors = validate(&state);
                prop_assert_eq!(errors.contains(Field::ConfirmPassword), differs);
                if differs {
                    prop_assert_eq!(
                        errors.get(Field::ConfirmPassword),
                        Some("Password does not match")
                    );
                }
            }
        }
    }
}
