//! Credential policy properties

use proptest::prelude::*;

use sessiongate::backend::auth::password::MAX_PASSWORD_BYTES;
use sessiongate::backend::auth::registration::{
    validate_credentials, MIN_PASSWORD_LEN, MIN_USERNAME_LEN,
};

proptest! {
    #[test]
    fn prop_long_enough_credentials_accepted(
        username in "\\PC{3,40}",
        // at most 4 bytes per character keeps this within the bcrypt limit
        password in "\\PC{3,18}",
    ) {
        prop_assert!(validate_credentials(&username, &password).is_ok());
    }

    #[test]
    fn prop_short_username_rejected(
        username in "\\PC{0,2}",
        password in "\\PC{0,40}",
    ) {
        prop_assert!(username.chars().count() < MIN_USERNAME_LEN);
        let err = validate_credentials(&username, &password).unwrap_err();
        prop_assert_eq!(err.field(), "username");
    }

    #[test]
    fn prop_short_password_rejected(
        username in "\\PC{3,40}",
        password in "\\PC{0,2}",
    ) {
        prop_assert!(password.chars().count() < MIN_PASSWORD_LEN);
        let err = validate_credentials(&username, &password).unwrap_err();
        prop_assert_eq!(err.field(), "password");
    }

    #[test]
    fn prop_password_over_byte_limit_rejected(
        username in "[a-z]{3,16}",
        password in "[a-zA-Z0-9]{73,120}",
    ) {
        prop_assert!(password.len() > MAX_PASSWORD_BYTES);
        let err = validate_credentials(&username, &password).unwrap_err();
        prop_assert_eq!(err.field(), "password");
    }
}
