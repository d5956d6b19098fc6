/**
 * Authentication Handler Types
 *
 * Form bodies posted by the register and login pages. Missing fields
 * deserialize as empty strings, which the services reject like any other
 * invalid input instead of failing extraction.
 */

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
