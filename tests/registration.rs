//! End-to-end flow: a registration form validated with chains, profiles,
//! and an aggregating run.

use chrono::{Duration, Utc};
use orion_guard::prelude::*;
use orion_guard::registry;

struct UserInput {
    username: String,
    email: String,
    password: String,
    age: i64,
    roles: Vec<Option<String>>,
}

fn sample_input() -> UserInput {
    UserInput {
        username: "ada42".into(),
        email: "ada@example.com".into(),
        password: "Str0ng!pass".into(),
        age: 36,
        roles: vec![Some("admin".into()), Some("author".into())],
    }
}

fn validate(input: &UserInput) -> Result<(), GuardError> {
    chain_of(input.email.as_str(), "email")
        .not_empty()
        .email()
        .finish()?;
    guards::string::strong_password(&input.password, "password")?;
    registry::execute("registration/SafeUsername", input.username.as_str(), "username")
        .map_err(|error| match error {
            ProfileError::Guard(error) => error,
            ProfileError::NotFound { name, .. } => {
                panic!("profile `{name}` should have been registered")
            }
        })?;
    Ok(())
}

fn register_profiles() {
    registry::register::<str>("registration/SafeUsername", |value, parameter| {
        chain_of(value, parameter)
            .not_empty()
            .length(3, 20)
            .alphanumeric()
            .finish()
    });
}

#[test]
fn valid_registration_passes_every_layer() {
    register_profiles();
    let input = sample_input();
    assert!(validate(&input).is_ok());
}

#[test]
fn profile_rejects_a_bad_username() {
    register_profiles();
    let mut input = sample_input();
    input.username = "a!".into();
    let error = validate(&input).unwrap_err();
    assert_eq!(error.parameter(), "username");
}

#[test]
fn chain_rejects_a_bad_email_before_later_steps() {
    register_profiles();
    let mut input = sample_input();
    input.email = "not-an-email".into();
    let error = validate(&input).unwrap_err();
    assert_eq!(
        error.kind(),
        &GuardErrorKind::InvalidFormat(FormatKind::Email)
    );
}

#[test]
fn unregistered_profile_is_a_configuration_error() {
    let error =
        registry::execute("registration/Missing", "value", "p").unwrap_err();
    assert!(error.is_not_found());
}

#[test]
fn aggregated_run_reports_every_field_at_once() {
    let input = UserInput {
        username: "x".into(),
        email: "broken".into(),
        password: "weak".into(),
        age: 7,
        roles: vec![Some("admin".into()), None],
    };
    let now = Utc::now();
    let birth_date = now + Duration::days(1);

    let manager = GuardManager::new()
        .add({
            let email = input.email.clone();
            move || guards::format::email(&email, "email")
        })
        .add({
            let password = input.password.clone();
            move || guards::string::strong_password(&password, "password")
        })
        .add(move || guards::numeric::in_range(input.age, 18, 120, "age"))
        .add({
            let roles = input.roles.clone();
            move || guards::collection::all_present(&roles, "roles")
        })
        .add(move || guards::datetime::not_future(birth_date, now, "birth_date"));

    let failures = manager.collect();
    assert_eq!(failures.len(), 5);
    let parameters: Vec<&str> = failures.iter().map(GuardError::parameter).collect();
    assert_eq!(
        parameters,
        ["email", "password", "age", "roles", "birth_date"]
    );

    let combined = manager.execute().unwrap_err();
    assert!(combined.is_aggregate());
    assert_eq!(combined.causes().len(), 5);
}
