//! Live tests against api.jotform.com.
//!
//! Run with: JOTFORM_API_KEY=... cargo test --test integration_tests -- --ignored

use jotform::{JotForm, JotFormError, Verb};
use serde::Deserialize;

fn live_client() -> anyhow::Result<JotForm> {
    Ok(JotForm::from_env()?)
}

#[test]
#[ignore]
fn test_get_user() -> anyhow::Result<()> {
    #[derive(Debug, Deserialize)]
    struct User {
        username: String,
    }

    let client = live_client()?;
    let envelope = client.execute_envelope("user", None, Verb::Get)?;
    let user: User = envelope.apply()?;

    assert!(!user.username.is_empty(), "expected a username");
    println!("User test passed: {}", user.username);
    Ok(())
}

#[test]
#[ignore]
fn test_get_forms() -> anyhow::Result<()> {
    let client = live_client()?;
    let forms = client.get_forms()?;

    assert!(forms.is_array(), "expected a list of forms, got {}", forms);
    println!("Forms test passed: {} forms", forms.as_array().map_or(0, |f| f.len()));
    Ok(())
}

#[test]
#[ignore]
fn test_get_plan() -> anyhow::Result<()> {
    let client = live_client()?;
    let plan = client.get_plan("FREE")?;

    assert_eq!(plan["name"], "FREE");
    Ok(())
}

#[test]
#[ignore]
fn test_bad_key() {
    let client = JotForm::new("not-a-real-key").expect("client");

    match client.get_user() {
        Err(JotFormError::Api { status, message, .. }) => {
            println!("Bad key test passed: {} {}", status, message);
        }
        other => panic!("expected JotFormError::Api, got {:?}", other),
    }
}

#[test]
#[ignore]
fn test_unknown_form() -> anyhow::Result<()> {
    let client = live_client()?;
    let err = client.get_form("0").expect_err("expected an error for form 0");

    assert!(err.status_code().is_some(), "expected an HTTP status, got {}", err);
    Ok(())
}
