//! # jotform - Jotform API client for Rust
//!
//! A blocking client for the Jotform REST API. Each method maps to one
//! endpoint, sends a request authenticated with your API key, and returns
//! the `content` of the JSON response envelope.
//!
//! ## Features
//!
//! - Account, form, question, submission, report, folder, webhook and plan endpoints
//! - Typed inputs for submissions and new forms, encoded into the
//!   bracket-notation form fields the API expects
//! - Explicit errors: non-2xx responses become [`JotFormError::Api`] carrying
//!   the server's error body, and are logged through `tracing`
//!
//! ## Basic Usage
//!
//! ```no_run
//! use jotform::JotForm;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JotForm::new("YOUR_API_KEY")?;
//!
//!     let forms = client.get_forms()?;
//!     for form in forms.as_array().into_iter().flatten() {
//!         println!("{} {}", form["id"], form["title"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Submitting Answers
//!
//! ```no_run
//! use jotform::{JotForm, Submission};
//!
//! let client = JotForm::new("YOUR_API_KEY")?;
//!
//! let submission = Submission::new()
//!     .answer_field("3", "first", "Jane")
//!     .answer_field("3", "last", "Doe")
//!     .answer("4", "jane@example.com");
//!
//! let created = client.create_form_submissions("201234567890", &submission)?;
//! println!("submission: {}", created["submissionID"]);
//! # Ok::<(), jotform::JotFormError>(())
//! ```
//!
//! ## Configuration
//!
//! ```no_run
//! use jotform::{Config, JotForm};
//!
//! let config = Config::new("YOUR_API_KEY")
//!     .with_base_url("https://eu-api.jotform.com")
//!     .with_api_version("v1");
//! let client = JotForm::with_config(config)?;
//!
//! // Or from JOTFORM_API_KEY / JOTFORM_BASE_URL / JOTFORM_API_VERSION
//! let client = JotForm::from_env()?;
//! # Ok::<(), jotform::JotFormError>(())
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod flatten;
pub mod response;
pub mod rest;

// Re-export main types for convenience
pub use api::FolderForms;
pub use client::{Config, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use error::{JotFormError, Result};
pub use flatten::{
    flatten_form, flatten_properties, flatten_question, flatten_submission, into_params, FlatParams, KeyRule,
    NewForm, Submission, SubmissionAnswer,
};
pub use response::Envelope;
pub use rest::{JotForm, Params, Verb};

// Re-export serde_json for convenience
pub use serde_json::{json, Value};
