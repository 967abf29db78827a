//! Resource methods on [`JotForm`](crate::JotForm).
//!
//! Each method maps to one endpoint of the v1 API. Identifiers are inserted
//! into the path as given, without escaping, so pass the IDs returned by the
//! list calls (`get_forms`, `get_folders`, ...) unchanged.
//!
//! All methods return the `content` of the response envelope.

pub mod folder;
pub mod form;
pub mod question;
pub mod report;
pub mod submission;
pub mod system;
pub mod user;
pub mod webhook;

pub use folder::FolderForms;
