use crate::error::Result;
use crate::flatten::into_params;
use crate::rest::JotForm;
use serde_json::Value;

impl JotForm {
    /// Get account details: account type, avatar URL, name, email, website and limits
    pub fn get_user(&self) -> Result<Value> {
        self.execute_get("user")
    }

    /// Get the number of submissions received this month, SSL and payment
    /// submission counts, and upload space used
    pub fn get_usage(&self) -> Result<Value> {
        self.execute_get("user/usage")
    }

    /// List forms of this account with title, creation date and submission counts
    pub fn get_forms(&self) -> Result<Value> {
        self.execute_get("user/forms")
    }

    /// List submissions of all forms of this account
    pub fn get_submissions(&self) -> Result<Value> {
        self.execute_get("user/submissions")
    }

    /// List sub-users and the forms and folders they can access
    pub fn get_subusers(&self) -> Result<Value> {
        self.execute_get("user/subusers")
    }

    /// List form folders, including owners of shared folders
    pub fn get_folders(&self) -> Result<Value> {
        self.execute_get("user/folders")
    }

    /// List report URLs for all forms (Excel, CSV, charts, HTML tables)
    pub fn get_reports(&self) -> Result<Value> {
        self.execute_get("user/reports")
    }

    /// Get the account's time zone and language
    pub fn get_settings(&self) -> Result<Value> {
        self.execute_get("user/settings")
    }

    /// Update account settings
    ///
    /// # Arguments
    /// * `settings` - Setting names and new values, e.g. `("timezone", "Europe/Istanbul")`
    pub fn update_settings<I, K, V>(&self, settings: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.execute_post("user/settings", &into_params(settings))
    }

    /// Get the activity log: form changes, logins and other operations
    pub fn get_history(&self) -> Result<Value> {
        self.execute_get("user/history")
    }

    /// Register a new user with `username`, `password` and `email`
    pub fn register_user<I, K, V>(&self, user_details: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.execute_post("user/register", &into_params(user_details))
    }

    /// Log in with the given credentials.
    ///
    /// Expected keys are `username`, `password`, `appName` and `access`.
    /// The response carries the user's settings and an app key.
    pub fn login_user<I, K, V>(&self, credentials: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.execute_post("user/login", &into_params(credentials))
    }

    /// Log out the current user
    pub fn logout_user(&self) -> Result<Value> {
        self.execute_get("user/logout")
    }
}
