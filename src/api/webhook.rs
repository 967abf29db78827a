use crate::error::{JotFormError, Result};
use crate::flatten::into_params;
use crate::rest::JotForm;
use serde_json::Value;

impl JotForm {
    /// List webhooks of a form
    pub fn get_form_webhooks(&self, form_id: &str) -> Result<Value> {
        self.execute_get(&format!("form/{}/webhooks", form_id))
    }

    /// Add a webhook that receives form data on each submission
    ///
    /// # Returns
    /// The form's webhook list
    pub fn create_form_webhook(&self, form_id: &str, webhook_url: &str) -> Result<Value> {
        self.execute_post(
            &format!("form/{}/webhooks", form_id),
            &into_params([("webhookURL", webhook_url)]),
        )
    }

    /// Deleting webhooks is not available through this client.
    ///
    /// Always returns [`JotFormError::Unsupported`] without contacting the server.
    pub fn delete_form_webhook(&self, _form_id: &str, _webhook_id: &str) -> Result<Value> {
        Err(JotFormError::Unsupported("deleteFormWebhook"))
    }
}
