use crate::error::Result;
use crate::flatten::{flatten_form, flatten_properties, FlatParams, NewForm};
use crate::rest::JotForm;
use serde_json::Value;

impl JotForm {
    /// Get basic information about a form: status, dates, submission count
    ///
    /// # Arguments
    /// * `form_id` - The number in the form URL, as listed by `get_forms`
    pub fn get_form(&self, form_id: &str) -> Result<Value> {
        self.execute_get(&format!("form/{}", form_id))
    }

    /// List all properties of a form (width, expiration date, style, ...)
    pub fn get_form_properties(&self, form_id: &str) -> Result<Value> {
        self.execute_get(&format!("form/{}/properties", form_id))
    }

    /// Get a single property of a form
    pub fn get_form_property(&self, form_id: &str, property_key: &str) -> Result<Value> {
        self.execute_get(&format!("form/{}/properties/{}", form_id, property_key))
    }

    /// Add or edit form properties, sent as `properties[<key>]`
    pub fn set_form_properties<I, K, V>(&self, form_id: &str, properties: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.execute_post(
            &format!("form/{}/properties", form_id),
            &flatten_properties(properties),
        )
    }

    /// Add or edit several form properties at once
    ///
    /// # Arguments
    /// * `form_id` - Form ID
    /// * `properties_json` - JSON text such as `{"properties":{"width":"600"}}`, sent unmodified
    pub fn set_multiple_form_properties(&self, form_id: &str, properties_json: &str) -> Result<Value> {
        self.execute_put(&format!("form/{}/properties", form_id), properties_json)
    }

    /// List files uploaded through a form
    pub fn get_form_files(&self, form_id: &str) -> Result<Value> {
        self.execute_get(&format!("form/{}/files", form_id))
    }

    /// Create a new form from its properties, questions and emails
    pub fn create_form(&self, form: &NewForm) -> Result<Value> {
        self.execute_post("user/forms", &flatten_form(form))
    }

    /// Create new forms from JSON text, sent unmodified
    pub fn create_forms(&self, forms_json: &str) -> Result<Value> {
        self.execute_put("user/forms", forms_json)
    }

    /// Clone a form. The response describes the copy.
    pub fn clone_form(&self, form_id: &str) -> Result<Value> {
        self.execute_post(&format!("form/{}/clone", form_id), &FlatParams::new())
    }

    /// Delete a form. The response carries the deleted form's properties.
    pub fn delete_form(&self, form_id: &str) -> Result<Value> {
        self.execute_delete(&format!("form/{}", form_id))
    }
}
