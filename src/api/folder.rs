use crate::error::Result;
use crate::flatten::into_params;
use crate::rest::JotForm;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Folder membership update body: `{"forms": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderForms {
    /// Form IDs to place in the folder
    pub forms: Vec<String>,
}

impl FolderForms {
    /// Build the body from a list of form IDs
    pub fn new<I, S>(form_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FolderForms {
            forms: form_ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl JotForm {
    /// Get a folder with its forms and details such as color
    pub fn get_folder(&self, folder_id: &str) -> Result<Value> {
        self.execute_get(&format!("folder/{}", folder_id))
    }

    /// Create a folder from its properties (`name`, `parent`, `color`, ...)
    pub fn create_folder<I, K, V>(&self, properties: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.execute_post("folder", &into_params(properties))
    }

    /// Delete a folder and its subfolders
    pub fn delete_folder(&self, folder_id: &str) -> Result<Value> {
        self.execute_delete(&format!("folder/{}", folder_id))
    }

    /// Update a folder
    ///
    /// # Arguments
    /// * `folder_id` - Folder ID, as listed by `get_folders`
    /// * `properties_json` - New properties as JSON text, sent unmodified
    pub fn update_folder(&self, folder_id: &str, properties_json: &str) -> Result<Value> {
        self.execute_put(&format!("folder/{}", folder_id), properties_json)
    }

    /// Move forms into a folder
    pub fn add_forms_to_folder<I, S>(&self, folder_id: &str, form_ids: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = serde_json::to_string(&FolderForms::new(form_ids))?;
        self.update_folder(folder_id, &body)
    }

    /// Move a single form into a folder
    pub fn add_form_to_folder(&self, folder_id: &str, form_id: &str) -> Result<Value> {
        self.add_forms_to_folder(folder_id, [form_id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_forms_body() {
        let body = serde_json::to_string(&FolderForms::new(["1", "2"])).unwrap();
        assert_eq!(body, r#"{"forms":["1","2"]}"#);
    }

    #[test]
    fn test_folder_forms_matches_literal_json() {
        let typed = serde_json::to_string(&FolderForms::new(["31"])).unwrap();
        let literal = serde_json::json!({"forms": ["31"]}).to_string();
        assert_eq!(typed, literal);
    }
}
