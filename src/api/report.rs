use crate::error::Result;
use crate::flatten::into_params;
use crate::rest::JotForm;
use serde_json::Value;

impl JotForm {
    /// List reports of a form (excel, csv, grid, html, ...)
    pub fn get_form_reports(&self, form_id: &str) -> Result<Value> {
        self.execute_get(&format!("form/{}/reports", form_id))
    }

    /// Create a report for a form
    ///
    /// # Arguments
    /// * `form_id` - Form ID
    /// * `report` - Report details such as `list_type` and `title`
    ///
    /// # Returns
    /// The report's details and URL
    pub fn create_report<I, K, V>(&self, form_id: &str, report: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.execute_post(&format!("form/{}/reports", form_id), &into_params(report))
    }

    /// Get a report's fields and status
    pub fn get_report(&self, report_id: &str) -> Result<Value> {
        self.execute_get(&format!("report/{}", report_id))
    }

    /// Delete a report
    pub fn delete_report(&self, report_id: &str) -> Result<Value> {
        self.execute_delete(&format!("report/{}", report_id))
    }
}
