use crate::error::Result;
use crate::rest::JotForm;
use serde_json::Value;

impl JotForm {
    /// Get the details of a plan
    ///
    /// # Arguments
    /// * `plan_name` - Plan name such as `FREE` or `GOLD`
    pub fn get_plan(&self, plan_name: &str) -> Result<Value> {
        self.execute_get(&format!("system/plan/{}", plan_name))
    }
}
