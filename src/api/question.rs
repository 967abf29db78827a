use crate::error::Result;
use crate::flatten::flatten_question;
use crate::rest::JotForm;
use serde_json::Value;

impl JotForm {
    /// List all questions of a form with their properties
    pub fn get_form_questions(&self, form_id: &str) -> Result<Value> {
        self.execute_get(&format!("form/{}/questions", form_id))
    }

    /// Get one question's properties, such as `required` and `validation`
    ///
    /// # Arguments
    /// * `form_id` - Form ID
    /// * `qid` - Question ID, as listed by `get_form_questions`
    pub fn get_form_question(&self, form_id: &str, qid: &str) -> Result<Value> {
        self.execute_get(&format!("form/{}/question/{}", form_id, qid))
    }

    /// Add a question to a form, sent as `question[<key>]`
    ///
    /// # Arguments
    /// * `form_id` - Form ID
    /// * `question` - Question properties, e.g. `("type", "control_textbox")`, `("text", "Name")`
    pub fn create_form_question<I, K, V>(&self, form_id: &str, question: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.execute_post(
            &format!("form/{}/questions", form_id),
            &flatten_question(question),
        )
    }

    /// Add several questions from JSON text, sent unmodified
    pub fn create_form_questions(&self, form_id: &str, questions_json: &str) -> Result<Value> {
        self.execute_put(&format!("form/{}/questions", form_id), questions_json)
    }

    /// Add or edit properties of a single question, such as `text` and `order`
    pub fn edit_form_question<I, K, V>(&self, form_id: &str, qid: &str, properties: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.execute_post(
            &format!("form/{}/question/{}", form_id, qid),
            &flatten_question(properties),
        )
    }

    /// Delete a question from a form
    pub fn delete_form_question(&self, form_id: &str, qid: &str) -> Result<Value> {
        self.execute_delete(&format!("form/{}/question/{}", form_id, qid))
    }
}
