use crate::error::Result;
use crate::flatten::{flatten_submission, Submission};
use crate::rest::JotForm;
use serde_json::Value;

impl JotForm {
    /// List submissions of a form
    pub fn get_form_submissions(&self, form_id: &str) -> Result<Value> {
        self.execute_get(&format!("form/{}/submissions", form_id))
    }

    /// Submit answers to a form.
    ///
    /// Answers are sent as `submission[<qid>]` or `submission[<qid>][<field>]`.
    /// Use [`Submission::from_keys`] with [`KeyRule::Create`](crate::KeyRule::Create)
    /// to build one from `"<qid>_<field>"` style keys.
    ///
    /// Returns the new submission's ID and URL.
    pub fn create_form_submissions(&self, form_id: &str, submission: &Submission) -> Result<Value> {
        self.execute_post(
            &format!("form/{}/submissions", form_id),
            &flatten_submission(submission),
        )
    }

    /// Get the answers and metadata of a submission
    pub fn get_submission(&self, sid: &str) -> Result<Value> {
        self.execute_get(&format!("submission/{}", sid))
    }

    /// Edit a submission's answers.
    ///
    /// When building the submission from legacy keys, use
    /// [`KeyRule::Edit`](crate::KeyRule::Edit): it sends `created_at` as
    /// `submission[created_at]` instead of splitting it like an answer key.
    /// Callers that expect `created_at` to go out as
    /// `submission[created][at]` must build with `KeyRule::Create` instead.
    pub fn edit_submission(&self, sid: &str, submission: &Submission) -> Result<Value> {
        self.execute_post(
            &format!("submission/{}", sid),
            &flatten_submission(submission),
        )
    }

    /// Delete a single submission
    pub fn delete_submission(&self, sid: &str) -> Result<Value> {
        self.execute_delete(&format!("submission/{}", sid))
    }
}
