//! Bracket-notation encoding for form-encoded request bodies.
//!
//! Several endpoints take nested data (`submission[3][first]`,
//! `question[text]`, `emails[0][subject]`) flattened into a single level of
//! string pairs. The helpers here build that [`FlatParams`] map from typed
//! inputs. They do no I/O.

use indexmap::IndexMap;

/// Flat form parameters keyed by bracket-notation names.
///
/// Insertion order is kept for readable request logs; inserting an existing
/// key replaces its value.
pub type FlatParams = IndexMap<String, String>;

/// Copy key/value pairs verbatim into a [`FlatParams`] map
pub fn into_params<I, K, V>(pairs: I) -> FlatParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Wrap every key as `<prefix>[<key>]`
fn wrap_keys<I, K, V>(prefix: &str, pairs: I) -> FlatParams
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (format!("{}[{}]", prefix, k.as_ref()), v.into()))
        .collect()
}

/// Encode question fields as `question[<key>]`
pub fn flatten_question<I, K, V>(fields: I) -> FlatParams
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    wrap_keys("question", fields)
}

/// Encode form properties as `properties[<key>]`
pub fn flatten_properties<I, K, V>(properties: I) -> FlatParams
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    wrap_keys("properties", properties)
}

/// How legacy `<qid>_<field>` keys are split into answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRule {
    /// Split every key containing an underscore
    Create,
    /// Like `Create`, but the submission's own `created_at` key is never split
    Edit,
}

/// A single answer in a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAnswer {
    /// Question ID, as listed by `form/<id>/questions`
    pub question_id: String,
    /// Sub-field for compound questions (`first`, `last`, `area`, ...)
    pub field: Option<String>,
    /// Answer value
    pub value: String,
}

impl SubmissionAnswer {
    /// Answer to a simple question
    pub fn new(question_id: impl Into<String>, value: impl Into<String>) -> Self {
        SubmissionAnswer {
            question_id: question_id.into(),
            field: None,
            value: value.into(),
        }
    }

    /// Answer to one sub-field of a compound question
    pub fn with_field(
        question_id: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        SubmissionAnswer {
            question_id: question_id.into(),
            field: Some(field.into()),
            value: value.into(),
        }
    }

    /// Parse a legacy `<qid>_<field>` key.
    ///
    /// The first underscore-separated token is the question ID and the last
    /// one is the field; tokens in between are dropped, so `3_a_b` maps to
    /// question `3`, field `b`. Trailing empty tokens are ignored.
    pub fn from_key(key: &str, value: impl Into<String>, rule: KeyRule) -> Self {
        let splittable = key.contains('_') && !(rule == KeyRule::Edit && key == "created_at");
        if !splittable {
            return SubmissionAnswer::new(key, value);
        }

        let mut tokens: Vec<&str> = key.split('_').collect();
        while tokens.len() > 1 && tokens.last() == Some(&"") {
            tokens.pop();
        }
        let first = tokens.first().copied().unwrap_or_default();
        let last = tokens.last().copied().unwrap_or_default();

        SubmissionAnswer::with_field(first, last, value)
    }

    /// Bracket-notation key for this answer
    pub fn key(&self) -> String {
        match &self.field {
            Some(field) => format!("submission[{}][{}]", self.question_id, field),
            None => format!("submission[{}]", self.question_id),
        }
    }
}

/// Ordered set of answers sent to `form/<id>/submissions` or `submission/<id>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    answers: Vec<SubmissionAnswer>,
}

impl Submission {
    /// Create an empty submission
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a submission from legacy `<qid>_<field>` / `<qid>` keys
    pub fn from_keys<I, K, V>(pairs: I, rule: KeyRule) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| SubmissionAnswer::from_key(k.as_ref(), v, rule))
            .collect()
    }

    /// Add an answer to a simple question
    pub fn answer(mut self, question_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.answers.push(SubmissionAnswer::new(question_id, value));
        self
    }

    /// Add an answer to a sub-field of a compound question
    pub fn answer_field(
        mut self,
        question_id: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.answers
            .push(SubmissionAnswer::with_field(question_id, field, value));
        self
    }

    /// Answers in insertion order
    pub fn answers(&self) -> &[SubmissionAnswer] {
        &self.answers
    }
}

impl FromIterator<SubmissionAnswer> for Submission {
    fn from_iter<T: IntoIterator<Item = SubmissionAnswer>>(iter: T) -> Self {
        Submission {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Encode a submission as `submission[<qid>]` / `submission[<qid>][<field>]`
pub fn flatten_submission(submission: &Submission) -> FlatParams {
    submission
        .answers
        .iter()
        .map(|answer| (answer.key(), answer.value.clone()))
        .collect()
}

/// Definition of a new form for `user/forms`.
///
/// `properties` is a single level of fields; every other category
/// (`questions`, `emails`, ...) holds entries of sub-fields keyed by an
/// index or question ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewForm {
    properties: IndexMap<String, String>,
    categories: IndexMap<String, IndexMap<String, IndexMap<String, String>>>,
}

impl NewForm {
    /// Create an empty form definition
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a form property such as `title` or `height`
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Add a question keyed by its order/ID
    pub fn question<I, K, V>(self, key: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entry("questions", key, fields)
    }

    /// Add a notification email keyed by its index
    pub fn email<I, K, V>(self, key: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entry("emails", key, fields)
    }

    /// Add an entry under an arbitrary category.
    ///
    /// Fields given for the `properties` category are merged into the form
    /// properties, since that category has no entry level.
    pub fn entry<I, K, V>(mut self, category: impl Into<String>, key: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let category = category.into();
        let fields = into_params(fields);
        if category == "properties" {
            self.properties.extend(fields);
            return self;
        }
        self.categories
            .entry(category)
            .or_default()
            .entry(key.into())
            .or_default()
            .extend(fields);
        self
    }
}

/// Encode a form as `properties[<field>]` and `<category>[<key>][<field>]`
pub fn flatten_form(form: &NewForm) -> FlatParams {
    let mut params = wrap_keys("properties", &form.properties);
    for (category, entries) in &form.categories {
        for (key, fields) in entries {
            for (field, value) in fields {
                params.insert(format!("{}[{}][{}]", category, key, field), value.clone());
            }
        }
    }
    params
}
