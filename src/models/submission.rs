use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

/// Fields posted by the registration form. A key missing from the body
/// deserializes to `None`, an empty value to `Some("")`.
///
/// When a key is repeated the first value wins; later values and unknown
/// keys are ignored.
#[derive(Debug, Default)]
pub struct Submission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl<'de> Deserialize<'de> for Submission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SubmissionVisitor)
    }
}

struct SubmissionVisitor;

impl<'de> Visitor<'de> for SubmissionVisitor {
    type Value = Submission;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("form fields name, email and password")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut submission = Submission::default();

        while let Some(key) = map.next_key::<String>()? {
            let slot = match key.as_str() {
                "name" => &mut submission.name,
                "email" => &mut submission.email,
                "password" => &mut submission.password,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };

            if slot.is_some() {
                map.next_value::<IgnoredAny>()?;
            } else {
                *slot = Some(map.next_value()?);
            }
        }

        Ok(submission)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Registered { name: String },
    FieldsRequired,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Registered { name } => {
                write!(f, "Registration Successful! Welcome, {}.", name)
            }
            Outcome::FieldsRequired => write!(f, "All fields are required!"),
        }
    }
}
