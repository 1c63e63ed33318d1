use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_LOGO: &str = "default-logo.png";

fn default_logo() -> String {
    DEFAULT_LOGO.to_string()
}

/// A single work experience entry. Identified by its position in the
/// experience sequence; the id shifts when an earlier entry is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(default = "default_logo")]
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub course: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
    #[serde(default = "default_logo")]
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: String,
    #[serde(default = "default_logo")]
    pub logo: String,
}

/// PUT /resume/skill payload: positional id plus any subset of updatable
/// fields. Omitted fields are retained on the addressed record.
#[derive(Debug, Deserialize)]
pub struct SkillUpdate {
    pub id: usize,
    pub name: Option<String>,
    pub proficiency: Option<String>,
    pub logo: Option<String>,
}

/// DELETE /resume/skill payload.
#[derive(Debug, Deserialize)]
pub struct SkillDelete {
    pub id: usize,
}

/// POST /resume/personal-info payload. `name`, `email` and `phone` are
/// required; any extra keys are stored verbatim alongside them.
#[derive(Debug, Deserialize)]
pub struct PersonalInfoCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonalInfoCreate {
    /// Flattens the payload into the stored singleton shape.
    pub fn into_record(self) -> Map<String, Value> {
        let mut record = self.extra;
        record.insert("name".to_string(), Value::String(self.name));
        record.insert("email".to_string(), Value::String(self.email));
        record.insert("phone".to_string(), Value::String(self.phone));
        record
    }
}
