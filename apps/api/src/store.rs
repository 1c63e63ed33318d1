use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};

use crate::models::resume::{Education, Experience, Skill, SkillUpdate};

/// Everything the API serves, held in process memory.
///
/// List entries are identified by position: the id returned on create is the
/// sequence length before insertion, and deleting an entry shifts every later
/// id down by one. Callers must re-fetch ids after any deletion.
#[derive(Debug, Default)]
struct ResumeData {
    personal_info: Option<Map<String, Value>>,
    experience: Vec<Experience>,
    education: Vec<Education>,
    skill: Vec<Skill>,
}

/// Process-wide resume store. Constructed once in `main` and shared through
/// `AppState`; a single lock covers all sections since every operation
/// completes in bounded time without awaiting.
#[derive(Debug)]
pub struct ResumeStore {
    data: RwLock<ResumeData>,
}

impl ResumeStore {
    /// Builds a store pre-seeded with one example record per section, matching
    /// what the resume front end expects on first load.
    pub fn seeded() -> Self {
        let data = ResumeData {
            personal_info: None,
            experience: vec![Experience {
                title: "Software Developer".to_string(),
                company: "A Cool Company".to_string(),
                start_date: "October 2022".to_string(),
                end_date: "Present".to_string(),
                description: "Writing Python Code".to_string(),
                logo: "example-logo.png".to_string(),
            }],
            education: vec![Education {
                course: "Computer Science".to_string(),
                school: "University of Tech".to_string(),
                start_date: "September 2019".to_string(),
                end_date: "July 2022".to_string(),
                grade: "80%".to_string(),
                logo: "example-logo.png".to_string(),
            }],
            skill: vec![Skill {
                name: "Python".to_string(),
                proficiency: "1-2 Years".to_string(),
                logo: "example-logo.png".to_string(),
            }],
        };
        ResumeStore {
            data: RwLock::new(data),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ResumeData> {
        self.data.read().expect("resume store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, ResumeData> {
        self.data.write().expect("resume store lock poisoned")
    }

    // --- personal info (singleton) ---

    /// Returns the singleton, or `None` if never set (or cleared).
    pub fn personal_info(&self) -> Option<Map<String, Value>> {
        self.read().personal_info.clone()
    }

    /// Replaces the singleton wholesale.
    pub fn set_personal_info(&self, record: Map<String, Value>) {
        self.write().personal_info = Some(record);
    }

    /// Shallow-merges `fields` into the singleton (creating it if unset) and
    /// returns the merged record.
    pub fn merge_personal_info(&self, fields: Map<String, Value>) -> Map<String, Value> {
        let mut data = self.write();
        let record = data.personal_info.get_or_insert_with(Map::new);
        for (key, value) in fields {
            record.insert(key, value);
        }
        record.clone()
    }

    pub fn clear_personal_info(&self) {
        self.write().personal_info = None;
    }

    // --- experience ---

    pub fn experiences(&self) -> Vec<Experience> {
        self.read().experience.clone()
    }

    pub fn experience(&self, index: usize) -> Option<Experience> {
        self.read().experience.get(index).cloned()
    }

    /// Appends and returns the new entry's positional id.
    pub fn add_experience(&self, entry: Experience) -> usize {
        let mut data = self.write();
        data.experience.push(entry);
        data.experience.len() - 1
    }

    // --- education ---

    pub fn educations(&self) -> Vec<Education> {
        self.read().education.clone()
    }

    pub fn education(&self, index: usize) -> Option<Education> {
        self.read().education.get(index).cloned()
    }

    pub fn add_education(&self, entry: Education) -> usize {
        let mut data = self.write();
        data.education.push(entry);
        data.education.len() - 1
    }

    /// Removes and returns the entry at `index`; later entries shift down.
    pub fn remove_education(&self, index: usize) -> Option<Education> {
        let mut data = self.write();
        if index < data.education.len() {
            Some(data.education.remove(index))
        } else {
            None
        }
    }

    // --- skill ---

    pub fn skills(&self) -> Vec<Skill> {
        self.read().skill.clone()
    }

    pub fn skill(&self, index: usize) -> Option<Skill> {
        self.read().skill.get(index).cloned()
    }

    pub fn add_skill(&self, entry: Skill) -> usize {
        let mut data = self.write();
        data.skill.push(entry);
        data.skill.len() - 1
    }

    pub fn remove_skill(&self, index: usize) -> Option<Skill> {
        let mut data = self.write();
        if index < data.skill.len() {
            Some(data.skill.remove(index))
        } else {
            None
        }
    }

    /// Merges the provided fields into the skill at `update.id`, retaining
    /// omitted fields. Returns the updated record, or `None` if the id is out
    /// of range.
    pub fn update_skill(&self, update: SkillUpdate) -> Option<Skill> {
        let mut data = self.write();
        let skill = data.skill.get_mut(update.id)?;
        if let Some(name) = update.name {
            skill.name = name;
        }
        if let Some(proficiency) = update.proficiency {
            skill.proficiency = proficiency;
        }
        if let Some(logo) = update.logo {
            skill.logo = logo;
        }
        Some(skill.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seeded_sections() {
        let store = ResumeStore::seeded();
        assert_eq!(store.experiences().len(), 1);
        assert_eq!(store.educations().len(), 1);
        assert_eq!(store.skills().len(), 1);
        assert!(store.personal_info().is_none());
        assert_eq!(store.skills()[0].name, "Python");
    }

    #[test]
    fn test_add_returns_previous_length() {
        let store = ResumeStore::seeded();
        let id = store.add_skill(Skill {
            name: "Rust".to_string(),
            proficiency: "2 years".to_string(),
            logo: "rust-logo.png".to_string(),
        });
        assert_eq!(id, 1);
        assert_eq!(store.skills().len(), 2);
        assert_eq!(store.skill(id).unwrap().name, "Rust");
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let store = ResumeStore::seeded();
        store.add_skill(Skill {
            name: "Go".to_string(),
            proficiency: "1 year".to_string(),
            logo: "go.png".to_string(),
        });
        store.add_skill(Skill {
            name: "C".to_string(),
            proficiency: "5 years".to_string(),
            logo: "c.png".to_string(),
        });

        let removed = store.remove_skill(1).unwrap();
        assert_eq!(removed.name, "Go");
        // "C" was at index 2 and now answers at index 1.
        assert_eq!(store.skill(1).unwrap().name, "C");
        assert_eq!(store.skills().len(), 2);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let store = ResumeStore::seeded();
        assert!(store.remove_education(5).is_none());
        assert_eq!(store.educations().len(), 1);
    }

    #[test]
    fn test_update_skill_retains_omitted_fields() {
        let store = ResumeStore::seeded();
        let updated = store
            .update_skill(SkillUpdate {
                id: 0,
                name: Some("GoLang".to_string()),
                proficiency: None,
                logo: None,
            })
            .unwrap();
        assert_eq!(updated.name, "GoLang");
        assert_eq!(updated.proficiency, "1-2 Years");
        assert_eq!(updated.logo, "example-logo.png");
    }

    #[test]
    fn test_update_skill_out_of_range() {
        let store = ResumeStore::seeded();
        assert!(store
            .update_skill(SkillUpdate {
                id: 3,
                name: Some("Zig".to_string()),
                proficiency: None,
                logo: None,
            })
            .is_none());
    }

    #[test]
    fn test_personal_info_merge_and_clear() {
        let store = ResumeStore::seeded();
        store.set_personal_info(
            json!({"name": "John Doe", "email": "john.doe@example.com", "phone": "+1234567890"})
                .as_object()
                .unwrap()
                .clone(),
        );

        let merged = store.merge_personal_info(
            json!({"name": "Jane Doe"}).as_object().unwrap().clone(),
        );
        assert_eq!(merged["name"], "Jane Doe");
        assert_eq!(merged["email"], "john.doe@example.com");

        store.clear_personal_info();
        assert!(store.personal_info().is_none());
    }
}
