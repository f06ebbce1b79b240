//! Form drafts for the instructor control room
//!
//! Each draft holds raw field text while the instructor types and only turns
//! into a domain value through `validate`, so an incomplete form never
//! reaches [`crate::core::AppState`].

use chrono::Utc;

use super::ids::{IdKind, new_id};
use super::models::{Batch, MaterialCategory, Poll, SiteConfig, StudyMaterial};

/// Minimum number of options a poll is launched with
pub const MIN_POLL_OPTIONS: usize = 2;

/// Maximum number of options a poll may carry
pub const MAX_POLL_OPTIONS: usize = 6;

/// Form validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("Progress must be between 0 and 100")]
    ProgressOutOfRange,

    #[error("At least one file is required")]
    NoFiles,

    #[error("Option {0} is empty")]
    EmptyOption(usize),
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

fn number(field: &'static str, value: &str) -> Result<u32, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| FormError::NotANumber {
        field,
        value: trimmed.to_string(),
    })
}

/// Draft for launching or editing a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchDraft {
    pub name: String,
    pub subject: String,
    pub teacher: String,
    pub image: String,
    pub next_class: String,
    pub price: String,
    pub validity: String,
    pub progress: String,
    pub tag: String,
}

/// Fields of a batch draft that passed validation
struct BatchFields {
    name: String,
    subject: String,
    teacher: String,
    image: String,
    next_class: String,
    price: u32,
    validity: String,
    progress: u8,
    tag: Option<String>,
}

impl BatchDraft {
    /// Pre-fill the edit form from an existing batch
    pub fn from_batch(batch: &Batch) -> Self {
        Self {
            name: batch.name.clone(),
            subject: batch.subject.clone(),
            teacher: batch.teacher.clone(),
            image: batch.image.clone(),
            next_class: batch.next_class.clone(),
            price: batch.price.to_string(),
            validity: batch.validity.clone(),
            progress: batch.progress.to_string(),
            tag: batch.tag.clone().unwrap_or_default(),
        }
    }

    fn fields(&self) -> Result<BatchFields, FormError> {
        let progress = number("Progress", &self.progress)?;
        if progress > 100 {
            return Err(FormError::ProgressOutOfRange);
        }
        let image = if self.image.trim().is_empty() {
            "https://picsum.photos/seed/newbatch/400/225".to_string()
        } else {
            self.image.trim().to_string()
        };
        let next_class = if self.next_class.trim().is_empty() {
            "To be announced".to_string()
        } else {
            self.next_class.trim().to_string()
        };
        let tag = Some(self.tag.trim().to_uppercase()).filter(|t| !t.is_empty());

        Ok(BatchFields {
            name: required("Batch name", &self.name)?,
            subject: required("Subject", &self.subject)?,
            teacher: required("Teacher", &self.teacher)?,
            image,
            next_class,
            price: number("Price", &self.price)?,
            validity: self.validity.trim().to_string(),
            progress: progress as u8,
            tag,
        })
    }

    /// Validate and build a brand-new batch with a fresh id
    pub fn into_batch(&self) -> Result<Batch, FormError> {
        let f = self.fields()?;
        Ok(Batch {
            id: new_id(IdKind::Batch),
            name: f.name,
            subject: f.subject,
            teacher: f.teacher,
            image: f.image,
            students_count: 0,
            next_class: f.next_class,
            progress: f.progress,
            price: f.price,
            validity: f.validity,
            tag: f.tag,
            created_at: Utc::now(),
            materials: Vec::new(),
        })
    }

    /// Validate and produce an edited copy of `batch`. Id, materials,
    /// enrolment count and creation time are kept.
    pub fn apply_to(&self, batch: &Batch) -> Result<Batch, FormError> {
        let f = self.fields()?;
        Ok(Batch {
            name: f.name,
            subject: f.subject,
            teacher: f.teacher,
            image: f.image,
            next_class: f.next_class,
            progress: f.progress,
            price: f.price,
            validity: f.validity,
            tag: f.tag,
            ..batch.clone()
        })
    }
}

/// Draft for attaching a study material to a batch
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDraft {
    pub title: String,
    pub category: MaterialCategory,
    pub file_count: String,
}

impl Default for MaterialDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: MaterialCategory::Notes,
            file_count: "1".to_string(),
        }
    }
}

impl MaterialDraft {
    pub fn validate(&self, batch_id: &str) -> Result<StudyMaterial, FormError> {
        let title = required("Title", &self.title)?;
        let file_count = number("File count", &self.file_count)?;
        if file_count == 0 {
            return Err(FormError::NoFiles);
        }
        Ok(StudyMaterial {
            id: new_id(IdKind::Material),
            title,
            category: self.category,
            file_count,
            batch_id: batch_id.to_string(),
        })
    }
}

/// Draft for a multiple-choice poll
#[derive(Debug, Clone, PartialEq)]
pub struct PollDraft {
    pub question: String,
    pub options: Vec<String>,
}

impl Default for PollDraft {
    fn default() -> Self {
        Self {
            question: String::new(),
            options: vec![String::new(); MIN_POLL_OPTIONS],
        }
    }
}

impl PollDraft {
    pub fn add_option(&mut self) {
        if self.options.len() < MAX_POLL_OPTIONS {
            self.options.push(String::new());
        }
    }

    pub fn remove_option(&mut self, index: usize) {
        if self.options.len() > MIN_POLL_OPTIONS && index < self.options.len() {
            self.options.remove(index);
        }
    }

    pub fn set_option(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.options.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn can_add_option(&self) -> bool {
        self.options.len() < MAX_POLL_OPTIONS
    }

    pub fn can_remove_option(&self) -> bool {
        self.options.len() > MIN_POLL_OPTIONS
    }

    /// Build an active poll with an empty tally
    pub fn validate(&self) -> Result<Poll, FormError> {
        let question = required("Question", &self.question)?;
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| {
                let o = o.trim();
                if o.is_empty() {
                    Err(FormError::EmptyOption(i + 1))
                } else {
                    Ok(o.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Poll {
            id: new_id(IdKind::Poll),
            question,
            options,
            votes: Default::default(),
            is_active: true,
        })
    }
}

/// Draft for the landing-page banner editor
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfigDraft {
    pub hero_banner: String,
    pub trending_banners: Vec<String>,
}

impl From<&SiteConfig> for SiteConfigDraft {
    fn from(config: &SiteConfig) -> Self {
        Self {
            hero_banner: config.hero_banner.clone(),
            trending_banners: config.trending_banners.clone(),
        }
    }
}

impl SiteConfigDraft {
    pub fn add_banner(&mut self) {
        self.trending_banners.push(String::new());
    }

    pub fn remove_banner(&mut self, index: usize) {
        if index < self.trending_banners.len() {
            self.trending_banners.remove(index);
        }
    }

    pub fn set_banner(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.trending_banners.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Produce the complete replacement config; blank trending rows are dropped
    pub fn validate(&self) -> Result<SiteConfig, FormError> {
        Ok(SiteConfig {
            hero_banner: required("Hero banner", &self.hero_banner)?,
            trending_banners: self
                .trending_banners
                .iter()
                .map(|b| b.trim())
                .filter(|b| !b.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock_data::seed_batches;

    fn filled_batch_draft() -> BatchDraft {
        BatchDraft {
            name: "Biology Booster".to_string(),
            subject: "Biology".to_string(),
            teacher: "Dr. Meera Rao".to_string(),
            price: "1999".to_string(),
            validity: "31 Jan 2026".to_string(),
            tag: "new".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_batch_draft_requires_name() {
        let draft = BatchDraft {
            name: "   ".to_string(),
            ..filled_batch_draft()
        };
        assert_eq!(draft.into_batch(), Err(FormError::Required("Batch name")));
    }

    #[test]
    fn test_batch_draft_rejects_bad_price() {
        let draft = BatchDraft {
            price: "free".to_string(),
            ..filled_batch_draft()
        };
        assert!(matches!(
            draft.into_batch(),
            Err(FormError::NotANumber { field: "Price", .. })
        ));
    }

    #[test]
    fn test_batch_draft_rejects_progress_over_100() {
        let draft = BatchDraft {
            progress: "101".to_string(),
            ..filled_batch_draft()
        };
        assert_eq!(draft.into_batch(), Err(FormError::ProgressOutOfRange));
    }

    #[test]
    fn test_batch_draft_builds_new_batch() {
        let batch = filled_batch_draft().into_batch().unwrap();
        assert!(batch.id.starts_with("batch-"));
        assert_eq!(batch.price, 1999);
        assert_eq!(batch.tag.as_deref(), Some("NEW"));
        assert_eq!(batch.students_count, 0);
        assert!(batch.materials.is_empty());
        assert!(!batch.image.is_empty());
    }

    #[test]
    fn test_batch_draft_apply_keeps_identity() {
        let seeded = seed_batches().remove(0);
        let mut draft = BatchDraft::from_batch(&seeded);
        draft.next_class = "Sunday, 9:00 AM".to_string();
        draft.tag = String::new();

        let edited = draft.apply_to(&seeded).unwrap();
        assert_eq!(edited.id, seeded.id);
        assert_eq!(edited.materials, seeded.materials);
        assert_eq!(edited.created_at, seeded.created_at);
        assert_eq!(edited.students_count, seeded.students_count);
        assert_eq!(edited.next_class, "Sunday, 9:00 AM");
        assert_eq!(edited.tag, None);
    }

    #[test]
    fn test_material_draft_validation() {
        let mut draft = MaterialDraft::default();
        assert_eq!(draft.validate("b1"), Err(FormError::Required("Title")));

        draft.title = "Electrostatics DPP".to_string();
        draft.file_count = "0".to_string();
        assert_eq!(draft.validate("b1"), Err(FormError::NoFiles));

        draft.file_count = "2".to_string();
        draft.category = MaterialCategory::Dpp;
        let material = draft.validate("b1").unwrap();
        assert_eq!(material.batch_id, "b1");
        assert_eq!(material.category, MaterialCategory::Dpp);
        assert_eq!(material.file_count, 2);
    }

    #[test]
    fn test_poll_draft_option_bounds() {
        let mut draft = PollDraft::default();
        assert_eq!(draft.options.len(), MIN_POLL_OPTIONS);

        draft.remove_option(0);
        assert_eq!(draft.options.len(), MIN_POLL_OPTIONS);

        for _ in 0..10 {
            draft.add_option();
        }
        assert_eq!(draft.options.len(), MAX_POLL_OPTIONS);
        assert!(!draft.can_add_option());

        draft.set_option(99, "ignored");
        assert!(draft.options.iter().all(String::is_empty));
    }

    #[test]
    fn test_poll_draft_requires_every_option() {
        let mut draft = PollDraft {
            question: "Unit of force?".to_string(),
            ..Default::default()
        };
        draft.set_option(0, "Newton");
        assert_eq!(draft.validate(), Err(FormError::EmptyOption(2)));

        draft.set_option(1, "Joule");
        let poll = draft.validate().unwrap();
        assert!(poll.is_active);
        assert!(poll.votes.is_empty());
        assert_eq!(poll.options, vec!["Newton", "Joule"]);
    }

    #[test]
    fn test_site_config_draft_drops_blank_rows() {
        let mut draft = SiteConfigDraft::from(&SiteConfig::default());
        draft.add_banner();
        draft.set_banner(0, "  https://cdn.example/a.webp ");
        let config = draft.validate().unwrap();
        assert_eq!(config.trending_banners.len(), 4);
        assert_eq!(config.trending_banners[0], "https://cdn.example/a.webp");

        draft.hero_banner = String::new();
        assert_eq!(draft.validate(), Err(FormError::Required("Hero banner")));
    }
}
