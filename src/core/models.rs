//! Domain types shared by every screen
//!
//! These types carry no behavior beyond small read helpers. All mutation of
//! the cross-screen collections goes through [`crate::core::AppState`].

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role of the signed-in actor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum UserRole {
    #[display("STUDENT")]
    Student,
    #[display("ADMIN")]
    Admin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Human readable label for the navbar
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Admin => "Instructor",
        }
    }
}

/// The signed-in actor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub avatar: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: UserRole,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            avatar: avatar.into(),
        }
    }

    /// First letter of the display name, used as a fallback avatar
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// Kind of study resource attached to a batch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MaterialCategory {
    #[display("NOTES")]
    Notes,
    #[display("DPP")]
    Dpp,
    #[display("TEST")]
    Test,
    #[display("PYQ")]
    Pyq,
}

impl MaterialCategory {
    pub const ALL: [MaterialCategory; 4] = [
        MaterialCategory::Notes,
        MaterialCategory::Dpp,
        MaterialCategory::Test,
        MaterialCategory::Pyq,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MaterialCategory::Notes => "Notes",
            MaterialCategory::Dpp => "DPP",
            MaterialCategory::Test => "Test",
            MaterialCategory::Pyq => "PYQ",
        }
    }

    /// Parse a selector value back into a category (case-insensitive)
    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(value) || c.to_string() == value)
    }
}

/// A resource (notes, DPP, test, PYQ) attached to a batch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyMaterial {
    pub id: String,
    pub title: String,
    pub category: MaterialCategory,
    pub file_count: u32,
    /// Owning batch id
    pub batch_id: String,
}

/// A course offering
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub teacher: String,
    pub image: String,
    pub students_count: u32,
    /// Free-text label such as "Today, 4:00 PM"
    pub next_class: String,
    /// Course completion, 0..=100
    pub progress: u8,
    pub price: u32,
    pub validity: String,
    /// Promotional tag ("NEW", "BESTSELLER", ...)
    pub tag: Option<String>,
    pub created_at: DateTime<Utc>,
    pub materials: Vec<StudyMaterial>,
}

impl Batch {
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn materials_by_category(
        &self,
        category: MaterialCategory,
    ) -> impl Iterator<Item = &StudyMaterial> {
        self.materials.iter().filter(move |m| m.category == category)
    }

    pub fn find_material(&self, material_id: &str) -> Option<&StudyMaterial> {
        self.materials.iter().find(|m| m.id == material_id)
    }
}

/// One chat-room message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_admin: bool,
}

impl ChatMessage {
    /// Timestamp in the live room format, e.g. "14 Mar 2024 04:05 PM"
    pub fn display_time(&self) -> String {
        self.timestamp.format("%d %b %Y %I:%M %p").to_string()
    }
}

/// An instructor-issued multiple-choice question
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Vote tally keyed by option index; keys are always `< options.len()`
    pub votes: BTreeMap<usize, u32>,
    pub is_active: bool,
}

impl Poll {
    pub fn total_votes(&self) -> u32 {
        self.votes.values().sum()
    }

    pub fn votes_for(&self, option: usize) -> u32 {
        self.votes.get(&option).copied().unwrap_or(0)
    }

    /// Share of votes for an option, rounded to a whole percent
    pub fn percentage(&self, option: usize) -> u32 {
        let total = self.total_votes();
        if total == 0 {
            return 0;
        }
        ((self.votes_for(option) as f64 / total as f64) * 100.0).round() as u32
    }

    /// Index of the option with the most votes (lowest index on ties)
    pub fn leading_option(&self) -> Option<usize> {
        if self.total_votes() == 0 {
            return None;
        }
        (0..self.options.len()).max_by(|a, b| {
            self.votes_for(*a)
                .cmp(&self.votes_for(*b))
                .then_with(|| b.cmp(a))
        })
    }

    /// Records one vote. Returns `false` for an inactive poll or an index
    /// outside the option list.
    pub fn record_vote(&mut self, option: usize) -> bool {
        if !self.is_active || option >= self.options.len() {
            return false;
        }
        *self.votes.entry(option).or_insert(0) += 1;
        true
    }
}

/// Landing-page promotional banners
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub hero_banner: String,
    pub trending_banners: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_banner: "https://nexttoppers.com/uploads/banners/1723812833.webp".to_string(),
            trending_banners: vec![
                "https://nexttoppers.com/uploads/banners/1723812833.webp".to_string(),
                "https://nexttoppers.com/uploads/banners/1723812850.webp".to_string(),
                "https://nexttoppers.com/uploads/banners/1723812875.webp".to_string(),
                "https://nexttoppers.com/uploads/banners/1723812885.webp".to_string(),
            ],
        }
    }
}

/// Which screen the controller renders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum AppView {
    #[default]
    #[display("LANDING")]
    Landing,
    #[display("DASHBOARD")]
    Dashboard,
    #[display("LIVE_CLASS")]
    LiveClass,
    #[display("ADMIN_PANEL")]
    AdminPanel,
}

/// Tabs inside the dashboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Batches,
    StudyMaterial,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll() -> Poll {
        Poll {
            id: "p1".to_string(),
            question: "Pick one".to_string(),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            votes: BTreeMap::from([(0, 1), (1, 3)]),
            is_active: true,
        }
    }

    #[test]
    fn test_role_display_matches_wire_names() {
        assert_eq!(UserRole::Student.to_string(), "STUDENT");
        assert_eq!(UserRole::Admin.to_string(), "ADMIN");
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Student.is_admin());
    }

    #[test]
    fn test_view_display() {
        assert_eq!(AppView::LiveClass.to_string(), "LIVE_CLASS");
        assert_eq!(AppView::AdminPanel.to_string(), "ADMIN_PANEL");
        assert_eq!(AppView::default(), AppView::Landing);
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(MaterialCategory::from_label("dpp"), Some(MaterialCategory::Dpp));
        assert_eq!(MaterialCategory::from_label("PYQ"), Some(MaterialCategory::Pyq));
        assert_eq!(MaterialCategory::from_label(" Notes "), Some(MaterialCategory::Notes));
        assert_eq!(MaterialCategory::from_label("video"), None);
    }

    #[test]
    fn test_materials_by_category() {
        let mut batch = crate::core::mock_data::seed_batches().remove(0);
        let batch_id = batch.id.clone();
        batch.materials = [MaterialCategory::Notes, MaterialCategory::Dpp, MaterialCategory::Notes]
            .into_iter()
            .enumerate()
            .map(|(i, category)| StudyMaterial {
                id: format!("m{}", i),
                title: format!("Sheet {}", i),
                category,
                file_count: 1,
                batch_id: batch_id.clone(),
            })
            .collect();

        let notes: Vec<&str> = batch
            .materials_by_category(MaterialCategory::Notes)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(notes, vec!["m0", "m2"]);
        assert_eq!(batch.materials_by_category(MaterialCategory::Pyq).count(), 0);
    }

    #[test]
    fn test_poll_percentages() {
        let poll = poll();
        assert_eq!(poll.total_votes(), 4);
        assert_eq!(poll.percentage(0), 25);
        assert_eq!(poll.percentage(1), 75);
        assert_eq!(poll.percentage(2), 0);
        assert_eq!(poll.leading_option(), Some(1));
    }

    #[test]
    fn test_poll_without_votes() {
        let mut poll = poll();
        poll.votes.clear();
        assert_eq!(poll.percentage(0), 0);
        assert_eq!(poll.leading_option(), None);
    }

    #[test]
    fn test_record_vote_rejects_invalid_index() {
        let mut poll = poll();
        assert!(!poll.record_vote(3));
        assert!(poll.votes.keys().all(|k| *k < poll.options.len()));
        assert!(poll.record_vote(2));
        assert_eq!(poll.votes_for(2), 1);
    }

    #[test]
    fn test_record_vote_on_closed_poll() {
        let mut poll = poll();
        poll.is_active = false;
        assert!(!poll.record_vote(0));
        assert_eq!(poll.votes_for(0), 1);
    }

    #[test]
    fn test_user_initial() {
        let user = User::new("u1", "alex", UserRole::Student, "");
        assert_eq!(user.initial(), "A");
        let nameless = User::new("u2", "", UserRole::Student, "");
        assert_eq!(nameless.initial(), "");
    }
}
