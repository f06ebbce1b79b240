//! Canned users, batches and room content standing in for a backend

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

use super::models::{
    Batch, ChatMessage, MaterialCategory, Poll, SiteConfig, StudyMaterial, User, UserRole,
};

pub fn mock_student() -> User {
    User::new(
        "u1",
        "Alex Johnson",
        UserRole::Student,
        "https://picsum.photos/seed/alex/100/100",
    )
}

pub fn mock_admin() -> User {
    User::new(
        "a1",
        "Dr. Sarah Smith",
        UserRole::Admin,
        "https://picsum.photos/seed/sarah/100/100",
    )
}

/// The mock record a role selector signs in as
pub fn mock_user(role: UserRole) -> User {
    match role {
        UserRole::Student => mock_student(),
        UserRole::Admin => mock_admin(),
    }
}

fn seeded_at(unix_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_secs, 0).unwrap_or_default()
}

fn material(
    id: &str,
    batch_id: &str,
    title: &str,
    category: MaterialCategory,
    file_count: u32,
) -> StudyMaterial {
    StudyMaterial {
        id: id.to_string(),
        title: title.to_string(),
        category,
        file_count,
        batch_id: batch_id.to_string(),
    }
}

/// Initial batch collection, most recent first
pub fn seed_batches() -> Vec<Batch> {
    vec![
        Batch {
            id: "b1".to_string(),
            name: "Physics Excellence 2024".to_string(),
            subject: "Physics".to_string(),
            teacher: "Dr. Sarah Smith".to_string(),
            image: "https://picsum.photos/seed/physics/400/225".to_string(),
            students_count: 1240,
            next_class: "Today, 4:00 PM".to_string(),
            progress: 62,
            price: 4999,
            validity: "31 Mar 2025".to_string(),
            tag: Some("BESTSELLER".to_string()),
            created_at: seeded_at(1_706_745_600),
            materials: vec![
                material("m1", "b1", "Kinematics Handwritten Notes", MaterialCategory::Notes, 3),
                material("m2", "b1", "Laws of Motion DPP 01", MaterialCategory::Dpp, 1),
                material("m3", "b1", "JEE Main 2023 Physics", MaterialCategory::Pyq, 2),
            ],
        },
        Batch {
            id: "b2".to_string(),
            name: "Organic Chemistry Mastery".to_string(),
            subject: "Chemistry".to_string(),
            teacher: "Prof. Mark Lee".to_string(),
            image: "https://picsum.photos/seed/chemistry/400/225".to_string(),
            students_count: 850,
            next_class: "Tomorrow, 10:00 AM".to_string(),
            progress: 35,
            price: 3499,
            validity: "30 Jun 2025".to_string(),
            tag: Some("NEW".to_string()),
            created_at: seeded_at(1_704_067_200),
            materials: vec![
                material("m4", "b2", "GOC Revision Notes", MaterialCategory::Notes, 2),
                material("m5", "b2", "Hydrocarbons Chapter Test", MaterialCategory::Test, 1),
            ],
        },
        Batch {
            id: "b3".to_string(),
            name: "Advanced Calculus Bootcamp".to_string(),
            subject: "Mathematics".to_string(),
            teacher: "James Wilson".to_string(),
            image: "https://picsum.photos/seed/math/400/225".to_string(),
            students_count: 2100,
            next_class: "Monday, 2:00 PM".to_string(),
            progress: 80,
            price: 2999,
            validity: "31 Dec 2024".to_string(),
            tag: None,
            created_at: seeded_at(1_701_388_800),
            materials: vec![material(
                "m6",
                "b3",
                "Limits & Continuity DPP",
                MaterialCategory::Dpp,
                4,
            )],
        },
    ]
}

pub fn default_site_config() -> SiteConfig {
    SiteConfig::default()
}

/// Messages already in the room when an instructor opens it
pub fn seed_chat(now: DateTime<Utc>) -> Vec<ChatMessage> {
    [
        ("1", "u101", "Rahul V.", "Mam, can you repeat the derivation?"),
        ("2", "u102", "Sanya K.", "The audio is a bit low for me."),
        ("3", "u103", "Aryan Singh", "Quantum theory is so interesting!"),
        ("4", "u104", "Sneha J.", "Is this topic in the upcoming test?"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (id, user_id, user_name, text))| ChatMessage {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        text: text.to_string(),
        timestamp: now - Duration::minutes(4 - i as i64),
        is_admin: false,
    })
    .collect()
}

/// Poll shown to students when they enter a live class
pub fn seed_poll() -> Poll {
    Poll {
        id: "p1".to_string(),
        question: "Which of these is a rational number?".to_string(),
        options: vec![
            "√2".to_string(),
            "π".to_string(),
            "0.5".to_string(),
            "e".to_string(),
        ],
        votes: BTreeMap::from([(0, 5), (1, 12), (2, 45), (3, 2)]),
        is_active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_user_matches_role() {
        assert_eq!(mock_user(UserRole::Student).role, UserRole::Student);
        assert_eq!(mock_user(UserRole::Admin).role, UserRole::Admin);
        assert_ne!(mock_student().id, mock_admin().id);
    }

    #[test]
    fn test_seed_batches_have_owned_materials() {
        let batches = seed_batches();
        assert_eq!(batches.len(), 3);
        for batch in &batches {
            assert!(batch.progress <= 100);
            assert!(batch.materials.iter().all(|m| m.batch_id == batch.id));
        }
    }

    #[test]
    fn test_seed_batches_are_most_recent_first() {
        let batches = seed_batches();
        assert!(batches.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_seed_poll_tally_is_in_range() {
        let poll = seed_poll();
        assert!(poll.votes.keys().all(|k| *k < poll.options.len()));
        assert_eq!(poll.leading_option(), Some(2));
    }

    #[test]
    fn test_seed_chat_is_chronological() {
        let chat = seed_chat(Utc::now());
        assert_eq!(chat.len(), 4);
        assert!(chat.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }
}
