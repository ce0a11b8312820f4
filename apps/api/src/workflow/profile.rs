//! Where stage 2 finds user facts when the caller supplies none.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;

/// Self-reported profile collected by a front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub university: String,
    pub faculty: String,
    pub department: String,
    pub graduation_year: String,
    pub club_activities: String,
    pub part_time_job: String,
    pub internship: String,
    pub gakuchika: String,
    pub strengths: String,
    pub values: String,
    pub career_goals: String,
    pub target_industries: Vec<String>,
    pub job_types: Vec<String>,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        *self == UserProfile::default()
    }

    /// Flattens the profile into the `user_info` object the personality
    /// prompt consumes. University, faculty and department collapse into
    /// one field; lists become comma-separated text.
    pub fn to_user_info(&self) -> Value {
        let school = [&self.university, &self.faculty, &self.department]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        json!({
            "name": self.name,
            "university": school,
            "graduation_year": self.graduation_year,
            "club_activities": self.club_activities,
            "part_time_job": self.part_time_job,
            "internship": self.internship,
            "gakuchika": self.gakuchika,
            "strengths": self.strengths,
            "values": self.values,
            "career_goals": self.career_goals,
            "target_industries": self.target_industries.join(", "),
            "job_types": self.job_types.join(", "),
        })
    }
}

#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// The current profile, if one has been stored.
    async fn profile(&self) -> Option<UserProfile>;
}

/// In-memory profile slot shared between a session and its workflow.
#[derive(Clone, Default)]
pub struct SharedProfile {
    inner: Arc<RwLock<Option<UserProfile>>>,
}

impl SharedProfile {
    pub async fn set(&self, profile: UserProfile) {
        *self.inner.write().await = Some(profile);
    }
}

#[async_trait]
impl ProfileProvider for SharedProfile {
    async fn profile(&self) -> Option<UserProfile> {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_user_info_flattens_school_and_lists() {
        let profile = UserProfile {
            name: "山田太郎".into(),
            university: "東京大学".into(),
            faculty: "経済学部".into(),
            target_industries: vec!["金融・銀行".into(), "コンサルティング".into()],
            ..Default::default()
        };

        let info = profile.to_user_info();

        assert_eq!(info["university"], "東京大学 経済学部");
        assert_eq!(info["target_industries"], "金融・銀行, コンサルティング");
        assert_eq!(info["job_types"], "");
    }

    #[tokio::test]
    async fn test_shared_profile_starts_empty_and_keeps_last_write() {
        let shared = SharedProfile::default();
        assert!(shared.profile().await.is_none());

        shared
            .set(UserProfile {
                name: "A".into(),
                ..Default::default()
            })
            .await;
        shared
            .set(UserProfile {
                name: "B".into(),
                ..Default::default()
            })
            .await;

        assert_eq!(shared.profile().await.unwrap().name, "B");
    }
}
