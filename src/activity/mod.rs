//! Activity feed
//!
//! The home dashboard shows recent activity from an [`ActivityProvider`].
//! A real fitness-service client sits behind the same trait; the providers
//! here serve fixed records.

use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One entry of recent activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Short description, e.g. "Sprint drills"
    pub title: String,
    /// Duration in whole minutes, when the activity has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// When the activity was recorded
    pub recorded_at: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn new(
        title: impl Into<String>,
        duration_minutes: Option<u32>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            duration_minutes,
            recorded_at,
        }
    }

    /// Dashboard line, e.g. `• Sprint drills – 20 min`
    pub fn summary(&self) -> String {
        match self.duration_minutes {
            Some(minutes) => format!("• {} – {} min", self.title, minutes),
            None => format!("• {}", self.title),
        }
    }
}

/// Source of recent activity records
#[async_trait]
pub trait ActivityProvider: Send + Sync {
    /// Most recent records, newest first
    async fn fetch_recent_activity(&self) -> Result<Vec<ActivityRecord>>;
}

/// Serves a fixed list of records
#[derive(Debug, Clone, Default)]
pub struct StaticActivityProvider {
    records: Vec<ActivityRecord>,
}

impl StaticActivityProvider {
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl ActivityProvider for StaticActivityProvider {
    async fn fetch_recent_activity(&self) -> Result<Vec<ActivityRecord>> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(records)
    }
}

/// Sample feed shown until a fitness service is connected
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleActivityProvider;

#[async_trait]
impl ActivityProvider for SampleActivityProvider {
    async fn fetch_recent_activity(&self) -> Result<Vec<ActivityRecord>> {
        let now = Utc::now();
        Ok(vec![
            ActivityRecord::new("Upper body workout", Some(45), now - Duration::hours(3)),
            ActivityRecord::new("Sprint drills", Some(20), now - Duration::days(1)),
            ActivityRecord::new("Logged recovery & hydration", None, now - Duration::days(2)),
        ])
    }
}
