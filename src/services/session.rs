use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::UserId;
use tokio::sync::RwLock;

/// Per-user conversation state: the category the user last picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub selected_category: Option<String>,
    pub last_seen: DateTime<Utc>,
}

/// In-memory sessions keyed by Telegram user. Entries are created on the
/// first category selection and evicted once idle longer than the TTL.
#[derive(Clone, Debug)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<UserId, Session>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::hours(24))
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn select_category(&self, user_id: UserId, category: &str) {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(user_id).or_insert_with(|| Session {
            selected_category: None,
            last_seen: Utc::now(),
        });
        session.selected_category = Some(category.to_string());
        session.last_seen = Utc::now();
    }

    /// The user's selected category; refreshes the idle timer when present.
    pub async fn selected_category(&self, user_id: UserId) -> Option<String> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&user_id)?;
        session.last_seen = Utc::now();
        session.selected_category.clone()
    }

    pub async fn get(&self, user_id: UserId) -> Option<Session> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    pub async fn clear(&self, user_id: UserId) -> bool {
        self.sessions.write().await.remove(&user_id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drops sessions idle for longer than the TTL as of `now`. Returns how many.
    pub async fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_seen <= self.ttl);
        before - sessions.len()
    }
}
