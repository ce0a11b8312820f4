//! In-memory session store. One workflow and one profile slot per session.
//! Sessions idle for longer than the store's TTL are dropped.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::company::source::CompanyDataSource;
use crate::llm_client::ModelGateway;
use crate::workflow::orchestrator::Workflow;
use crate::workflow::profile::SharedProfile;

/// Idle lifetime used when none is configured.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 2 * 60 * 60;

/// Handle to one session. Clones share the same workflow and profile.
#[derive(Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Locked for the whole of a stage, so stages on one session run one at a time.
    pub workflow: Arc<Mutex<Workflow>>,
    pub profile: SharedProfile,
}

struct Entry {
    session: Session,
    last_access: DateTime<Utc>,
}

impl Entry {
    fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_access > ttl
    }
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_SESSION_TTL_SECS))
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Opens a session whose workflow reads the session's own profile slot.
    /// Idle sessions are evicted first.
    pub async fn create(
        &self,
        gateway: Arc<dyn ModelGateway>,
        company_source: Arc<dyn CompanyDataSource>,
    ) -> Session {
        let now = Utc::now();
        self.evict_idle(now).await;

        let profile = SharedProfile::default();
        let workflow = Workflow::new(gateway)
            .with_company_source(company_source)
            .with_profile_provider(Arc::new(profile.clone()));
        let session = Session {
            id: Uuid::new_v4(),
            created_at: now,
            workflow: Arc::new(Mutex::new(workflow)),
            profile,
        };

        self.sessions.write().await.insert(
            session.id,
            Entry {
                session: session.clone(),
                last_access: now,
            },
        );
        info!("Session {} opened", session.id);
        session
    }

    /// Looks a session up and marks it as used.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.get_at(id, Utc::now()).await
    }

    async fn get_at(&self, id: Uuid, now: DateTime<Utc>) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        if sessions.get(&id)?.is_idle(now, self.ttl) {
            sessions.remove(&id);
            info!("Session {id} expired");
            return None;
        }
        let entry = sessions.get_mut(&id)?;
        entry.last_access = now;
        Some(entry.session.clone())
    }

    /// Returns false when no such session existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Session {id} closed");
        }
        removed
    }

    /// Drops every session idle for longer than the TTL at `now`.
    /// Returns how many were dropped.
    pub async fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_idle(now, self.ttl));
        before - sessions.len()
    }

    /// Runs `evict_idle` on a fixed period until the runtime shuts down.
    pub fn spawn_sweeper(&self, every: std::time::Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(every);
            loop {
                ticks.tick().await;
                let evicted = store.evict_idle(Utc::now()).await;
                if evicted > 0 {
                    info!("Evicted {evicted} idle sessions");
                } else {
                    debug!("Session sweep found nothing idle");
                }
            }
        })
    }
}
