use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::services::session::SessionStore;
use crate::utils::logging::log_system_event;

/// Every ten minutes, on the minute.
const SWEEP_SCHEDULE: &str = "0 */10 * * * *";

pub struct SessionSweeper {
    sessions: SessionStore,
    scheduler: JobScheduler,
}

impl SessionSweeper {
    pub async fn new(sessions: SessionStore) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            sessions,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let sessions = self.sessions.clone();

        let sweep_job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _l| {
            let sessions = sessions.clone();
            Box::pin(async move {
                sweep(&sessions).await;
            })
        })?;

        self.scheduler.add(sweep_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Session sweeper started - evicting sessions idle for more than {}s",
            self.sessions.ttl().num_seconds()
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn sweep_now(&self) -> usize {
        sweep(&self.sessions).await
    }
}

async fn sweep(sessions: &SessionStore) -> usize {
    let evicted = sessions.evict_idle(Utc::now()).await;
    if evicted > 0 {
        log_system_event("Session sweep", Some(&format!("evicted {evicted} idle sessions")));
    }
    evicted
}
