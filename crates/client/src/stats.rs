use crate::api::ApiClient;
use shared_types::{DashboardStats, SessionStore};

/// User-visible notice when statistics could not be fetched.
pub const STATS_FAILED_NOTICE: &str = "Failed to load dashboard statistics";

/// Result of loading the admin statistics.
///
/// Never an error: failures degrade to zeroed stats plus a notice so the
/// dashboard still renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsLoad {
    pub stats: DashboardStats,
    pub notice: Option<String>,
    /// The backend rejected the token and the session was cleared.
    pub session_expired: bool,
}

impl StatsLoad {
    fn degraded(notice: impl Into<String>) -> Self {
        Self {
            stats: DashboardStats::default(),
            notice: Some(notice.into()),
            session_expired: false,
        }
    }

    fn expired(notice: impl Into<String>) -> Self {
        Self {
            session_expired: true,
            ..Self::degraded(notice)
        }
    }
}

/// Fetch admin statistics for the stored session.
pub async fn load_admin_stats<S: SessionStore>(api: &ApiClient, store: &mut S) -> StatsLoad {
    let session = store.get();
    let Some(token) = session.token() else {
        return StatsLoad::expired("Please sign in again.");
    };

    match api.admin_stats(token).await {
        Ok(stats) => StatsLoad {
            stats,
            notice: None,
            session_expired: false,
        },
        Err(e) if e.ends_session() => {
            let current = store.get();
            if current.token() == Some(token) {
                tracing::warn!(error = %e, "Token rejected while loading stats, clearing session");
                store.clear();
                StatsLoad::expired(e.friendly_message())
            } else if current.is_authenticated() {
                // A new sign-in replaced the session while the request was in flight.
                tracing::info!("Ignoring stats rejection for a replaced session");
                StatsLoad::degraded(STATS_FAILED_NOTICE)
            } else {
                StatsLoad::expired(e.friendly_message())
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching stats");
            StatsLoad::degraded(STATS_FAILED_NOTICE)
        }
    }
}
