//! Dashboard counters.

use serde::Serialize;

/// Collection sizes shown on the admin dashboard. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub messages: usize,
    pub subscribers: usize,
    pub blog_posts: usize,
}
