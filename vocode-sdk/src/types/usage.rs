//! Account usage.

use serde::Deserialize;
use serde::Serialize;

/// Billing plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanType {
    #[default]
    #[serde(rename = "plan_free")]
    Free,
    #[serde(rename = "plan_developer")]
    Developer,
    #[serde(rename = "plan_enterprise")]
    Enterprise,
    #[serde(rename = "plan_unlimited")]
    Unlimited,
}

/// Monthly usage for the authenticated account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    /// Owning user identifier.
    pub user_id: String,
    /// Billing plan.
    pub plan_type: PlanType,
    /// Minutes used this month.
    pub monthly_usage_minutes: i64,
    /// Monthly minute allowance.
    pub monthly_usage_limit_minutes: i64,
}
