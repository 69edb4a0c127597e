use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::domain::models::client::Client;

const EXPIRING_SOON_DAYS: i64 = 7;
const TRIAL_DAYS: i64 = 14;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MembershipStatus {
    Active,
    ExpiringSoon,
    Expired,
    Trial,
    NoPlan,
}

/// Derives a client's subscription status from its raw plan fields at a given
/// instant. Pure: same client + same `now` always yields the same status.
///
/// Precedence: expired > expiring-soon > trial > active. A client whose short
/// plan both started recently and ends within a week is reported as
/// expiring-soon, not trial. Absent dates degrade to no-plan, never panic.
pub fn resolve_status(client: &Client, now: DateTime<Utc>) -> MembershipStatus {
    if client.payment_plan_id.is_none() {
        return MembershipStatus::NoPlan;
    }

    let Some(end) = client.plan_end_date else {
        return MembershipStatus::NoPlan;
    };

    if end < now {
        return MembershipStatus::Expired;
    }

    let days_until_expiration = end.signed_duration_since(now).num_days();
    if days_until_expiration <= EXPIRING_SOON_DAYS {
        return MembershipStatus::ExpiringSoon;
    }

    if let Some(start) = client.plan_start_date {
        let days_since_start = now.signed_duration_since(start).num_days();
        if (0..TRIAL_DAYS).contains(&days_since_start) {
            return MembershipStatus::Trial;
        }
    }

    MembershipStatus::Active
}

/// A paying member for revenue purposes: anyone whose plan has not lapsed.
pub fn is_active(status: MembershipStatus) -> bool {
    matches!(
        status,
        MembershipStatus::Active | MembershipStatus::ExpiringSoon | MembershipStatus::Trial
    )
}

#[derive(Debug, Serialize, Default, Clone, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: i64,
    pub expiring_soon: i64,
    pub expired: i64,
    pub trial: i64,
    pub no_plan: i64,
}

pub fn count_statuses(clients: &[Client], now: DateTime<Utc>) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for client in clients {
        match resolve_status(client, now) {
            MembershipStatus::Active => counts.active += 1,
            MembershipStatus::ExpiringSoon => counts.expiring_soon += 1,
            MembershipStatus::Expired => counts.expired += 1,
            MembershipStatus::Trial => counts.trial += 1,
            MembershipStatus::NoPlan => counts.no_plan += 1,
        }
    }
    counts
}
