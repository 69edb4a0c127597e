use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::models::client::Client;
use crate::domain::models::payment::{Payment, PAYMENT_STATUS_PAID};
use crate::domain::models::plan::Plan;

/// Half-open calendar-month interval: [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The last `months` calendar months up to and including the month of
/// `today`, oldest first.
pub fn month_windows(today: NaiveDate, months: u32) -> Vec<MonthWindow> {
    let current_first = today.with_day(1).unwrap_or(today);

    (0..months)
        .rev()
        .filter_map(|back| {
            let start = current_first.checked_sub_months(Months::new(back))?;
            let end = start.checked_add_months(Months::new(1))?;
            Some(MonthWindow { start, end })
        })
        .collect()
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonthlyRevenue {
    /// "YYYY-MM" label of the bucket.
    pub month: String,
    pub revenue_cents: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlanBreakdown {
    pub plan_id: String,
    pub plan_name: String,
    pub subscribers: i64,
    pub revenue_cents: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RevenueReport {
    pub monthly: Vec<MonthlyRevenue>,
    pub total_cents: i64,
    pub arpu_cents: i64,
    pub plan_breakdown: Vec<PlanBreakdown>,
}

/// Aggregates payments, plans and an active-client snapshot into the revenue
/// report. Only `PAID` payments count. Buckets come out in window order
/// (oldest to newest); ARPU is taken over the newest bucket and is 0 when
/// there are no active clients.
pub fn aggregate(
    plans: &[Plan],
    payments: &[Payment],
    active_clients: &[Client],
    windows: &[MonthWindow],
) -> RevenueReport {
    // Index paid amounts by calendar month once, instead of rescanning the
    // payment list per bucket.
    let mut paid_by_month: HashMap<(i32, u32), i64> = HashMap::new();
    for payment in payments {
        if payment.status != PAYMENT_STATUS_PAID {
            continue;
        }
        let date = payment.created_at.date_naive();
        *paid_by_month.entry((date.year(), date.month())).or_insert(0) += payment.amount_cents;
    }

    let monthly: Vec<MonthlyRevenue> = windows
        .iter()
        .map(|w| MonthlyRevenue {
            month: w.start.format("%Y-%m").to_string(),
            revenue_cents: paid_by_month
                .get(&(w.start.year(), w.start.month()))
                .copied()
                .unwrap_or(0),
        })
        .collect();

    let total_cents: i64 = monthly.iter().map(|m| m.revenue_cents).sum();

    let current_cents = monthly.last().map(|m| m.revenue_cents).unwrap_or(0);
    let arpu_cents = if active_clients.is_empty() {
        0
    } else {
        current_cents / active_clients.len() as i64
    };

    let mut subscribers_by_plan: HashMap<&str, i64> = HashMap::new();
    for client in active_clients {
        if let Some(plan_id) = &client.payment_plan_id {
            *subscribers_by_plan.entry(plan_id.as_str()).or_insert(0) += 1;
        }
    }

    let plan_breakdown: Vec<PlanBreakdown> = plans
        .iter()
        .filter(|p| !p.archived)
        .map(|p| {
            let subscribers = subscribers_by_plan.get(p.id.as_str()).copied().unwrap_or(0);
            PlanBreakdown {
                plan_id: p.id.clone(),
                plan_name: p.name.clone(),
                subscribers,
                revenue_cents: subscribers * p.price_cents,
            }
        })
        .collect();

    RevenueReport {
        monthly,
        total_cents,
        arpu_cents,
        plan_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::payment::{NewPaymentParams, PAYMENT_STATUS_FAILED};
    use chrono::{TimeZone, Utc};

    fn payment(status: &str, amount: i64, year: i32, month: u32, day: u32) -> Payment {
        Payment::new(NewPaymentParams {
            gym_id: "g1".to_string(),
            client_id: None,
            plan_id: None,
            amount_cents: amount,
            status: status.to_string(),
            created_at: Some(Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()),
        })
    }

    fn plan(id: &str, price: i64, archived: bool) -> Plan {
        let mut p = Plan::new("g1".to_string(), id.to_string(), price, 1);
        p.id = id.to_string();
        p.archived = archived;
        p
    }

    fn subscriber(plan_id: &str) -> Client {
        use crate::domain::models::client::NewClientParams;
        Client::new(NewClientParams {
            gym_id: "g1".to_string(),
            name: "s".to_string(),
            email: "s@s.com".to_string(),
            user_type: "USER".to_string(),
            payment_plan_id: Some(plan_id.to_string()),
            plan_start_date: None,
            plan_end_date: None,
            tags: vec![],
        })
    }

    #[test]
    fn test_windows_oldest_to_newest() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let windows = month_windows(today, 3);
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(windows[1].start, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(windows[2].start, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(windows[2].end, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_windows_cross_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let windows = month_windows(today, 3);
        assert_eq!(windows[0].start, NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
        assert_eq!(windows[2].start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_paid_counts_failed_does_not() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let windows = month_windows(today, 2);

        let payments = vec![
            payment(PAYMENT_STATUS_PAID, 5000, 2024, 5, 3),
            payment(PAYMENT_STATUS_FAILED, 9000, 2024, 5, 4),
            payment(PAYMENT_STATUS_PAID, 2000, 2024, 4, 20),
        ];

        let report = aggregate(&[], &payments, &[], &windows);
        assert_eq!(report.monthly[0].revenue_cents, 2000);
        assert_eq!(report.monthly[1].revenue_cents, 5000);
        assert_eq!(report.total_cents, 7000);
    }

    #[test]
    fn test_adding_paid_payment_increases_bucket() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let windows = month_windows(today, 2);

        let mut payments = vec![payment(PAYMENT_STATUS_PAID, 1000, 2024, 5, 2)];
        let before = aggregate(&[], &payments, &[], &windows);

        payments.push(payment(PAYMENT_STATUS_PAID, 500, 2024, 5, 9));
        let after = aggregate(&[], &payments, &[], &windows);

        assert!(after.monthly[1].revenue_cents > before.monthly[1].revenue_cents);
        assert!(after.total_cents > before.total_cents);

        payments.push(payment(PAYMENT_STATUS_FAILED, 500, 2024, 5, 9));
        let unchanged = aggregate(&[], &payments, &[], &windows);
        assert_eq!(unchanged.total_cents, after.total_cents);
    }

    #[test]
    fn test_payment_outside_window_ignored() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let windows = month_windows(today, 2);

        let payments = vec![payment(PAYMENT_STATUS_PAID, 3000, 2024, 2, 1)];
        let report = aggregate(&[], &payments, &[], &windows);
        assert_eq!(report.total_cents, 0);
    }

    #[test]
    fn test_arpu_zero_clients_is_defined() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let windows = month_windows(today, 1);
        let payments = vec![payment(PAYMENT_STATUS_PAID, 10000, 2024, 5, 2)];

        let report = aggregate(&[], &payments, &[], &windows);
        assert_eq!(report.arpu_cents, 0);
    }

    #[test]
    fn test_arpu_divides_current_month() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let windows = month_windows(today, 2);
        let payments = vec![
            payment(PAYMENT_STATUS_PAID, 10000, 2024, 5, 2),
            payment(PAYMENT_STATUS_PAID, 99999, 2024, 4, 2),
        ];
        let clients = vec![subscriber("p1"), subscriber("p1"), subscriber("p2"), subscriber("p2")];

        let report = aggregate(&[], &payments, &clients, &windows);
        assert_eq!(report.arpu_cents, 2500);
    }

    #[test]
    fn test_plan_breakdown_skips_archived() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let windows = month_windows(today, 1);
        let plans = vec![plan("p1", 4900, false), plan("p2", 9900, true)];
        let clients = vec![subscriber("p1"), subscriber("p1"), subscriber("p2")];

        let report = aggregate(&plans, &[], &clients, &windows);
        assert_eq!(report.plan_breakdown.len(), 1);
        assert_eq!(report.plan_breakdown[0].plan_id, "p1");
        assert_eq!(report.plan_breakdown[0].subscribers, 2);
        assert_eq!(report.plan_breakdown[0].revenue_cents, 9800);
    }
}
