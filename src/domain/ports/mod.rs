use crate::domain::models::{
    class::{GymClass, Signup},
    client::Client,
    gym::Gym,
    payment::Payment,
    plan::Plan,
    schedule::{Role, ScheduleAssignment},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

#[async_trait]
pub trait GymRepository: Send + Sync {
    async fn create(&self, gym: &Gym) -> Result<Gym, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Gym>, AppError>;
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, client: &Client) -> Result<Client, AppError>;
    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Client>, AppError>;
    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Client>, AppError>;
    async fn update(&self, client: &Client) -> Result<Client, AppError>;
    async fn delete(&self, gym_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PlanRepository: Send + Sync {
    async fn create(&self, plan: &Plan) -> Result<Plan, AppError>;
    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Plan>, AppError>;
    async fn list_by_gym(&self, gym_id: &str, include_archived: bool) -> Result<Vec<Plan>, AppError>;
    async fn update(&self, plan: &Plan) -> Result<Plan, AppError>;
    async fn set_archived(&self, gym_id: &str, id: &str, archived: bool) -> Result<Plan, AppError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError>;
    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Payment>, AppError>;
    async fn list_since(&self, gym_id: &str, since: DateTime<Utc>) -> Result<Vec<Payment>, AppError>;
}

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn create(&self, class: &GymClass) -> Result<GymClass, AppError>;
    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<GymClass>, AppError>;
    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<GymClass>, AppError>;
    async fn delete(&self, gym_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SignupRepository: Send + Sync {
    async fn create(&self, signup: &Signup) -> Result<Signup, AppError>;
    async fn list_by_class(&self, class_id: &str) -> Result<Vec<Signup>, AppError>;
    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Signup>, AppError>;
    async fn delete(&self, class_id: &str, client_id: &str) -> Result<(), AppError>;
}

/// The weekly role grid. Uniqueness of (gym_id, date, role) lives in the
/// database; `assign` is an upsert, never an insert that can duplicate.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn assign(&self, assignment: &ScheduleAssignment) -> Result<ScheduleAssignment, AppError>;
    /// No-op when the key has no assignment.
    async fn unassign(&self, gym_id: &str, date: NaiveDate, role: &str) -> Result<(), AppError>;
    /// Assignments in the inclusive window [week_start, week_start + 6].
    async fn list_week(&self, gym_id: &str, week_start: NaiveDate) -> Result<Vec<ScheduleAssignment>, AppError>;
    async fn count_by_role(&self, gym_id: &str, role: &str) -> Result<i64, AppError>;
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn create(&self, role: &Role) -> Result<Role, AppError>;
    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Role>, AppError>;
    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Role>, AppError>;
    async fn delete(&self, gym_id: &str, id: &str) -> Result<(), AppError>;
}
