pub mod sqlite_gym_repo;
pub mod sqlite_client_repo;
pub mod sqlite_plan_repo;
pub mod sqlite_payment_repo;
pub mod sqlite_class_repo;
pub mod sqlite_signup_repo;
pub mod sqlite_schedule_repo;
pub mod sqlite_role_repo;

pub mod postgres_gym_repo;
pub mod postgres_client_repo;
pub mod postgres_plan_repo;
pub mod postgres_payment_repo;
pub mod postgres_class_repo;
pub mod postgres_signup_repo;
pub mod postgres_schedule_repo;
pub mod postgres_role_repo;
