use std::sync::Arc;
use crate::domain::ports::{
    ClassRepository, ClientRepository, GymRepository, PaymentRepository,
    PlanRepository, RoleRepository, ScheduleRepository, SignupRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gym_repo: Arc<dyn GymRepository>,
    pub client_repo: Arc<dyn ClientRepository>,
    pub plan_repo: Arc<dyn PlanRepository>,
    pub payment_repo: Arc<dyn PaymentRepository>,
    pub class_repo: Arc<dyn ClassRepository>,
    pub signup_repo: Arc<dyn SignupRepository>,
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub role_repo: Arc<dyn RoleRepository>,
}
