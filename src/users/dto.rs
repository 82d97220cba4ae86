use serde::Deserialize;

use crate::domain::PlanType;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectPlanRequest {
    pub plan: PlanType,
}
