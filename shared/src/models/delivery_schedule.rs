//! Delivery schedule model (date plus a time window)

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::EntityStatus;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DeliverySchedule {
    pub id: i64,
    pub delivery_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDeliveryScheduleInput {
    pub delivery_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDeliveryScheduleInput {
    pub delivery_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: Option<EntityStatus>,
}
