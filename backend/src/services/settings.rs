//! Site settings as a key/value store

use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use shared::models::{Setting, UpsertSettingInput};

#[derive(Clone)]
pub struct SettingService {
    db: PgPool,
}

const SETTING_COLUMNS: &str = "key, value, updated_at, updated_by";

impl SettingService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<Setting>> {
        let settings = sqlx::query_as::<_, Setting>(&format!(
            "SELECT {SETTING_COLUMNS} FROM settings ORDER BY key"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(settings)
    }

    pub async fn get(&self, key: &str) -> AppResult<Setting> {
        sqlx::query_as::<_, Setting>(&format!(
            "SELECT {SETTING_COLUMNS} FROM settings WHERE key = $1"
        ))
        .bind(key)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Setting".to_string()))
    }

    pub async fn upsert(
        &self,
        admin_id: i64,
        key: &str,
        input: UpsertSettingInput,
    ) -> AppResult<Setting> {
        input
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let setting = sqlx::query_as::<_, Setting>(&format!(
            r#"
            INSERT INTO settings (key, value, updated_by)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW(), updated_by = $3
            RETURNING {SETTING_COLUMNS}
            "#
        ))
        .bind(key)
        .bind(&input.value)
        .bind(admin_id)
        .fetch_one(&self.db)
        .await?;

        Ok(setting)
    }
}
