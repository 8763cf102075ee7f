//! Pump CRUD with row-level visibility.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use pumpmaster_core::error::AppError;
use pumpmaster_core::query::{self, ListParams, Page};
use pumpmaster_core::result::AppResult;
use pumpmaster_database::repositories::pump::PumpRepository;
use pumpmaster_entity::pump::{CreatePump, Pump, UpdatePump};

use crate::context::RequestContext;

use super::fields;

/// Handles pump operations.
#[derive(Debug, Clone)]
pub struct PumpService {
    pump_repo: Arc<PumpRepository>,
}

impl PumpService {
    /// Creates a new pump service.
    pub fn new(pump_repo: Arc<PumpRepository>) -> Self {
        Self { pump_repo }
    }

    /// List pumps visible to the caller, filtered/sorted/paged per params.
    pub async fn list(&self, ctx: &RequestContext, params: &ListParams) -> AppResult<Page<Pump>> {
        query::run(
            self.pump_repo.as_ref(),
            fields::registry(),
            ctx.access_scope(),
            params,
        )
        .await
    }

    /// Fetch one pump, enforcing visibility.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Pump> {
        let pump = self
            .pump_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pump not found"))?;

        if !ctx.is_admin() && pump.user_id != ctx.user_id {
            return Err(AppError::authorization(
                "You can only view your own pumps",
            ));
        }

        Ok(pump)
    }

    /// Create a pump owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, data: CreatePump) -> AppResult<Pump> {
        let pump = self
            .pump_repo
            .create(&CreatePump {
                user_id: ctx.user_id,
                ..data
            })
            .await?;

        info!(pump_id = %pump.id, user_id = %ctx.user_id, "Pump created");
        Ok(pump)
    }

    /// Update a pump the caller owns (admins may update any).
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePump,
    ) -> AppResult<Pump> {
        let existing = self
            .pump_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pump not found"))?;

        if !ctx.is_admin() && existing.user_id != ctx.user_id {
            return Err(AppError::authorization(
                "You can only update your own pumps",
            ));
        }

        let pump = self.pump_repo.update(id, &data).await?;
        info!(pump_id = %pump.id, user_id = %ctx.user_id, "Pump updated");
        Ok(pump)
    }

    /// Delete a pump. Admins only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if !ctx.is_admin() {
            return Err(AppError::authorization(
                "Only administrators can delete pumps",
            ));
        }

        let deleted = self.pump_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found("Pump not found"));
        }

        info!(pump_id = %id, user_id = %ctx.user_id, "Pump deleted");
        Ok(())
    }
}
