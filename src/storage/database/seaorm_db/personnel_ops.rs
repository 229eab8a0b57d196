use crate::core::models::{IdentityId, Personnel, RoleAssignment, RoleId};
use crate::utils::error::{AccessError, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, personnel};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find personnel by ID
    pub async fn find_personnel(&self, id: IdentityId) -> Result<Option<Personnel>> {
        debug!("Finding personnel by ID: {}", id);

        let model = entities::Personnel::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Look up the role assigned to an identity (single keyed row)
    pub async fn find_role_assignment(&self, id: IdentityId) -> Result<Option<RoleAssignment>> {
        debug!("Finding role assignment for: {}", id);

        let row = entities::Personnel::find_by_id(id.as_uuid())
            .find_also_related(entities::Role)
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(row.and_then(|(_, role)| role).map(|role| RoleAssignment {
            role_id: RoleId(role.id),
            role_name: role.name,
        }))
    }

    /// Insert or update a personnel record
    pub async fn upsert_personnel(&self, record: &Personnel) -> Result<()> {
        debug!("Upserting personnel: {}", record.id);

        entities::Personnel::insert(personnel::Model::from_domain(record))
            .on_conflict(
                OnConflict::column(personnel::Column::Id)
                    .update_columns([
                        personnel::Column::Name,
                        personnel::Column::Email,
                        personnel::Column::RoleId,
                        personnel::Column::Status,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(())
    }

    /// Assign (or clear) the role of a personnel record
    pub async fn assign_role(&self, id: IdentityId, role_id: Option<RoleId>) -> Result<()> {
        debug!("Assigning role {:?} to personnel {}", role_id, id);

        let model = entities::Personnel::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?
            .ok_or_else(|| AccessError::not_found(format!("Personnel not found: {}", id)))?;

        let mut active_model: personnel::ActiveModel = model.into();
        active_model.role_id = Set(role_id.map(|r| r.0));

        active_model
            .update(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(())
    }
}
