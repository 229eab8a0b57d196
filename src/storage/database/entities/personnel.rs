use crate::core::models::{IdentityId, Personnel, RoleId};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Personnel database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "personnel")]
pub struct Model {
    /// Personnel ID, equal to the identity id
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,

    /// Assigned role
    pub role_id: Option<i32>,

    /// Personnel status
    pub status: String,
}

/// Personnel entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to role relation
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id",
        on_delete = "SetNull"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain personnel
    pub fn to_domain(&self) -> Personnel {
        Personnel {
            id: IdentityId(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            role_id: self.role_id.map(RoleId),
            status: self.status.clone(),
        }
    }

    /// Build an active model from a domain personnel record
    pub fn from_domain(personnel: &Personnel) -> ActiveModel {
        ActiveModel {
            id: Set(personnel.id.as_uuid()),
            name: Set(personnel.name.clone()),
            email: Set(personnel.email.clone()),
            role_id: Set(personnel.role_id.map(|r| r.0)),
            status: Set(personnel.status.clone()),
        }
    }
}
