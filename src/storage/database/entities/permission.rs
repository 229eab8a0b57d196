use crate::core::models::Permission;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Permission database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    /// Permission ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Permission key (unique), `<module>.<action>`
    #[sea_orm(unique)]
    pub name: String,

    /// Permission description
    pub description: Option<String>,
}

/// Permission entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Grants of this permission
    #[sea_orm(has_many = "super::role_permission::Entity")]
    RolePermissions,
}

impl Related<super::role_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolePermissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain permission
    pub fn to_domain(&self) -> Permission {
        Permission {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}
