/// Permission entity module
pub mod permission;
/// Personnel entity module
pub mod personnel;
/// Role entity module
pub mod role;
/// Role-permission junction entity module
pub mod role_permission;

pub use permission::Entity as Permission;
pub use personnel::Entity as Personnel;
pub use role::Entity as Role;
pub use role_permission::Entity as RolePermission;
