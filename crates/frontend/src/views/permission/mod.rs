pub mod info;
pub mod roles;

pub use info::PermissionInfo;
pub use roles::PermissionRoles;
