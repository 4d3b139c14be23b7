pub mod domain;
pub mod navigation;
pub mod shared;
pub mod system;
