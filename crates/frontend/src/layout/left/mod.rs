pub mod side_menu;

pub use side_menu::SideMenu;
