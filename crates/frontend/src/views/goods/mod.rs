pub mod add;
pub mod categories;
pub mod list;
pub mod update;

pub use add::GoodsAdd;
pub use categories::GoodsCategories;
pub use list::GoodsList;
pub use update::GoodsUpdate;
