pub mod inventory;
pub mod reorder;
