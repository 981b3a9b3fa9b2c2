pub mod inventory;
pub mod reorder;
pub mod forecast;
pub mod prediction;
pub mod bulk;
pub mod training;
