//! Domain model for lost and found items.

mod category;
mod ids;
mod item;

pub use category::{ItemCategory, ParseCategoryError};
pub use ids::ItemId;
pub use item::{FoundItem, ItemRecord, ItemReport, LostItem};
