pub mod duplicate_notification;
pub mod edit_item;
pub mod item_fields;
pub mod widgets;

pub use duplicate_notification::*;
pub use edit_item::*;
pub use item_fields::*;
pub use widgets::*;
