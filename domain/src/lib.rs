pub mod category;
pub mod search;
pub mod slug;
