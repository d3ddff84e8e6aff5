pub mod add;
pub mod search;
pub mod tags;
pub mod variants;
