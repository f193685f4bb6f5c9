pub mod order;
pub mod spend;
