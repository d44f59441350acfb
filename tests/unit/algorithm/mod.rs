pub mod bitset;
pub mod cache;
pub mod rectangle;
