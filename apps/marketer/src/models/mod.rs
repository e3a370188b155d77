pub mod item;

pub use item::{ItemRecord, Rank};
