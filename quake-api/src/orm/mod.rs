mod db;
pub mod earthquake;
pub mod testing;

pub use db::*;
