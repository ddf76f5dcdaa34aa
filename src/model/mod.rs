pub mod build;
pub mod champion;
pub mod class;
pub mod ids;
pub mod item;
