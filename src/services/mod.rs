pub mod categories;
pub mod completion;
pub mod relay;
