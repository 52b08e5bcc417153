pub mod create;
pub mod delete;
pub mod limit;
pub mod list;
pub mod rename;
