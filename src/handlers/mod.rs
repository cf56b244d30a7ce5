pub mod create;
pub mod get;
pub mod health;
pub mod list;

pub use create::create_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
