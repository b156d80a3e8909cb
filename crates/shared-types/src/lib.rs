pub mod access;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod navigation;
pub mod role;
pub mod session;

pub use access::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use models::*;
pub use navigation::*;
pub use role::*;
pub use session::*;
