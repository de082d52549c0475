mod common;
pub mod config;
mod game;
mod logging;
pub mod prelude;
pub mod protocol;
mod ship;
pub mod transport;

pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use protocol::Response;
pub use ship::*;
pub use transport::{http::HttpTransport, in_memory::InMemoryTransport, Transport};
