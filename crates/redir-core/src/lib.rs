pub mod config;
pub mod logging;

pub mod driver;
pub mod error;
pub mod options;
pub mod redirect;

pub use driver::{DriverError, InMemoryDriver, RequestContext, StorageDriver};
pub use error::RedirectError;
pub use options::{Options, RedirectOptions};
pub use redirect::RedirectMiddleware;
