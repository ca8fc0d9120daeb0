//! checkform Client - concrete Check Item Sources
//!
//! - [`HttpCheckSource`] talks to a remote service over HTTP/JSON
//! - [`FileCheckSource`] serves checks from a local JSON or YAML file

pub mod error;
pub mod file;
pub mod http;

pub use error::{ClientError, ClientResult};
pub use file::FileCheckSource;
pub use http::{HttpCheckSource, CHECKS_PATH, RESULTS_PATH};
