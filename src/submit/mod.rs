pub mod builder;
pub mod error;
pub mod options;
pub mod submission;
pub mod transport;

#[cfg(feature = "client")]
pub mod fetch;

pub use builder::*;
pub use error::*;
pub use options::*;
pub use submission::*;
pub use transport::*;

#[cfg(feature = "client")]
pub use fetch::*;
