pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod operation;
pub mod registry;

pub use config::Settings;
pub use error::{CalcError, CalcResult};
pub use operation::{BUILTINS, Builtin, Operation};
pub use registry::OperationRegistry;
