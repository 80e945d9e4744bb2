mod category;
mod descriptor;
mod error;
mod interpreter;
mod result;
mod summary;
pub mod util;

pub use category::{CATEGORIES, is_known_category};
pub use descriptor::CheckDescriptor;
pub use error::{Error, Result};
pub use interpreter::InterpreterKind;
pub use result::{CheckStatus, ExecutionResult};
pub use summary::RunSummary;
