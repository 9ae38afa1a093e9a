//! Parameter types for the sub-issue tools

mod extract;
mod subissue;

pub use extract::ParamError;
pub use subissue::*;
