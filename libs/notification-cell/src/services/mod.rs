pub mod drafter;
pub mod openai;

pub use drafter::*;
pub use openai::*;
