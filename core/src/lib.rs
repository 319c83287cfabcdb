pub mod error;
pub mod opt;
pub mod iter;
pub mod guess;
pub mod scope;
pub mod app;

pub use error::{Absent, OptError};
pub use guess::{Guess, RendersAsNan};
pub use opt::Opt;
pub use scope::{Binding, Constructor, Scope, ScopeError};
