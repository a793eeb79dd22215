mod candidates;
mod path;

pub use candidates::Candidates;
pub use path::Path;
