pub mod chunker;
pub mod types;

pub use chunker::chunk_transcript;
pub use types::{AdaptReport, Fragment, FragmentFailure};
