pub mod classifier;
pub mod correlator;
pub mod detector;
pub mod formats;
pub mod lines;
pub mod parser;
pub mod patterns;
pub mod summary;

pub use correlator::{ParseStats, RequestRecord, RequestReport};
pub use parser::{LogParser, ParseOptions};
pub use summary::EndpointSummary;
