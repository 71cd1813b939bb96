// Résumé analysis engine.
// Pure, synchronous keyword/regex rules over extracted text. No I/O here;
// uploads and PDF parsing live in `upload` and `extraction`.

pub mod analyzer;
pub mod feedback;
pub mod handlers;
pub mod highlights;
pub mod patterns;
pub mod rating;
pub mod report;
pub mod sample;
pub mod sections;
pub mod summary;
pub mod vocabulary;

pub use analyzer::Analyzer;
pub use summary::SummarySelection;
pub use vocabulary::Vocabulary;
