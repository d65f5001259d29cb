pub mod ids;
pub mod patch;
pub mod resume;
pub mod rich_text;
pub mod sample;

pub use ids::EntityId;
pub use resume::{Entry, Record, Resume, Section, SectionKind};
pub use rich_text::RichText;
