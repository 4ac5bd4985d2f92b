pub mod input;
pub mod presentation;
pub mod resume;

pub use input::parse_input;
pub use presentation::PresentationConfig;
pub use resume::ResumeData;
