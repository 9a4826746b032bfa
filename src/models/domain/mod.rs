pub mod diagram;
pub mod flashcard;
pub mod quiz_question;
pub mod transcript;
pub use diagram::Diagram;
pub use flashcard::Flashcard;
pub use quiz_question::{AnswerOrdering, QuizQuestion};
pub use transcript::{CaptionFragment, Transcript};
