//! Element-specific AST node definitions for the deck language
//!
//!     A deck is a [Model](model::Model): components, slides, and optional deck-wide theme,
//!     header and footer.
//!
//!     Element Types
//!
//!         - Components: named templates with one root box. See [component](component).
//!         - Slides: one content box each, plus header/footer overrides. See [slide](slide).
//!         - Boxes: containers, terminals and call sites. See [boxes](boxes).
//!         - Terminals: text, image, video, list, code. See [terminal](terminal).
//!         - Quizzes: single-player quizzes and live polls. See [quiz](quiz).
//!         - Attributes: key plus optional value on any box. See [attribute](attribute).
//!
//!     Nesting
//!
//!         Slots only exist inside component templates. Slide content, slot fills and slot
//!         defaults use [SlideBox](boxes::SlideBox), which has no slot variant, so a slot
//!         leaking into a slide is ruled out at compile time.

pub mod attribute;
pub mod boxes;
pub mod component;
pub mod model;
pub mod quiz;
pub mod slide;
pub mod terminal;

pub use attribute::{Attribute, AttributeValue};
pub use boxes::{
    ComponentBox, ComponentBoxReference, ComponentContentBox, ComponentSlot, Container,
    ContentBox, SlideBox, SlotFill, Terminal,
};
pub use component::Component;
pub use model::Model;
pub use quiz::{LiveQuizBox, QuizBox, QuizKind, QuizOption};
pub use slide::{Footer, Header, Slide, SlideRegion, Theme};
pub use terminal::{CodeBox, ImageBox, ListBox, TextBox, VideoBox};
