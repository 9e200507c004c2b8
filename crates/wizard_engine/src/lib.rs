#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use
)]
//! Text transformation engine behind the text wizard tools:
//! emoji pixel art, Unicode letter styles and text repetition.

mod error;
pub use error::*;

pub mod atlas;
pub use atlas::{Atlas, Bitmap};

pub mod pixel_art;
pub use pixel_art::{render_pixel_art, Layout, PixelTarget};

pub mod probe;
pub use probe::{AssumeRenderable, CodepointCeiling, FontStackProbe, RenderProbe};

pub mod compatibility;
pub use compatibility::CompatibilityReport;

pub mod styles;
pub use styles::{find_style, transform_named, transform_styles, Style, StyledText};

pub mod repeater;
pub use repeater::{parse_count, repeat_text, RepeatRequest, Separator};

pub mod effects;
pub use effects::{Clipboard, FontAvailability};

pub mod palette;
