#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod controller;
pub mod error;
pub mod export;
pub mod i18n;
pub mod input;
pub mod panels;
pub mod shape;
pub mod state;
pub mod surface;
pub mod tools;
pub mod trail;
pub mod util;

pub use app::EaselApp;
pub use controller::CanvasController;
pub use error::ExportError;
pub use i18n::Locale;
pub use input::{PointerEvent, PointerLocation, PointerTracker};
pub use shape::Shape;
pub use state::EditorState;
pub use surface::{Paint, PixelSurface, Snapshot, Surface};
pub use tools::Tool;
