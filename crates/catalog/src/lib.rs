#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod assets;
mod document;

pub use assets::{ASSET_HOST, still_image_url};
pub use document::{CatalogDocument, ExerciseRecord, ParseError, RemovedExercise};
