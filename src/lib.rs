//! Gold Derby Oscar odds scraper.
//! Fetches the combined-odds page, extracts every prediction category with its
//! nominees and writes them to a pretty-printed JSON file.

mod error;
mod macros;
pub mod model;
pub mod parse;
pub mod process;
pub mod request;
pub mod write;

pub use error::{Error, Result};
pub use model::{Category, ExtractProfile, Identity, Nominee};

pub const ODDS_URL: &str =
    "https://www.goldderby.com/odds/combined-odds/oscars-2025-predictions/#odds-page";
pub const FILE_PATH: &str = "oscars_predictions.json";
pub const PROFILE: ExtractProfile = ExtractProfile::RICH;
/// Printed to stdout once the output file is written.
pub const SUCCESS_MESSAGE: &str = "JSON file saved successfully.";
