// Crisis module
// Emergency phrase detection and the fixed help resources for each category

mod detector;
mod resources;

pub use detector::{CrisisKeywords, EmergencyCategory, EmergencyDetector};
pub use resources::EmergencyResource;
