// Fixed help resources shown when an emergency overrides retrieval

use super::EmergencyCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyResource {
    pub message: &'static str,
    pub resources: &'static [&'static str],
}

const SUICIDE: EmergencyResource = EmergencyResource {
    message: "If you're having thoughts of suicide, please reach out for immediate help:",
    resources: &[
        "National Suicide Prevention Lifeline: 1-800-273-8255",
        "Crisis Text Line: Text HOME to 741741",
        "Call 911 or go to your nearest emergency room",
    ],
};

const CRISIS: EmergencyResource = EmergencyResource {
    message: "For immediate crisis support:",
    resources: &[
        "Crisis Text Line: Text HOME to 741741",
        "Disaster Distress Helpline: 1-800-985-5990",
        "Call your local emergency services: 911",
    ],
};

impl EmergencyResource {
    pub fn for_category(category: EmergencyCategory) -> &'static EmergencyResource {
        match category {
            EmergencyCategory::Suicide => &SUICIDE,
            EmergencyCategory::Crisis => &CRISIS,
        }
    }

    /// Message line followed by one line per resource
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.resources.len() + 1);
        lines.push(self.message);
        lines.extend_from_slice(self.resources);
        lines.join("\n")
    }
}
