//! Config preview widget.

use serde::Serialize;

/// Selectable model tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Model {
    Swift,
    Balanced,
    Deep,
}

impl Model {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Swift => "swift",
            Self::Balanced => "balanced",
            Self::Deep => "deep",
        }
    }
}

/// A generated settings snapshot.
///
/// Built fresh from the current selection on every call; nothing is cached
/// between generations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub model: Model,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The config preview: three knobs and a snapshot button.
#[derive(Debug)]
pub struct ConfigPreview {
    model: Model,
    temperature: f32,
    max_tokens: u32,
}

impl ConfigPreview {
    pub fn new() -> Self {
        Self {
            model: Model::Balanced,
            temperature: 0.7,
            max_tokens: 4096,
        }
    }

    pub fn set_model(&mut self, model: Model) {
        self.model = model;
    }

    /// Slider range 0.0 to 2.0; out-of-range input clamps.
    pub fn set_temperature(&mut self, temperature: f32) {
        self.temperature = temperature.clamp(0.0, 2.0);
    }

    /// At least one token; the slider tops out at 32768.
    pub fn set_max_tokens(&mut self, max_tokens: u32) {
        self.max_tokens = max_tokens.clamp(1, 32_768);
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Generate a snapshot of the selection as it stands right now.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            model: self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// The snapshot as pretty-printed JSON, as shown in the widget.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

impl Default for ConfigPreview {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_reflects_selection_at_generation_time() {
        let mut preview = ConfigPreview::new();

        let before = preview.snapshot();
        assert_eq!(before.model, Model::Balanced);

        preview.set_model(Model::Deep);
        preview.set_temperature(0.2);
        preview.set_max_tokens(1024);

        // A fresh snapshot sees the new values; the old one is untouched
        let after = preview.snapshot();
        assert_eq!(after.model, Model::Deep);
        assert_eq!(after.temperature, 0.2);
        assert_eq!(after.max_tokens, 1024);
        assert_eq!(before.model, Model::Balanced);
    }

    #[test]
    fn snapshot_json_carries_current_values() {
        let mut preview = ConfigPreview::new();
        preview.set_model(Model::Swift);
        preview.set_max_tokens(512);

        let json = preview.snapshot_json().unwrap();

        assert!(json.contains("\"swift\""));
        assert!(json.contains("512"));
    }

    #[test]
    fn knobs_clamp_to_their_ranges() {
        let mut preview = ConfigPreview::new();

        preview.set_temperature(9.5);
        assert_eq!(preview.temperature(), 2.0);

        preview.set_temperature(-1.0);
        assert_eq!(preview.temperature(), 0.0);

        preview.set_max_tokens(0);
        assert_eq!(preview.max_tokens(), 1);

        preview.set_max_tokens(1_000_000);
        assert_eq!(preview.max_tokens(), 32_768);
    }
}
