//=========================================================================
// Widget Type State
//=========================================================================
//
// The kind of UI widget attached to a box. Every variant is currently a
// placeholder: entering, updating and leaving only log.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

//=== WidgetTypeState =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetTypeState {
    #[default]
    Empty,
    Button,
    Slider,
    Scrollbar,
}

impl WidgetTypeState {
    pub(crate) fn enter(self) {
        debug!("Entering {} widget state", self);
    }

    pub(crate) fn update(self, dt: f32) {
        trace!("{} widget state update (dt: {})", self, dt);
    }

    pub(crate) fn exit(self) {
        debug!("Exiting {} widget state", self);
    }
}

impl fmt::Display for WidgetTypeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Button => "button",
            Self::Slider => "slider",
            Self::Scrollbar => "scrollbar",
        };
        f.write_str(name)
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_empty() {
        assert_eq!(WidgetTypeState::default(), WidgetTypeState::Empty);
    }

    #[test]
    fn display_matches_config_names() {
        for state in [
            WidgetTypeState::Empty,
            WidgetTypeState::Button,
            WidgetTypeState::Slider,
            WidgetTypeState::Scrollbar,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state));
        }
    }

    #[test]
    fn parses_snake_case() {
        let state: WidgetTypeState = serde_json::from_str("\"scrollbar\"").unwrap();
        assert_eq!(state, WidgetTypeState::Scrollbar);
        assert!(serde_json::from_str::<WidgetTypeState>("\"Knob\"").is_err());
    }
}
