//=========================================================================
// Configuration
//=========================================================================
//
// JSON description of a UIBox, resolved at load time.
//
// Layout:
//   {
//     "box":     { initial_state, morph_speed, text, text_offset,
//                  target_position, target_scale, effects: [names] },
//     "effects": [ EffectDef, ... ],
//     "widget":  { type_state, behaviours: [names], buttons: [...] }
//   }
//
// Every section is optional and falls back to defaults.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::effect::{EffectDef, EffectLibrary, TickSchedule};
use crate::core::uibox::BoxState;
use crate::core::widget::{BehaviourRegistry, ButtonConfig, WidgetController, WidgetTypeState};

//=== ConfigError =========================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

//=== Sections ============================================================

/// Settings of the box controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    pub initial_state: BoxState,
    pub morph_speed: f32,
    pub text: String,
    pub text_offset: Vec3,
    pub target_position: Vec3,
    pub target_scale: Vec3,

    /// Effect names, resolved against the top-level effect library.
    pub effects: Vec<String>,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            initial_state: BoxState::Idle,
            morph_speed: 1.0,
            text: String::new(),
            text_offset: Vec3::ZERO,
            target_position: Vec3::ZERO,
            target_scale: Vec3::ONE,
            effects: Vec::new(),
        }
    }
}

/// Settings of the widget controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub type_state: WidgetTypeState,

    /// Behaviour names, resolved against a [`BehaviourRegistry`].
    pub behaviours: Vec<String>,
    pub buttons: Vec<ButtonConfig>,
}

impl WidgetConfig {
    /// Builds a widget controller in the configured type state.
    ///
    /// The controller is not started; its type state is entered by
    /// [`WidgetController::start`].
    pub fn build(&self, registry: &BehaviourRegistry) -> WidgetController {
        let behaviours = registry.create_all(self.behaviours.iter().map(String::as_str));
        WidgetController::new(behaviours)
            .with_type_state(self.type_state)
            .with_buttons(self.buttons.clone())
    }
}

//=== UiBoxConfig =========================================================

/// Top-level configuration of one UIBox.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiBoxConfig {
    #[serde(rename = "box")]
    pub box_config: BoxConfig,
    pub effects: Vec<EffectDef>,
    pub widget: Option<WidgetConfig>,
}

impl UiBoxConfig {
    //--- Loading ----------------------------------------------------------

    /// Reads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a configuration string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    //--- Validation -------------------------------------------------------

    /// Rejects values the controllers cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let morph_speed = self.box_config.morph_speed;
        if !morph_speed.is_finite() || morph_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "morph_speed must be a non-negative number, got {}",
                morph_speed
            )));
        }

        for def in &self.effects {
            validate_effect(def)?;
        }
        Ok(())
    }

    /// Builds the effect library from the `effects` section.
    pub fn effect_library(&self) -> EffectLibrary {
        EffectLibrary::from_defs(self.effects.iter().cloned())
    }
}

fn validate_effect(def: &EffectDef) -> Result<(), ConfigError> {
    if def.name.is_empty() {
        return Err(ConfigError::Invalid("effect name must not be empty".into()));
    }
    if let Some(tick) = def.tick {
        if !(tick.interval >= TickSchedule::MIN_INTERVAL) {
            return Err(ConfigError::Invalid(format!(
                "effect '{}' has tick interval {}, minimum is {}",
                def.name,
                tick.interval,
                TickSchedule::MIN_INTERVAL
            )));
        }
    }
    def.sub_effects.iter().try_for_each(validate_effect)
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::TickDef;
    use crate::core::uibox::BoxView;

    const SAMPLE: &str = r#"{
        "box": {
            "initial_state": "morphing",
            "morph_speed": 2.5,
            "text": "Start",
            "target_position": [1.0, 2.0, 3.0],
            "effects": ["pulse"]
        },
        "effects": [
            { "name": "pulse", "duration": 2.0, "tick": { "interval": 0.5 } }
        ],
        "widget": {
            "type_state": "button",
            "behaviours": ["trace"],
            "buttons": [ { "text": "Go" } ]
        }
    }"#;

    #[test]
    fn parses_full_config() {
        let config = UiBoxConfig::from_json(SAMPLE).unwrap();

        assert_eq!(config.box_config.initial_state, BoxState::Morphing);
        assert_eq!(config.box_config.morph_speed, 2.5);
        assert_eq!(config.box_config.target_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.box_config.target_scale, Vec3::ONE);
        assert!(config.effect_library().contains("pulse"));

        let widget = config.widget.unwrap();
        assert_eq!(widget.type_state, WidgetTypeState::Button);
        assert_eq!(widget.buttons[0].text, "Go");
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = UiBoxConfig::from_json("{}").unwrap();
        assert_eq!(config, UiBoxConfig::default());
    }

    #[test]
    fn rejects_negative_morph_speed() {
        let err = UiBoxConfig::from_json(r#"{ "box": { "morph_speed": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_nested_zero_tick_interval() {
        let json = r#"{ "effects": [ { "name": "a", "sub_effects": [
            { "name": "b", "tick": { "interval": 0.0 } }
        ] } ] }"#;
        assert!(matches!(UiBoxConfig::from_json(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_sub_millisecond_tick_interval() {
        let json = r#"{
            "effects": [ { "name": "buzz", "tick": { "interval": 1e-12 } } ],
            "box": { "effects": ["buzz"] }
        }"#;
        assert!(matches!(UiBoxConfig::from_json(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_nan_tick_interval() {
        let mut config = UiBoxConfig::default();
        let mut def = EffectDef::new("nan", -1.0);
        def.tick = Some(TickDef {
            interval: f32::NAN,
            window: None,
        });
        config.effects.push(def);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn reports_parse_errors() {
        assert!(matches!(UiBoxConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = UiBoxConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn widget_config_builds_controller_in_type_state() {
        let config = UiBoxConfig::from_json(SAMPLE).unwrap();
        let widget = config
            .widget
            .unwrap()
            .build(&BehaviourRegistry::with_builtins());

        assert_eq!(widget.type_state(), WidgetTypeState::Button);
        assert_eq!(widget.behaviours().len(), 1);
        assert_eq!(widget.buttons().len(), 1);
    }

    #[test]
    fn configured_type_state_is_entered_once() {
        let config = UiBoxConfig::from_json(SAMPLE).unwrap();
        let mut widget = config
            .widget
            .unwrap()
            .build(&BehaviourRegistry::with_builtins());
        assert!(widget.type_state_journal().is_empty());

        widget.start(BoxView::default());
        widget.start(BoxView::default());

        assert_eq!(widget.type_state_journal(), ["enter button"]);
    }
}
