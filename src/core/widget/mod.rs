//=========================================================================
// Widget Controller
//=========================================================================
//
// Drives the UI widget associated with a box.
//
// Architecture:
//   WidgetController
//     ├─ behaviours: Vec<Box<dyn Behaviour>>   (configuration order)
//     ├─ type_state: WidgetTypeState
//     └─ buttons: Vec<ButtonConfig>
//
// Flow:
//   start(host)    → Behaviour::initialize() for each → type_state.enter()
//   tick(host, dt) → Behaviour::process() for each
//
// The initial type state is entered exactly once, by `start`. Changes
// made before `start` only replace the pending state. The type state's
// update hook is not part of `tick`; hosts that want it call
// `update_type_state` themselves.
//
//=========================================================================

//=== Module Declarations =================================================

mod behaviour;
mod type_state;

//=== Public API ==========================================================

pub use behaviour::{Behaviour, BehaviourRegistry, TraceBehaviour, WidgetContext};
pub use type_state::WidgetTypeState;

//=== External Dependencies ===============================================

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::uibox::BoxView;

//=== ButtonConfig ========================================================

/// Appearance of a button widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub text: String,

    /// RGBA, each channel in `[0, 1]`.
    #[serde(default = "default_color")]
    pub color: [f32; 4],

    /// Host-side prefab to instantiate, if any.
    #[serde(default)]
    pub prefab: Option<String>,
}

fn default_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

//=== WidgetController ====================================================

pub struct WidgetController {
    behaviours: Vec<Box<dyn Behaviour>>,
    type_state: WidgetTypeState,
    buttons: Vec<ButtonConfig>,
    started: bool,
    #[cfg(test)]
    journal: Vec<String>,
}

impl WidgetController {
    //--- Construction -----------------------------------------------------

    /// Creates a controller in the Empty type state.
    pub fn new(behaviours: Vec<Box<dyn Behaviour>>) -> Self {
        Self {
            behaviours,
            type_state: WidgetTypeState::Empty,
            buttons: Vec::new(),
            started: false,
            #[cfg(test)]
            journal: Vec::new(),
        }
    }

    /// Sets the type state that `start` enters.
    pub fn with_type_state(mut self, type_state: WidgetTypeState) -> Self {
        self.type_state = type_state;
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<ButtonConfig>) -> Self {
        self.buttons = buttons;
        self
    }

    //--- Lifecycle --------------------------------------------------------

    /// Initializes every behaviour, then enters the current type state.
    ///
    /// Only the first call has an effect.
    pub fn start(&mut self, host: BoxView<'_>) {
        if self.started {
            warn!("Widget controller already started");
            return;
        }
        self.started = true;

        info!(
            "Starting widget controller ({} behaviours, {} state)",
            self.behaviours.len(),
            self.type_state
        );

        let widget = WidgetContext {
            type_state: self.type_state,
            buttons: &self.buttons,
            host,
        };
        for behaviour in &mut self.behaviours {
            behaviour.initialize(&widget);
        }

        self.enter_type_state();
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Processes every behaviour in configuration order.
    pub fn tick(&mut self, host: BoxView<'_>, dt: f32) {
        let widget = WidgetContext {
            type_state: self.type_state,
            buttons: &self.buttons,
            host,
        };
        for behaviour in &mut self.behaviours {
            behaviour.process(&widget, dt);
        }
    }

    //--- Type State -------------------------------------------------------

    /// Exits the current type state and enters `new_state`.
    ///
    /// Before `start`, nothing has been entered yet, so the state is only
    /// replaced.
    pub fn change_type_state(&mut self, new_state: WidgetTypeState) {
        if !self.started {
            debug!("Widget not started, {} state will be entered on start", new_state);
            self.type_state = new_state;
            return;
        }

        self.exit_type_state();
        self.type_state = new_state;
        self.enter_type_state();
    }

    /// Runs the current type state's per-frame hook.
    pub fn update_type_state(&mut self, dt: f32) {
        self.type_state.update(dt);
        #[cfg(test)]
        self.journal.push(format!("update {}", self.type_state));
    }

    pub fn type_state(&self) -> WidgetTypeState {
        self.type_state
    }

    fn enter_type_state(&mut self) {
        self.type_state.enter();
        #[cfg(test)]
        self.journal.push(format!("enter {}", self.type_state));
    }

    fn exit_type_state(&mut self) {
        self.type_state.exit();
        #[cfg(test)]
        self.journal.push(format!("exit {}", self.type_state));
    }

    #[cfg(test)]
    pub(crate) fn type_state_journal(&self) -> &[String] {
        &self.journal
    }

    //--- Accessors --------------------------------------------------------

    pub fn behaviours(&self) -> &[Box<dyn Behaviour>] {
        &self.behaviours
    }

    pub fn buttons(&self) -> &[ButtonConfig] {
        &self.buttons
    }

    pub fn add_button(&mut self, button: ButtonConfig) {
        self.buttons.push(button);
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::uibox::BoxState;
    use std::sync::{Arc, Mutex};

    type Journal = Arc<Mutex<Vec<String>>>;

    struct Recorder {
        name: String,
        journal: Journal,
    }

    impl Behaviour for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn initialize(&mut self, widget: &WidgetContext<'_>) {
            self.journal
                .lock()
                .unwrap()
                .push(format!("init {} {}", self.name, widget.type_state));
        }

        fn process(&mut self, widget: &WidgetContext<'_>, _dt: f32) {
            self.journal.lock().unwrap().push(format!(
                "process {} {} on {} box {:?}",
                self.name, widget.type_state, widget.host.state, widget.host.text
            ));
        }
    }

    fn recorders(names: &[&str], journal: &Journal) -> Vec<Box<dyn Behaviour>> {
        names
            .iter()
            .map(|name| {
                Box::new(Recorder {
                    name: name.to_string(),
                    journal: Arc::clone(journal),
                }) as Box<dyn Behaviour>
            })
            .collect()
    }

    #[test]
    fn start_initializes_in_order_once() {
        let journal = Journal::default();
        let mut widget = WidgetController::new(recorders(&["a", "b"], &journal));

        widget.start(BoxView::default());
        widget.start(BoxView::default());

        assert!(widget.is_started());
        assert_eq!(*journal.lock().unwrap(), ["init a empty", "init b empty"]);
        assert_eq!(widget.type_state_journal(), ["enter empty"]);
    }

    #[test]
    fn tick_processes_behaviours_in_order() {
        let journal = Journal::default();
        let mut widget = WidgetController::new(recorders(&["first", "second"], &journal));
        widget.start(BoxView::default());
        journal.lock().unwrap().clear();

        widget.change_type_state(WidgetTypeState::Slider);
        let host = BoxView {
            state: BoxState::Morphing,
            text: "Volume",
        };
        widget.tick(host, 0.016);

        assert_eq!(
            *journal.lock().unwrap(),
            [
                "process first slider on morphing box \"Volume\"",
                "process second slider on morphing box \"Volume\""
            ]
        );
    }

    #[test]
    fn initial_type_state_is_entered_once_on_start() {
        let mut widget = WidgetController::new(Vec::new()).with_type_state(WidgetTypeState::Button);
        assert!(widget.type_state_journal().is_empty());

        widget.start(BoxView::default());
        assert_eq!(widget.type_state_journal(), ["enter button"]);
    }

    #[test]
    fn change_before_start_only_replaces_pending_state() {
        let mut widget = WidgetController::new(Vec::new());
        widget.change_type_state(WidgetTypeState::Button);
        widget.change_type_state(WidgetTypeState::Scrollbar);
        assert!(widget.type_state_journal().is_empty());

        widget.start(BoxView::default());
        assert_eq!(widget.type_state(), WidgetTypeState::Scrollbar);
        assert_eq!(widget.type_state_journal(), ["enter scrollbar"]);
    }

    #[test]
    fn change_after_start_exits_then_enters() {
        let mut widget = WidgetController::new(Vec::new()).with_type_state(WidgetTypeState::Button);
        widget.start(BoxView::default());

        widget.change_type_state(WidgetTypeState::Button);
        widget.change_type_state(WidgetTypeState::Slider);

        assert_eq!(widget.type_state(), WidgetTypeState::Slider);
        assert_eq!(
            widget.type_state_journal(),
            [
                "enter button",
                "exit button",
                "enter button",
                "exit button",
                "enter slider"
            ]
        );
    }

    #[test]
    fn update_type_state_runs_current_state_hook() {
        let mut widget = WidgetController::new(Vec::new()).with_type_state(WidgetTypeState::Slider);
        widget.start(BoxView::default());

        widget.update_type_state(0.016);
        widget.tick(BoxView::default(), 0.016);

        // tick alone never reaches the type state
        assert_eq!(widget.type_state_journal(), ["enter slider", "update slider"]);
        assert_eq!(widget.type_state(), WidgetTypeState::Slider);
    }

    #[test]
    fn button_config_defaults_to_white() {
        let button: ButtonConfig = serde_json::from_str(r#"{ "text": "OK" }"#).unwrap();
        assert_eq!(button.color, [1.0; 4]);
        assert!(button.prefab.is_none());
    }
}
