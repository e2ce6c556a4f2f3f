//=========================================================================
// Box State
//=========================================================================
//
// The box's behavioural mode.
//
//   Idle       nothing happens
//   Morphing   physics off, box eases toward its target every tick
//   Kinematic  kinematic body with collision while active
//
// Transitions go through `BoxController::change_state`, which always runs
// `exit` on the old state and `enter` on the new one.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::rig::BoxRig;

//=== BoxState ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxState {
    #[default]
    Idle,
    Morphing,
    Kinematic,
}

impl BoxState {
    //--- Lifecycle --------------------------------------------------------

    pub(crate) fn enter(self, rig: &mut BoxRig) {
        debug!("Entering {} state", self);
        match self {
            Self::Idle => {}
            Self::Morphing => {
                rig.set_kinematic(false);
                rig.set_collision(false);
            }
            Self::Kinematic => {
                rig.set_kinematic(true);
                rig.set_collision(true);
            }
        }
    }

    pub(crate) fn update(self, rig: &mut BoxRig, dt: f32) {
        match self {
            Self::Idle | Self::Kinematic => {}
            Self::Morphing => {
                trace!("Morphing state update (dt: {})", dt);
                rig.lerp_to_target(dt);
            }
        }
    }

    pub(crate) fn exit(self, rig: &mut BoxRig) {
        debug!("Exiting {} state", self);
        if let Self::Kinematic = self {
            rig.set_kinematic(false);
            rig.set_collision(false);
        }
    }
}

impl fmt::Display for BoxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Morphing => "morphing",
            Self::Kinematic => "kinematic",
        };
        f.write_str(name)
    }
}

impl FromStr for BoxState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "idle" => Ok(Self::Idle),
            "morphing" => Ok(Self::Morphing),
            "kinematic" => Ok(Self::Kinematic),
            other => Err(format!("unknown box state '{}'", other)),
        }
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handles::{PhysicsBody, SimBody};

    fn rig_with_body(body: SimBody) -> BoxRig {
        let mut rig = BoxRig::new();
        rig.body = Some(Box::new(body));
        rig
    }

    fn flags(rig: &BoxRig) -> (bool, bool) {
        let body = rig.body.as_ref().unwrap();
        (body.is_kinematic(), body.collision_enabled())
    }

    #[test]
    fn kinematic_enter_and_exit_toggle_flags() {
        let mut rig = rig_with_body(SimBody {
            kinematic: false,
            collision: false,
        });

        BoxState::Kinematic.enter(&mut rig);
        assert_eq!(flags(&rig), (true, true));

        BoxState::Kinematic.exit(&mut rig);
        assert_eq!(flags(&rig), (false, false));
    }

    #[test]
    fn morphing_enter_disables_physics() {
        let mut rig = rig_with_body(SimBody {
            kinematic: true,
            collision: true,
        });

        BoxState::Morphing.enter(&mut rig);
        assert_eq!(flags(&rig), (false, false));
    }

    #[test]
    fn idle_leaves_flags_alone() {
        let mut rig = rig_with_body(SimBody {
            kinematic: true,
            collision: false,
        });

        BoxState::Idle.enter(&mut rig);
        BoxState::Idle.update(&mut rig, 1.0);
        BoxState::Idle.exit(&mut rig);
        assert_eq!(flags(&rig), (true, false));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Morphing".parse::<BoxState>(), Ok(BoxState::Morphing));
        assert!("spinning".parse::<BoxState>().is_err());
    }
}
