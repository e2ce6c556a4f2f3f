//=========================================================================
// Host Handles
//=========================================================================
//
// Collaborator boundary between the UIBox core and the host engine.
//
// The core never owns a scene graph, a physics world or a text renderer.
// It reads and writes them through these traits:
//
//   TransformHandle  position + local scale
//   PhysicsBody      kinematic flag + collision flag
//   TextLabel        text + layout rectangle
//
// The `Sim*` types are plain in-memory implementations used when no
// engine is attached (tests, the `uibox-sim` binary).
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Vec2, Vec3};

//=== TransformHandle =====================================================

/// Read/write access to an engine transform.
pub trait TransformHandle: Send {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn local_scale(&self) -> Vec3;
    fn set_local_scale(&mut self, scale: Vec3);
}

//=== PhysicsBody =========================================================

/// Physics flags of the box's rigid body and collider.
pub trait PhysicsBody: Send {
    fn is_kinematic(&self) -> bool;
    fn set_kinematic(&mut self, kinematic: bool);
    fn collision_enabled(&self) -> bool;
    fn set_collision_enabled(&mut self, enabled: bool);
}

//=== TextLabel ===========================================================

/// Text label attached to the box.
///
/// Layout is expressed relative to the label's parent canvas: a local
/// position and a size (width, height).
pub trait TextLabel: Send {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
    fn local_position(&self) -> Vec3;
    fn set_local_position(&mut self, position: Vec3);
    fn size(&self) -> Vec2;
    fn set_size(&mut self, size: Vec2);
}

//=== In-Memory Implementations ===========================================

/// Transform stored in memory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimTransform {
    pub position: Vec3,
    pub scale: Vec3,
}

impl SimTransform {
    pub fn new(position: Vec3, scale: Vec3) -> Self {
        Self { position, scale }
    }
}

impl Default for SimTransform {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ONE)
    }
}

impl TransformHandle for SimTransform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn local_scale(&self) -> Vec3 {
        self.scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

/// Physics flags stored in memory.
///
/// Starts non-kinematic with collision enabled, like a fresh rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimBody {
    pub kinematic: bool,
    pub collision: bool,
}

impl Default for SimBody {
    fn default() -> Self {
        Self {
            kinematic: false,
            collision: true,
        }
    }
}

impl PhysicsBody for SimBody {
    fn is_kinematic(&self) -> bool {
        self.kinematic
    }

    fn set_kinematic(&mut self, kinematic: bool) {
        self.kinematic = kinematic;
    }

    fn collision_enabled(&self) -> bool {
        self.collision
    }

    fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision = enabled;
    }
}

/// Label stored in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimLabel {
    pub text: String,
    pub position: Vec3,
    pub size: Vec2,
}

impl TextLabel for SimLabel {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    fn local_position(&self) -> Vec3 {
        self.position
    }

    fn set_local_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_transform_defaults_to_unit_scale_at_origin() {
        let transform = SimTransform::default();
        assert_eq!(transform.position(), Vec3::ZERO);
        assert_eq!(transform.local_scale(), Vec3::ONE);
    }

    #[test]
    fn sim_body_starts_dynamic_with_collision() {
        let body = SimBody::default();
        assert!(!body.is_kinematic());
        assert!(body.collision_enabled());
    }

    #[test]
    fn sim_label_replaces_text() {
        let mut label = SimLabel::default();
        label.set_text("hello");
        label.set_text("bye");
        assert_eq!(label.text(), "bye");
    }
}
