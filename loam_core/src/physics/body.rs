// loam_core/src/physics/body.rs
use glam::Vec2;

/// Axis-aligned moving body resolved against the grid each step.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    /// Top-left corner in world units, y-down.
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub velocity: Vec2,
    /// Whether gravity pulls this body.
    pub gravity: bool,
    /// Written by the resolver at the end of every step.
    pub on_ground: bool,
}

impl Body {
    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            position,
            width,
            height,
            velocity: Vec2::ZERO,
            gravity: true,
            on_ground: false,
        }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }
}
