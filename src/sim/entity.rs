//! The unified game entity
//!
//! Paddle, ball and blocks share one representation; their roles are applied
//! by the tick, not by the type. Every shape is positioned by the top-left of
//! its bounding box. A circle is inscribed in that box, so its radius is
//! `width / 2`.

use glam::Vec2;

use super::collision::{Aabb, intersects};
use crate::Color;

/// How an entity is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Rectangle,
    Circle,
}

/// Liveness of an entity slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityState {
    #[default]
    Active,
    /// Struck block; the slot stays in place until the next level reset
    Destroyed,
}

/// A paddle, ball or block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameObject {
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub shape: Shape,
    pub state: EntityState,
}

impl GameObject {
    /// Create a resting rectangle
    pub fn new(position: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            width: size.x,
            height: size.y,
            color,
            shape: Shape::Rectangle,
            state: EntityState::Active,
        }
    }

    /// Create a resting circle inscribed in a `diameter`-sided square
    pub fn circle(position: Vec2, diameter: f32, color: Color) -> Self {
        Self {
            shape: Shape::Circle,
            ..Self::new(position, Vec2::splat(diameter), color)
        }
    }

    /// Destroyed entities are skipped by integration, drawing and collision.
    /// A zero extent counts as destroyed as well.
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.state == EntityState::Destroyed || self.width == 0.0 || self.height == 0.0
    }

    pub fn destroy(&mut self) {
        self.state = EntityState::Destroyed;
    }

    /// Advance position by one tick of velocity
    #[inline]
    pub fn integrate(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.position += self.velocity;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec2 {
        self.position + self.size() * 0.5
    }

    /// Box overlap test; destroyed entities never overlap anything
    pub fn overlaps(&self, other: &GameObject) -> bool {
        !self.is_destroyed() && !other.is_destroyed() && intersects(&self.bounds(), &other.bounds())
    }
}
