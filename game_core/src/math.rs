use glam::Vec2;

/// Velocity for a ball launched at `angle_degrees` with `speed` units per tick.
///
/// `x` holds the horizontal component (`speed * cos`), `y` the vertical one
/// (`speed * sin`). Callers pick the signs.
pub fn bounce_vector(angle_degrees: f32, speed: f32) -> Vec2 {
    let theta = angle_degrees.to_radians();
    Vec2::new(speed * theta.cos(), speed * theta.sin())
}
