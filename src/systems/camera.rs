use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::resources::Session;

/// A camera showing exactly one logical screen, regardless of window size.
pub fn game_camera(width: f32, height: f32) -> Camera2dBundle {
    let mut cam = Camera2dBundle::default();
    cam.projection.scaling_mode = ScalingMode::Fixed { width, height };
    cam.transform.translation.x = width / 2.0;
    cam.transform.translation.y = height / 2.0;
    cam
}

// Centre of the visible rectangle follows the core viewport
pub fn camera_follow_system(session: Res<Session>, mut q_camera: Query<&mut Transform, With<Camera>>) {
    let game = &session.0;
    let screen = &game.config().screen;
    let (left, _, bottom, _) = game.viewport().bounds(screen);
    if let Ok(mut cam_t) = q_camera.get_single_mut() {
        cam_t.translation.x = left + screen.width / 2.0;
        cam_t.translation.y = bottom + screen.height / 2.0;
    }
}
