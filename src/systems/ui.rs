use bevy::prelude::*;

use platformer_game::GameState;

use crate::components::{HudField, HudUi, ScreenOverlay};
use crate::resources::Session;

const HUD_FONT_SIZE: f32 = 18.0;

fn hud_label(field: HudField) -> &'static str {
    match field {
        HudField::Score => "Score",
        HudField::Level => "Level",
        HudField::Health => "Health",
    }
}

pub fn setup_ui(mut commands: Commands) {
    // HUD: three counters along the bottom edge
    let hud = commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    right: Val::Px(0.0),
                    bottom: Val::Px(0.0),
                    height: Val::Px(40.0),
                    ..default()
                },
                background_color: BackgroundColor(Color::NONE),
                visibility: Visibility::Hidden,
                ..default()
            },
            HudUi,
        ))
        .id();
    for (field, left) in [(HudField::Score, 10.0), (HudField::Level, 150.0), (HudField::Health, 310.0)] {
        commands.entity(hud).with_children(|p| {
            p.spawn((
                TextBundle::from_section(
                    format!("{}: 0", hud_label(field)),
                    TextStyle { font_size: HUD_FONT_SIZE, color: Color::BLACK, ..default() },
                )
                .with_style(Style {
                    position_type: PositionType::Absolute,
                    left: Val::Px(left),
                    bottom: Val::Px(10.0),
                    ..default()
                }),
                field,
            ));
        });
    }

    spawn_overlay(
        &mut commands,
        GameState::InstructionsPage0,
        Color::srgb(0.05, 0.05, 0.15),
        "PLATFORMER\n\nCollect coins, dodge poison and spikes,\nreach the right edge of each level.\n\nClick to continue",
    );
    spawn_overlay(
        &mut commands,
        GameState::InstructionsPage1,
        Color::srgb(0.05, 0.05, 0.15),
        "CONTROLS\n\nLeft / A  and  Right / D  to move\nUp / W  to jump\n\nClick to start",
    );
    spawn_overlay(&mut commands, GameState::Lost, Color::srgba(0.0, 0.0, 0.0, 0.55), "GAME OVER\nClick to restart");
    spawn_overlay(&mut commands, GameState::Won, Color::srgba(0.0, 0.0, 0.0, 0.55), "YOU WON!\nClick to restart");
}

fn spawn_overlay(commands: &mut Commands, state: GameState, background: Color, message: &str) {
    let overlay = commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    top: Val::Px(0.0),
                    left: Val::Px(0.0),
                    right: Val::Px(0.0),
                    bottom: Val::Px(0.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                background_color: BackgroundColor(background),
                visibility: Visibility::Hidden,
                ..default()
            },
            ScreenOverlay(state),
        ))
        .id();

    commands.entity(overlay).with_children(|parent| {
        parent
            .spawn(NodeBundle {
                style: Style { padding: UiRect::all(Val::Px(20.0)), ..default() },
                background_color: BackgroundColor(Color::srgb(0.2, 0.0, 0.0)),
                ..default()
            })
            .with_children(|panel| {
                panel.spawn(
                    TextBundle::from_section(
                        message,
                        TextStyle { font_size: 36.0, color: Color::WHITE, ..default() },
                    )
                    .with_text_justify(JustifyText::Center),
                );
            });
    });
}

pub fn update_hud_system(session: Res<Session>, mut q_fields: Query<(&HudField, &mut Text)>) {
    if !session.is_changed() {
        return;
    }
    let game = &session.0;
    for (field, mut text) in q_fields.iter_mut() {
        let value = match field {
            HudField::Score => game.score().to_string(),
            HudField::Level => game.level_index().to_string(),
            HudField::Health => game.health().to_string(),
        };
        if let Some(section) = text.sections.first_mut() {
            section.value = format!("{}: {}", hud_label(*field), value);
        }
    }
}

/// Shows the page for the current state and hides the others.
pub fn screen_visibility_system(
    session: Res<Session>,
    mut q_overlays: Query<(&ScreenOverlay, &mut Visibility), Without<HudUi>>,
    mut q_hud: Query<&mut Visibility, With<HudUi>>,
) {
    let state = session.0.state();
    for (overlay, mut vis) in q_overlays.iter_mut() {
        *vis = if overlay.0 == state { Visibility::Visible } else { Visibility::Hidden };
    }
    if let Ok(mut vis) = q_hud.get_single_mut() {
        *vis = if state.shows_world() { Visibility::Visible } else { Visibility::Hidden };
    }
}
