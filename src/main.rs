use bevy::prelude::*;

use dice_roller::plugins::dice_roller::DiceRollerPlugin;

/// Main application function
fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dice Roller".into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(DiceRollerPlugin)
        .run();
}
