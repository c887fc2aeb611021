//! Touch input handling for mobile/touchscreen support.
//! The screen is one big button: a tap anywhere (or a left click on
//! desktop) asks the sequencer for a roll.

use bevy::prelude::*;

use crate::utils::constants::touch_constants::{TAP_MAX_DISTANCE, TAP_MAX_DURATION_SECS};

/// Resource to track the active touch for tap recognition
#[derive(Resource, Default)]
pub struct TouchState {
    pub active_touch_id: Option<u64>,
    pub start_position: Option<Vec2>,
    pub touch_start_time: Option<f32>,
    pub is_potential_tap: bool,
}

/// Message fired when a tap is detected
#[derive(Message, Clone, Debug, Default)]
pub struct TapEvent;

/// Plugin for tap input handling
pub struct TapInputPlugin;

impl Plugin for TapInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchState>()
            .add_message::<TapEvent>()
            .add_systems(Update, (track_touch_taps, track_mouse_taps));
    }
}

/// System to track touches and emit a tap when a press is released quickly
/// without travelling
pub fn track_touch_taps(
    touches: Res<Touches>,
    time: Res<Time>,
    mut touch_state: ResMut<TouchState>,
    mut taps: MessageWriter<TapEvent>,
) {
    let current_time = time.elapsed_secs();

    // Handle new touch starts; extra fingers are ignored
    for touch in touches.iter_just_pressed() {
        if touch_state.active_touch_id.is_none() {
            touch_state.active_touch_id = Some(touch.id());
            touch_state.start_position = Some(touch.position());
            touch_state.touch_start_time = Some(current_time);
            touch_state.is_potential_tap = true;
        }
    }

    // Check if the finger moved too far to be a tap
    for touch in touches.iter() {
        if Some(touch.id()) == touch_state.active_touch_id {
            if let Some(start) = touch_state.start_position {
                if (touch.position() - start).length() > TAP_MAX_DISTANCE {
                    touch_state.is_potential_tap = false;
                }
            }
        }
    }

    // Handle touch releases
    for touch in touches.iter_just_released() {
        if Some(touch.id()) == touch_state.active_touch_id {
            if touch_state.is_potential_tap {
                if let Some(start_time) = touch_state.touch_start_time {
                    if current_time - start_time <= TAP_MAX_DURATION_SECS {
                        taps.write(TapEvent);
                    }
                }
            }
            *touch_state = TouchState::default();
        }
    }

    // Handle cancelled touches
    for touch in touches.iter_just_canceled() {
        if Some(touch.id()) == touch_state.active_touch_id {
            *touch_state = TouchState::default();
        }
    }
}

/// Desktop equivalent: a left click counts as a tap
pub fn track_mouse_taps(buttons: Res<ButtonInput<MouseButton>>, mut taps: MessageWriter<TapEvent>) {
    if buttons.just_pressed(MouseButton::Left) {
        taps.write(TapEvent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_click_emits_a_tap() {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .init_resource::<TouchState>()
            .insert_resource(Touches::default())
            .add_message::<TapEvent>()
            .add_systems(Update, (track_touch_taps, track_mouse_taps));

        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);
        app.insert_resource(buttons);

        app.update();
        assert_eq!(app.world().resource::<Messages<TapEvent>>().len(), 1);
    }

    #[test]
    fn no_input_emits_nothing() {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default())
            .init_resource::<TouchState>()
            .insert_resource(Touches::default())
            .insert_resource(ButtonInput::<MouseButton>::default())
            .add_message::<TapEvent>()
            .add_systems(Update, (track_touch_taps, track_mouse_taps));

        app.update();
        assert!(app.world().resource::<Messages<TapEvent>>().is_empty());
    }
}
