pub mod utils {
    pub mod animation;
    pub mod config;
    pub mod constants;
    pub mod macros;
    pub mod objects;
    pub mod render;
    pub mod roll;
    pub mod setup;
    pub mod touch_inputs;
}

pub mod plugins {
    pub mod dice_roller;
}
