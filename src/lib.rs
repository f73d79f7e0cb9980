pub mod caster;
pub mod config;
pub mod consts;
pub mod error;
pub mod flags;
pub mod framebuffer;
pub mod gamestate;
pub mod map;
pub mod minimap;
pub mod player;
pub mod rayfan;
pub mod renderer;
pub mod utils;

/// Resolved controls for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    /// 1 forwards, -1 backwards
    pub walk: i8,
    /// 1 clockwise, -1 counter-clockwise
    pub turn: i8,
    pub quit: bool,
}

impl Input {
    /// Opposite keys held together cancel out.
    pub fn from_keys(forth: bool, back: bool, left: bool, right: bool, quit: bool) -> Self {
        Input {
            walk: forth as i8 - back as i8,
            turn: right as i8 - left as i8,
            quit,
        }
    }
}
