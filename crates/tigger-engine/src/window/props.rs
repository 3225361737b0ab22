/// Initial presentation state of a window.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum WindowMode {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Fullscreen,
}

/// Where a window appears when it is created.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WindowPlacement {
    /// Centered on the primary monitor.
    Centered,
    /// Outer top-left corner at this screen position.
    At { x: i32, y: i32 },
}

/// Window construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowProps {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// A zero on either axis requests centering.
    pub x: i32,
    pub y: i32,
    pub vsync: bool,
    pub mode: WindowMode,
}

impl Default for WindowProps {
    fn default() -> Self {
        Self {
            title: "Tigger Engine".to_string(),
            width: 1280,
            height: 760,
            x: 0,
            y: 0,
            vsync: false,
            mode: WindowMode::Normal,
        }
    }
}

impl WindowProps {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn mode(mut self, mode: WindowMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn placement(&self) -> WindowPlacement {
        if self.x == 0 || self.y == 0 {
            WindowPlacement::Centered
        } else {
            WindowPlacement::At { x: self.x, y: self.y }
        }
    }
}

/// Top-left position that centers a `window` sized rectangle on a monitor.
pub(crate) fn centered_position(
    monitor_pos: (i32, i32),
    monitor_size: (u32, u32),
    window_size: (u32, u32),
) -> (i32, i32) {
    let dx = (monitor_size.0 as i64 - window_size.0 as i64) / 2;
    let dy = (monitor_size.1 as i64 - window_size.1 as i64) / 2;
    (monitor_pos.0 + dx as i32, monitor_pos.1 + dy as i32)
}
