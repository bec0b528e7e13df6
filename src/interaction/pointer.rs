use super::toggles::Theme;

/// Cursor position in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Top-left corner for the torch element so that its center sits on the
/// cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TorchPlacement {
    pub left: i32,
    pub top: i32,
}

impl TorchPlacement {
    pub fn centered_on(position: PointerPosition, size: i32) -> Self {
        let half = size / 2;
        Self {
            left: position.x.saturating_sub(half),
            top: position.y.saturating_sub(half),
        }
    }
}

/// Where the cursor tooltip is drawn relative to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipAnchor {
    pub left: i32,
    pub top: i32,
}

#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    position: PointerPosition,
    torch_size: i32,
    tooltip_offset: (i32, i32),
}

impl PointerTracker {
    pub fn new(torch_size: i32, tooltip_offset: (i32, i32)) -> Self {
        Self {
            position: PointerPosition::default(),
            torch_size,
            tooltip_offset,
        }
    }

    pub fn position(&self) -> PointerPosition {
        self.position
    }

    pub fn torch_size(&self) -> i32 {
        self.torch_size
    }

    /// Records the new coordinates unconditionally. The torch is only
    /// placed in dark mode; in light mode no placement is produced at all.
    pub fn on_move(&mut self, position: PointerPosition, theme: Theme) -> Option<TorchPlacement> {
        self.position = position;
        theme
            .is_dark()
            .then(|| TorchPlacement::centered_on(position, self.torch_size))
    }

    pub fn tooltip_anchor(&self) -> TooltipAnchor {
        let (dx, dy) = self.tooltip_offset;
        TooltipAnchor {
            left: self.position.x.saturating_add(dx),
            top: self.position.y.saturating_add(dy),
        }
    }
}
