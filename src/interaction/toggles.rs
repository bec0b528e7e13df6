#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        format!("Switch to {} Mode", self.toggled().title())
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Visibility of the contact dialog. Only explicit open and close
/// actions touch it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactModal {
    open: bool,
}

impl ContactModal {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Returns whether visibility changed.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Hover label shown next to the cursor. Enter/leave pairs are not
/// matched up: whichever event arrived last decides the text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tooltip {
    text: String,
}

impl Tooltip {
    pub fn text(&self) -> Option<&str> {
        (!self.text.is_empty()).then_some(self.text.as_str())
    }

    pub fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn enter(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.text == label {
            return false;
        }
        self.text = label;
        true
    }

    pub fn leave(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        true
    }
}
