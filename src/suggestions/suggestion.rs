use crate::records::{FrameKey, IconClass};

/// One row of the suggestion list
///
/// Immutable once built. `activation` carries what selecting the row does,
/// resolved against the record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub icon_class: IconClass,
    pub activation: Activation,
}

impl Suggestion {
    pub fn new(title: impl Into<String>, icon_class: IconClass, activation: Activation) -> Self {
        Self {
            title: title.into(),
            icon_class,
            activation,
        }
    }
}

/// Ordered suggestions: source priority first, then rank within a source
pub type SuggestionList = Vec<Suggestion>;

/// What activating a suggestion does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Bring an already open tab to the front
    SwitchToFrame { key: FrameKey },
    /// Load a location, in the active tab or a new background tab
    Navigate {
        location: String,
        partition_number: Option<u32>,
    },
}

impl Activation {
    pub fn navigate(location: impl Into<String>) -> Self {
        Activation::Navigate {
            location: location.into(),
            partition_number: None,
        }
    }
}

/// Modifier state of the gesture that activated a suggestion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivationEvent {
    pub ctrl: bool,
    pub meta: bool,
    pub middle_button: bool,
}

impl ActivationEvent {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Secondary activation opens in a background tab instead of navigating
    pub fn is_secondary(&self) -> bool {
        self.ctrl || self.meta || self.middle_button
    }
}
