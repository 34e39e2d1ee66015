//! Face expression

/// Load below which the face is happy
pub const HAPPY_BELOW: f32 = 0.42;
/// Load above which the face is sad
pub const SAD_ABOVE: f32 = 0.68;

/// Facial expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Asleep,
}

impl Mood {
    /// Expression for an awake face at `load`
    pub fn classify(load: f32) -> Self {
        if load < HAPPY_BELOW {
            Mood::Happy
        } else if load > SAD_ABOVE {
            Mood::Sad
        } else {
            Mood::Neutral
        }
    }
}

/// Per-frame face parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Face {
    pub mood: Mood,
    pub left_eye_closed: bool,
    pub right_eye_closed: bool,
    pub sweating: bool,
    /// Vertical offset in pixels
    pub bob: i32,
    /// Zz bubble step, only meaningful while asleep
    pub bubble_step: u8,
}
