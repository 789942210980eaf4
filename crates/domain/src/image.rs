/// Image source for an exercise card. Rendering falls back along the chain
/// animated → still → placeholder; each load failure advances the state and
/// the placeholder is terminal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ImageSource {
    Animated,
    Still,
    Placeholder,
}

impl ImageSource {
    /// Initial state for a record. Records without an animated image start
    /// directly at the still image.
    #[must_use]
    pub fn initial(has_animated: bool) -> Self {
        if has_animated {
            ImageSource::Animated
        } else {
            ImageSource::Still
        }
    }

    /// Next source to try after the current one failed to load.
    #[must_use]
    pub fn after_failure(self) -> Self {
        match self {
            ImageSource::Animated => ImageSource::Still,
            ImageSource::Still | ImageSource::Placeholder => ImageSource::Placeholder,
        }
    }
}
