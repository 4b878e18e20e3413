//! Lyric card width calculation
//!
//! The card is sized to the active line's rendered text:
//! `ceil(text_width + horizontal_padding + buffer)`, optionally clamped by
//! `max_width`. Measuring text needs a rendering surface the core does not own,
//! so it is injected as a [`TextMeasurer`].

use super::config::{CardConfig, FontDescriptor};

/// Capability that reports the rendered pixel width of text in a font
pub trait TextMeasurer {
    /// Width of `text` in `font`, or `None` if the surface is not ready
    fn measure_text(&self, text: &str, font: &FontDescriptor) -> Option<f64>;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &FontDescriptor) -> f64,
{
    fn measure_text(&self, text: &str, font: &FontDescriptor) -> Option<f64> {
        Some(self(text, font))
    }
}

/// Computes the card width for a line of text
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardSizer {
    config: CardConfig,
}

impl CardSizer {
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Width in pixels for `text`
    ///
    /// Falls back to `fallback_width` when there is no measurer or it cannot
    /// measure yet.
    pub fn measure(&self, text: &str, measurer: Option<&dyn TextMeasurer>) -> u32 {
        self.try_measure(text, measurer)
            .unwrap_or(self.config.fallback_width)
    }

    /// Like [`measure`](Self::measure), but `None` instead of the fallback
    fn try_measure(&self, text: &str, measurer: Option<&dyn TextMeasurer>) -> Option<u32> {
        let text_width = measurer?.measure_text(text, &self.config.font)?;
        // NaN.max(0.0) is 0.0
        let raw = text_width.max(0.0) + self.config.horizontal_padding + self.config.buffer;
        let width = raw.ceil().min(f64::from(u32::MAX)) as u32;
        Some(self.config.max_width.apply(width))
    }
}

/// Card width memoized on the active text
///
/// Measuring is idempotent, so re-measuring on every playback tick is only
/// wasted work. The width is recomputed when the text changes, or when the last
/// value was the fallback and a measurer has since become available.
#[derive(Clone, Debug, Default)]
pub struct CardWidthCache {
    text: Option<String>,
    width: u32,
    measured: bool,
}

impl CardWidthCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width for `text`, measuring only if needed
    pub fn width_for(
        &mut self,
        sizer: &CardSizer,
        text: &str,
        measurer: Option<&dyn TextMeasurer>,
    ) -> u32 {
        let same_text = self.text.as_deref() == Some(text);
        if same_text && (self.measured || measurer.is_none()) {
            return self.width;
        }

        match sizer.try_measure(text, measurer) {
            Some(width) => {
                self.width = width;
                self.measured = true;
            }
            None => {
                self.width = sizer.config().fallback_width;
                self.measured = false;
            }
        }
        self.text = Some(text.to_string());
        log::debug!("Card width for {:?}: {}px", text, self.width);
        self.width
    }

    /// Forget the cached value (e.g. after the card config changes)
    pub fn invalidate(&mut self) {
        self.text = None;
        self.measured = false;
    }
}
