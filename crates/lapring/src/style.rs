use crate::color::Color;
use crate::progress::Progress;
use crate::theme::ThemeColors;

/// Everything a backend needs besides the frame geometry.
///
/// Colors are carried through untouched; the geometry core only ever chooses
/// between them.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig<C = Color> {
    pub dark_color: C,
    pub mid_color: C,
    pub light_color: C,
    /// Track drawn behind the stroke.
    pub background_color: C,
    pub stroke_width: f64,
    pub progress: Progress,
}

impl StyleConfig<Color> {
    pub fn from_theme(theme: ThemeColors, stroke_width: f64, progress: Progress) -> Self {
        Self {
            dark_color: theme.dark,
            mid_color: theme.mid,
            light_color: theme.light,
            background_color: theme.background,
            stroke_width,
            progress,
        }
    }
}

impl<C> StyleConfig<C> {
    /// Whether the stroke fits inside a box of the given width.
    pub fn fits(&self, width: f64) -> bool {
        self.stroke_width < width / 2.0
    }
}
