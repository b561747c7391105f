//! Figure metadata and the static decorations drawn every frame.

/// Label of the time axis.
pub const X_LABEL: &str = "Time in s";

/// Display-only figure metadata. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FigureDescriptor {
    pub title: String,
    pub ylabel: String,
}

impl FigureDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn ylabel(mut self, ylabel: impl Into<String>) -> Self {
        self.ylabel = ylabel.into();
        self
    }

    /// Build from `(key, value)` pairs. `title` and `ylabel` are recognized,
    /// other keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |figure, (key, value)| match key {
                "title" => figure.title(value),
                "ylabel" => figure.ylabel(value),
                _ => figure,
            })
    }
}

/// Corner the legend is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// Everything a surface draws around the traces.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorations<'a> {
    pub title: &'a str,
    pub xlabel: &'static str,
    pub ylabel: &'a str,
    pub legend: LegendCorner,
    pub grid: bool,
}

impl<'a> Decorations<'a> {
    pub fn for_figure(figure: &'a FigureDescriptor) -> Self {
        Self {
            title: &figure.title,
            xlabel: X_LABEL,
            ylabel: &figure.ylabel,
            legend: LegendCorner::BottomRight,
            grid: true,
        }
    }
}
