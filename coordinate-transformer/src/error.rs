#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateConfigError {
    /// `max <= min` (or NaN) on one axis of the header extents.
    DegenerateExtent { axis: Axis, min: f64, max: f64 },
    EmptyGrid { size_x: u32, size_y: u32 },
}

impl std::fmt::Display for CoordinateConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateExtent { axis, min, max } => write!(
                f,
                "degenerate map extent on {} axis: min {} max {}",
                axis, min, max
            ),
            Self::EmptyGrid { size_x, size_y } => {
                write!(f, "empty pixel grid: {}x{}", size_x, size_y)
            }
        }
    }
}

impl std::error::Error for CoordinateConfigError {}
