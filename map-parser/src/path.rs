use map_core::spatial::model::{Path, Point};

/// Builds a single path segment from the ordered history samples.
///
/// The taxi/working mode of each sample is not decoded.
pub fn assemble_path(history: &[Point]) -> Path {
    if history.is_empty() {
        return Path::default();
    }
    Path {
        point_length: history.len(),
        segments: vec![history.to_vec()],
        ..Path::default()
    }
}
