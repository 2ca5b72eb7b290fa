//! Segmentation of the pixel grid into rooms and cleaned areas.

use std::collections::{BTreeMap, BTreeSet};

use coordinate_transformer::MapImageTransformer;
use log::debug;
use map_core::spatial::{
    grid::{PixelBox, PixelGrid},
    model::Pose,
    pixel::PixelClass,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segmentation {
    /// Pixel-space bounding box per room id.
    pub room_boxes: BTreeMap<u32, PixelBox>,
    /// Rooms holding at least one cleaned pixel.
    pub cleaned_rooms: BTreeSet<u32>,
    /// Row-major cleaned-pixel layer, same shape as the grid.
    pub cleaned_mask: Vec<bool>,
}

pub fn segment(grid: &PixelGrid) -> Segmentation {
    let mut room_boxes: BTreeMap<u32, PixelBox> = BTreeMap::new();
    let mut cleaned_rooms = BTreeSet::new();
    let mut cleaned_mask = vec![false; grid.as_bytes().len()];

    for (index, (x, y, code)) in grid.iter().enumerate() {
        let class = PixelClass::classify(code);
        let Some(room_id) = class.room_id() else {
            continue;
        };

        room_boxes
            .entry(room_id)
            .and_modify(|bbox| bbox.include(x, y))
            .or_insert_with(|| PixelBox::from_pixel(x, y));

        if class.is_cleaned() {
            cleaned_rooms.insert(room_id);
            cleaned_mask[index] = true;
        }
    }

    debug!(
        "segmented {}x{} grid: rooms {:?}, cleaned {:?}",
        grid.width(),
        grid.height(),
        room_boxes.keys().collect::<Vec<_>>(),
        cleaned_rooms
    );

    Segmentation {
        room_boxes,
        cleaned_rooms,
        cleaned_mask,
    }
}

/// Room id at a fractional pixel position; `None` off-grid or outside rooms.
pub fn room_at(grid: &PixelGrid, x: f64, y: f64) -> Option<u32> {
    grid.classify_at(x, y).and_then(|class| class.room_id())
}

/// Room containing the robot's map-space pose.
pub fn current_room(
    grid: &PixelGrid,
    transformer: &MapImageTransformer,
    pose: &Pose,
) -> Option<u32> {
    let on_image = transformer.map_to_image(pose.position());
    debug!("vacuum position on image: ({}, {})", on_image.x, on_image.y);
    room_at(grid, on_image.x, on_image.y)
}
