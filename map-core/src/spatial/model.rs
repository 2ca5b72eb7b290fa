use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::grid::PixelGrid;

/// Grid dimensions and the map-space extents they cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapHeader {
    pub map_head_id: u32,
    pub size_x: u32,
    pub size_y: u32,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl MapHeader {
    pub fn pixel_count(&self) -> usize {
        self.size_x as usize * self.size_y as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// The angle is kept in radians and serialized in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "a", with = "degrees")]
    pub angle: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

mod degrees {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(radians: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(radians.to_degrees())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        f64::deserialize(deserializer).map(f64::to_radians)
    }
}

/// Map-space bounding box of a room.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub bounding_box: RoomBox,
    pub name: Option<String>,
    pub label_position: Option<Point>,
}

impl Room {
    pub fn new(id: u32, bounding_box: RoomBox) -> Self {
        Self {
            id,
            bounding_box,
            name: None,
            label_position: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Point,
    pub end: Point,
}

/// Quadrilateral restricted zone, corners in record order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub points: [Point; 4],
}

/// Cleaning path in the renderer's layout: a list of segments plus the
/// total sample count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub point_length: usize,
    pub point_size: u32,
    pub angle: f64,
    pub segments: Vec<Vec<Point>>,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            point_length: 0,
            point_size: 1,
            angle: 0.0,
            segments: Vec::new(),
        }
    }
}

impl Path {
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Vec::is_empty)
    }
}

/// Fully decoded map snapshot handed to the renderer.
///
/// `vacuum_room`, when set, always names a key of `rooms`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpatialModel {
    pub header: Option<MapHeader>,
    pub map_name: Option<String>,
    pub grid: Option<PixelGrid>,
    /// Row-major, same shape as `grid`.
    pub cleaned_mask: Option<Vec<bool>>,
    pub rooms: BTreeMap<u32, Room>,
    pub cleaned_rooms: BTreeSet<u32>,
    pub walls: Vec<Wall>,
    pub no_go_areas: Vec<Area>,
    pub no_mopping_areas: Vec<Area>,
    pub path: Path,
    pub charger: Option<Pose>,
    pub vacuum_position: Option<Pose>,
    pub vacuum_room: Option<u32>,
    pub vacuum_room_name: Option<String>,
}

impl SpatialModel {
    pub fn current_room(&self) -> Option<&Room> {
        self.vacuum_room.and_then(|id| self.rooms.get(&id))
    }
}
