//! Typed view over the decompressed map container.
//!
//! Every record is optional. A missing record leaves the matching part of the
//! spatial model unset; only a container that contradicts itself is an error.

use log::debug;
use prost::Message as _;

use map_core::spatial::{
    grid::PixelGrid,
    model::{MapHeader, Point, Pose},
};

use crate::error::{DecodeError, Result};

pub mod schema;

use schema::RobotMap;

/// Entry of the saved-maps list.
#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    pub map_head_id: u32,
    pub name: String,
}

/// Name and label anchor for one room id.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomMetadata {
    pub room_id: u32,
    pub name: String,
    pub label_position: Option<Point>,
}

/// Typed quadruple-point record: wall, no-go zone or no-mop zone.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualWallRecord {
    pub type_code: u32,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pub header: Option<MapHeader>,
    pub grid: Option<PixelGrid>,
    pub charger: Option<Pose>,
    pub current_pose: Option<Pose>,
    pub history: Vec<Point>,
    pub virtual_walls: Vec<VirtualWallRecord>,
    pub map_infos: Vec<MapInfo>,
    pub room_metadata: Vec<RoomMetadata>,
}

impl Container {
    /// The map-info entry describing this snapshot's map.
    pub fn current_map_info(&self) -> Option<&MapInfo> {
        let header = self.header.as_ref()?;
        self.map_infos
            .iter()
            .find(|info| info.map_head_id == header.map_head_id)
    }
}

pub fn decode_container(bytes: &[u8]) -> Result<Container> {
    let robot_map = RobotMap::decode(bytes)
        .map_err(|e| DecodeError::ContainerDecode(format!("invalid robot map message: {e}")))?;
    Container::try_from(robot_map)
}

impl TryFrom<RobotMap> for Container {
    type Error = DecodeError;

    fn try_from(robot_map: RobotMap) -> Result<Self> {
        let header = robot_map.map_head.map(|head| MapHeader {
            map_head_id: head.map_head_id,
            size_x: head.size_x,
            size_y: head.size_y,
            min_x: head.min_x as f64,
            max_x: head.max_x as f64,
            min_y: head.min_y as f64,
            max_y: head.max_y as f64,
        });
        if let Some(header) = &header {
            if header.size_x == 0 || header.size_y == 0 {
                return Err(DecodeError::ContainerDecode(format!(
                    "map header {} has an empty grid size {}x{}",
                    header.map_head_id, header.size_x, header.size_y
                )));
            }
            debug!(
                "map header #{}: {}x{} px, x [{}, {}], y [{}, {}]",
                header.map_head_id,
                header.size_x,
                header.size_y,
                header.min_x,
                header.max_x,
                header.min_y,
                header.max_y
            );
        }

        let cells = robot_map
            .map_data
            .map(|data| data.map_data)
            .filter(|cells| !cells.is_empty());
        let grid = match (cells, &header) {
            (None, _) => None,
            (Some(_), None) => {
                return Err(DecodeError::ContainerDecode(
                    "pixel grid present without a map header".to_string(),
                ))
            }
            (Some(cells), Some(header)) => {
                let len = cells.len();
                let grid = PixelGrid::new(header.size_x, header.size_y, cells).ok_or_else(|| {
                    DecodeError::ContainerDecode(format!(
                        "pixel grid holds {len} bytes, header expects {}",
                        header.pixel_count()
                    ))
                })?;
                Some(grid)
            }
        };

        let charger = robot_map
            .charge_station
            .map(|p| Pose::new(p.x as f64, p.y as f64, p.phi as f64));
        let current_pose = robot_map
            .current_pose
            .map(|p| Pose::new(p.x as f64, p.y as f64, p.phi as f64));

        let history = robot_map
            .history_pose
            .map(|history| {
                history
                    .points
                    .iter()
                    .map(|p| Point::new(p.x as f64, p.y as f64))
                    .collect()
            })
            .unwrap_or_default();

        let virtual_walls = robot_map
            .virtual_walls
            .into_iter()
            .map(|wall| VirtualWallRecord {
                type_code: wall.r#type,
                points: wall
                    .points
                    .iter()
                    .map(|p| Point::new(p.x as f64, p.y as f64))
                    .collect(),
            })
            .collect();

        let map_infos = robot_map
            .map_info
            .into_iter()
            .map(|info| MapInfo {
                map_head_id: info.map_head_id,
                name: info.map_name,
            })
            .collect();

        let room_metadata = robot_map
            .room_data_info
            .into_iter()
            .map(|room| RoomMetadata {
                room_id: room.room_id,
                name: room.room_name,
                label_position: room
                    .room_name_post
                    .map(|p| Point::new(p.x as f64, p.y as f64)),
            })
            .collect();

        Ok(Self {
            header,
            grid,
            charger,
            current_pose,
            history,
            virtual_walls,
            map_infos,
            room_metadata,
        })
    }
}
