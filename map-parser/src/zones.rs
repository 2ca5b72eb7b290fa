use log::{debug, warn};
use map_core::spatial::model::{Area, Wall};

use crate::container::VirtualWallRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualWallKind {
    Wall,
    NoGoZone,
    NoMopZone,
}

impl VirtualWallKind {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            2 => Some(Self::Wall),
            3 => Some(Self::NoGoZone),
            6 => Some(Self::NoMopZone),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Zones {
    pub walls: Vec<Wall>,
    pub no_go_areas: Vec<Area>,
    pub no_mopping_areas: Vec<Area>,
}

pub fn extract_zones(records: &[VirtualWallRecord]) -> Zones {
    let mut zones = Zones::default();

    for record in records {
        let [p1, p2, p3, p4, ..] = record.points[..] else {
            warn!(
                "skipping virtual wall of type {} with {} points",
                record.type_code,
                record.points.len()
            );
            continue;
        };
        debug!("restricted type {}: {:?} {:?} {:?} {:?}", record.type_code, p1, p2, p3, p4);

        match VirtualWallKind::from_code(record.type_code) {
            // A wall record spans its diagonal corners.
            Some(VirtualWallKind::Wall) => zones.walls.push(Wall { start: p1, end: p3 }),
            Some(VirtualWallKind::NoGoZone) => zones.no_go_areas.push(Area {
                points: [p1, p2, p3, p4],
            }),
            Some(VirtualWallKind::NoMopZone) => zones.no_mopping_areas.push(Area {
                points: [p1, p2, p3, p4],
            }),
            None => {}
        }
    }

    zones
}
