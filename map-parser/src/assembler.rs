//! Turns a decoded container into the final spatial model.

use std::collections::BTreeMap;

use coordinate_transformer::MapImageTransformer;
use log::{debug, warn};
use map_core::spatial::model::{Room, SpatialModel};

use crate::container::{Container, RoomMetadata};
use crate::error::Result;
use crate::path::assemble_path;
use crate::segment::{current_room, segment};
use crate::zones::extract_zones;

pub fn assemble(container: Container) -> Result<SpatialModel> {
    let transformer = container
        .header
        .as_ref()
        .map(MapImageTransformer::new)
        .transpose()?;

    let mut model = SpatialModel {
        header: container.header,
        ..Default::default()
    };

    if let (Some(grid), Some(transformer)) = (&container.grid, &transformer) {
        let segmentation = segment(grid);
        model.rooms = segmentation
            .room_boxes
            .iter()
            .map(|(&id, bbox)| (id, Room::new(id, transformer.pixel_box_to_map(bbox))))
            .collect();
        model.cleaned_rooms = segmentation.cleaned_rooms;
        model.cleaned_mask = Some(segmentation.cleaned_mask);
        debug!("number of rooms: {}", model.rooms.len());
    }

    model.path = assemble_path(&container.history);
    model.charger = container.charger;
    model.vacuum_position = container.current_pose;
    if let Some(charger) = &model.charger {
        debug!("charger: {:?} ({:.1} deg)", charger.position(), charger.angle_degrees());
    }
    if let Some(pose) = &model.vacuum_position {
        debug!("vacuum: {:?} ({:.1} deg)", pose.position(), pose.angle_degrees());
    }

    if !model.rooms.is_empty()
        && !container.room_metadata.is_empty()
        && !container.map_infos.is_empty()
    {
        match container.current_map_info() {
            Some(info) => {
                debug!("map #{}: {}", info.map_head_id, info.name);
                model.map_name = Some(info.name.clone());
                enrich_rooms(&mut model.rooms, &container.room_metadata);
            }
            None => warn!(
                "no map info for map id {:?}, room names skipped",
                container.header.map(|h| h.map_head_id)
            ),
        }
    }

    let zones = extract_zones(&container.virtual_walls);
    model.walls = zones.walls;
    model.no_go_areas = zones.no_go_areas;
    model.no_mopping_areas = zones.no_mopping_areas;

    if let (Some(grid), Some(transformer), Some(pose)) =
        (&container.grid, &transformer, &model.vacuum_position)
    {
        if !model.rooms.is_empty() {
            model.vacuum_room =
                current_room(grid, transformer, pose).filter(|id| model.rooms.contains_key(id));
            model.vacuum_room_name = model.current_room().and_then(|room| room.name.clone());
            debug!("current vacuum room: {:?}", model.vacuum_room);
        }
    }

    model.grid = container.grid;
    Ok(model)
}

/// Copies names and label anchors onto rooms found in the pixel grid.
fn enrich_rooms(rooms: &mut BTreeMap<u32, Room>, metadata: &[RoomMetadata]) {
    for meta in metadata {
        debug!("room #{}: {} {:?}", meta.room_id, meta.name, meta.label_position);
        if let Some(room) = rooms.get_mut(&meta.room_id) {
            room.name = Some(meta.name.clone());
            room.label_position = meta.label_position;
        }
    }
}
