use std::io::Write as _;

use approx::assert_relative_eq;
use flate2::{write::ZlibEncoder, Compression};
use prost::Message as _;

use map_crypto::{derive_key, encrypt, CryptoError, KeyEncoding, KeyMaterial};
use map_parser::{
    container::schema::*,
    parsers::{get_provider, DecoderConfig, Protocol},
    DecodeError,
};

fn key_material() -> KeyMaterial {
    KeyMaterial {
        wifi_sn: "0123456789ABCDEFGH".to_string(),
        owner_id: "4000000001".to_string(),
        device_id: "500000002".to_string(),
        model: "ijai.vacuum.v19".to_string(),
        mac: "5C:E5:0C:AA:BB:CC".to_string(),
    }
}

fn point(x: f32, y: f32) -> DevicePointInfo {
    DevicePointInfo { x, y }
}

// 8x8 grid over [-2, 2] x [-2, 2]: 2 px per unit.
fn robot_map() -> RobotMap {
    let mut cells = vec![1u8; 64];
    for y in 0..4 {
        for x in 0..4 {
            cells[y * 8 + x] = 11;
        }
    }
    for y in 4..8 {
        for x in 4..8 {
            cells[y * 8 + x] = 62;
        }
    }

    RobotMap {
        map_type: 0,
        map_head: Some(MapHeadInfo {
            map_head_id: 3,
            size_x: 8,
            size_y: 8,
            min_x: -2.0,
            min_y: -2.0,
            max_x: 2.0,
            max_y: 2.0,
            resolution: 0.5,
        }),
        map_data: Some(MapDataInfo { map_data: cells }),
        map_info: vec![AllMapInfo {
            map_head_id: 3,
            map_name: "Ground floor".to_string(),
        }],
        history_pose: Some(DeviceHistoryPoseInfo {
            pose_id: 9,
            points: vec![
                DeviceCoverPointDataInfo { update: 0, x: -1.0, y: -1.0 },
                DeviceCoverPointDataInfo { update: 1, x: -0.5, y: -1.0 },
                DeviceCoverPointDataInfo { update: 1, x: 0.5, y: 1.0 },
            ],
        }),
        charge_station: Some(DevicePoseDataInfo {
            x: -1.5,
            y: -1.5,
            phi: std::f32::consts::PI,
        }),
        current_pose: Some(DeviceCurrentPoseInfo {
            pose_id: 1,
            update: 1,
            x: 1.25,
            y: 1.25,
            phi: 0.0,
        }),
        virtual_walls: vec![
            DeviceAreaDataInfo {
                status: 0,
                r#type: 2,
                area_index: 0,
                points: vec![point(0.0, 0.0), point(0.0, 1.0), point(1.0, 1.0), point(1.0, 0.0)],
            },
            DeviceAreaDataInfo {
                status: 0,
                r#type: 3,
                area_index: 1,
                points: vec![point(-1.0, 0.0), point(-1.0, 1.0), point(0.0, 1.0), point(0.0, 0.0)],
            },
            DeviceAreaDataInfo {
                status: 0,
                r#type: 6,
                area_index: 2,
                points: vec![point(0.5, 0.5), point(0.5, 1.5)],
            },
        ],
        room_data_info: vec![
            RoomDataInfo {
                room_id: 11,
                room_name: "Hall".to_string(),
                room_name_post: Some(point(-1.0, -1.0)),
            },
            RoomDataInfo {
                room_id: 12,
                room_name: "Office".to_string(),
                room_name_post: Some(point(1.0, 1.0)),
            },
        ],
    }
}

fn blob_for(robot_map: &RobotMap, encoding: KeyEncoding) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&robot_map.encode_to_vec()).unwrap();
    let compressed = encoder.finish().unwrap();

    let key = derive_key(&key_material(), encoding);
    encrypt(&compressed, &key).unwrap().into_bytes()
}

#[test]
fn decodes_a_full_blob() {
    let decoder = get_provider(Protocol::Ijai, DecoderConfig::default()).get_decoder();
    let model = decoder
        .decode_blob(&blob_for(&robot_map(), KeyEncoding::Hex), &key_material())
        .unwrap();

    assert_eq!(model.map_name.as_deref(), Some("Ground floor"));
    assert_eq!(model.rooms.len(), 2);

    let hall = &model.rooms[&11];
    assert_eq!(hall.name.as_deref(), Some("Hall"));
    assert_eq!(hall.bounding_box.left, -2.0);
    assert_eq!(hall.bounding_box.right, -0.5);

    let office = &model.rooms[&12];
    assert_eq!(office.name.as_deref(), Some("Office"));
    assert_eq!(office.bounding_box.top, 0.0);
    assert_eq!(office.bounding_box.bottom, 1.5);

    assert_eq!(model.cleaned_rooms.iter().copied().collect::<Vec<_>>(), vec![12]);
    assert_eq!(
        model.cleaned_mask.as_ref().map(|m| m.iter().filter(|&&c| c).count()),
        Some(16)
    );

    assert_eq!(model.vacuum_room, Some(12));
    assert_eq!(model.vacuum_room_name.as_deref(), Some("Office"));

    let charger = model.charger.unwrap();
    assert_relative_eq!(charger.angle_degrees(), 180.0, epsilon = 1e-4);
    assert_relative_eq!(charger.x, -1.5);

    assert_eq!(model.path.point_length, 3);
    assert_eq!(model.path.segments.len(), 1);

    assert_eq!(model.walls.len(), 1);
    assert_eq!(model.walls[0].end.x, 1.0);
    assert_eq!(model.walls[0].end.y, 1.0);
    assert_eq!(model.no_go_areas.len(), 1);
    assert!(model.no_mopping_areas.is_empty());
}

#[test]
fn text_key_encoding_round_trips() {
    let config = DecoderConfig {
        key_encoding: KeyEncoding::Text,
    };
    let decoder = get_provider(Protocol::Ijai, config).get_decoder();
    let model = decoder
        .decode_blob(&blob_for(&robot_map(), KeyEncoding::Text), &key_material())
        .unwrap();
    assert_eq!(model.rooms.len(), 2);
}

#[test]
fn wrong_key_material_is_a_crypto_error() {
    let decoder = get_provider(Protocol::Ijai, DecoderConfig::default()).get_decoder();
    let other = KeyMaterial {
        device_id: "500000003".to_string(),
        ..key_material()
    };
    let err = decoder
        .decode_blob(&blob_for(&robot_map(), KeyEncoding::Hex), &other)
        .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Crypto(CryptoError::Decrypt(_) | CryptoError::Decode(_))
    ));
}

#[test]
fn robot_off_the_grid_still_decodes() {
    let mut map = robot_map();
    map.current_pose = Some(DeviceCurrentPoseInfo {
        pose_id: 1,
        update: 1,
        x: 40.0,
        y: -40.0,
        phi: 0.0,
    });
    let decoder = get_provider(Protocol::Ijai, DecoderConfig::default()).get_decoder();
    let model = decoder
        .decode_blob(&blob_for(&map, KeyEncoding::Hex), &key_material())
        .unwrap();
    assert_eq!(model.vacuum_room, None);
    assert_eq!(model.vacuum_room_name, None);
    assert!(model.vacuum_position.is_some());
}

#[test]
fn minimal_container_has_only_a_header() {
    let map = RobotMap {
        map_head: robot_map().map_head,
        ..Default::default()
    };
    let decoder = get_provider(Protocol::Ijai, DecoderConfig::default()).get_decoder();
    let model = decoder
        .decode_blob(&blob_for(&map, KeyEncoding::Hex), &key_material())
        .unwrap();
    assert!(model.header.is_some());
    assert!(model.grid.is_none());
    assert!(model.rooms.is_empty());
    assert!(model.path.is_empty());
    assert_eq!(model.charger, None);
}
