//! Protobuf messages of the robot map container.
//!
//! Only the records the decoder reads are declared; unknown tags are skipped
//! by `prost`.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RobotMap {
    #[prost(uint32, tag = "1")]
    pub map_type: u32,
    #[prost(message, optional, tag = "3")]
    pub map_head: Option<MapHeadInfo>,
    #[prost(message, optional, tag = "4")]
    pub map_data: Option<MapDataInfo>,
    #[prost(message, repeated, tag = "5")]
    pub map_info: Vec<AllMapInfo>,
    #[prost(message, optional, tag = "6")]
    pub history_pose: Option<DeviceHistoryPoseInfo>,
    #[prost(message, optional, tag = "7")]
    pub charge_station: Option<DevicePoseDataInfo>,
    #[prost(message, optional, tag = "8")]
    pub current_pose: Option<DeviceCurrentPoseInfo>,
    #[prost(message, repeated, tag = "9")]
    pub virtual_walls: Vec<DeviceAreaDataInfo>,
    #[prost(message, repeated, tag = "12")]
    pub room_data_info: Vec<RoomDataInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MapHeadInfo {
    #[prost(uint32, tag = "1")]
    pub map_head_id: u32,
    #[prost(uint32, tag = "2")]
    pub size_x: u32,
    #[prost(uint32, tag = "3")]
    pub size_y: u32,
    #[prost(float, tag = "4")]
    pub min_x: f32,
    #[prost(float, tag = "5")]
    pub min_y: f32,
    #[prost(float, tag = "6")]
    pub max_x: f32,
    #[prost(float, tag = "7")]
    pub max_y: f32,
    #[prost(float, tag = "8")]
    pub resolution: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MapDataInfo {
    #[prost(bytes = "vec", tag = "1")]
    pub map_data: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AllMapInfo {
    #[prost(uint32, tag = "1")]
    pub map_head_id: u32,
    #[prost(string, tag = "2")]
    pub map_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceHistoryPoseInfo {
    #[prost(uint32, tag = "1")]
    pub pose_id: u32,
    #[prost(message, repeated, tag = "2")]
    pub points: Vec<DeviceCoverPointDataInfo>,
}

/// History sample. `update` is the taxi/working mode flag.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceCoverPointDataInfo {
    #[prost(uint32, tag = "1")]
    pub update: u32,
    #[prost(float, tag = "2")]
    pub x: f32,
    #[prost(float, tag = "3")]
    pub y: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DevicePoseDataInfo {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
    #[prost(float, tag = "3")]
    pub phi: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceCurrentPoseInfo {
    #[prost(uint32, tag = "1")]
    pub pose_id: u32,
    #[prost(uint32, tag = "2")]
    pub update: u32,
    #[prost(float, tag = "3")]
    pub x: f32,
    #[prost(float, tag = "4")]
    pub y: f32,
    #[prost(float, tag = "5")]
    pub phi: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceAreaDataInfo {
    #[prost(uint32, tag = "1")]
    pub status: u32,
    #[prost(uint32, tag = "2")]
    pub r#type: u32,
    #[prost(uint32, tag = "3")]
    pub area_index: u32,
    #[prost(message, repeated, tag = "4")]
    pub points: Vec<DevicePointInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DevicePointInfo {
    #[prost(float, tag = "1")]
    pub x: f32,
    #[prost(float, tag = "2")]
    pub y: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RoomDataInfo {
    #[prost(uint32, tag = "1")]
    pub room_id: u32,
    #[prost(string, tag = "2")]
    pub room_name: String,
    #[prost(message, optional, tag = "8")]
    pub room_name_post: Option<DevicePointInfo>,
}
