//! Pixel classification codes of the map grid.
//!
//! Each byte of the grid is a classification code. Ordinary rooms use their id
//! as the code; the currently selected (cleaned) variant of a room is shifted
//! into a second range of the same width.

pub const MAP_OUTSIDE: u8 = 0x00;
pub const MAP_SCAN: u8 = 0x01;
pub const MAP_NEW_DISCOVERED_AREA: u8 = 0x02;
pub const MAP_ROOM_MIN: u8 = 10;
pub const MAP_ROOM_MAX: u8 = 59;
pub const MAP_SELECTED_ROOM_MIN: u8 = 60;
pub const MAP_SELECTED_ROOM_MAX: u8 = 109;
pub const MAP_WALL: u8 = 0xff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    Outside,
    Scanned,
    NewlyDiscovered,
    Obstacle,
    Room(u32),
    /// Selected room pixels double as the cleaned-area marker.
    CleanedRoom(u32),
    Unknown(u8),
}

impl PixelClass {
    pub fn classify(code: u8) -> Self {
        match code {
            MAP_OUTSIDE => Self::Outside,
            MAP_SCAN => Self::Scanned,
            MAP_NEW_DISCOVERED_AREA => Self::NewlyDiscovered,
            MAP_WALL => Self::Obstacle,
            MAP_ROOM_MIN..=MAP_ROOM_MAX => Self::Room(code as u32),
            MAP_SELECTED_ROOM_MIN..=MAP_SELECTED_ROOM_MAX => {
                Self::CleanedRoom((code - MAP_SELECTED_ROOM_MIN + MAP_ROOM_MIN) as u32)
            }
            other => Self::Unknown(other),
        }
    }

    pub fn room_id(&self) -> Option<u32> {
        match *self {
            Self::Room(id) | Self::CleanedRoom(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_cleaned(&self) -> bool {
        matches!(self, Self::CleanedRoom(_))
    }
}
