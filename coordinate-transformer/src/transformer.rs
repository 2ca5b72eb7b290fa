use map_core::spatial::{
    grid::PixelBox,
    model::{MapHeader, Point, RoomBox},
};

use crate::error::{Axis, CoordinateConfigError};

/// Converts between map-space units and pixel coordinates of one header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapImageTransformer {
    header: MapHeader,
    scale_x: f64,
    scale_y: f64,
}

impl MapImageTransformer {
    pub fn new(header: &MapHeader) -> Result<Self, CoordinateConfigError> {
        if header.size_x == 0 || header.size_y == 0 {
            return Err(CoordinateConfigError::EmptyGrid {
                size_x: header.size_x,
                size_y: header.size_y,
            });
        }
        for (axis, min, max) in [
            (Axis::X, header.min_x, header.max_x),
            (Axis::Y, header.min_y, header.max_y),
        ] {
            if !(max > min) || !(max - min).is_finite() {
                return Err(CoordinateConfigError::DegenerateExtent { axis, min, max });
            }
        }

        Ok(Self {
            header: *header,
            scale_x: header.size_x as f64 / (header.max_x - header.min_x),
            scale_y: header.size_y as f64 / (header.max_y - header.min_y),
        })
    }

    pub fn map_to_image(&self, p: Point) -> Point {
        Point {
            x: (p.x - self.header.min_x) * self.scale_x,
            y: (p.y - self.header.min_y) * self.scale_y,
        }
    }

    pub fn image_to_map_x(&self, x: f64) -> f64 {
        x / self.scale_x + self.header.min_x
    }

    pub fn image_to_map_y(&self, y: f64) -> f64 {
        y / self.scale_y + self.header.min_y
    }

    pub fn image_to_map(&self, p: Point) -> Point {
        Point {
            x: self.image_to_map_x(p.x),
            y: self.image_to_map_y(p.y),
        }
    }

    pub fn pixel_box_to_map(&self, bbox: &PixelBox) -> RoomBox {
        RoomBox {
            left: self.image_to_map_x(bbox.min_x as f64),
            top: self.image_to_map_y(bbox.min_y as f64),
            right: self.image_to_map_x(bbox.max_x as f64),
            bottom: self.image_to_map_y(bbox.max_y as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn header(size: (u32, u32), x: (f64, f64), y: (f64, f64)) -> MapHeader {
        MapHeader {
            map_head_id: 1,
            size_x: size.0,
            size_y: size.1,
            min_x: x.0,
            max_x: x.1,
            min_y: y.0,
            max_y: y.1,
        }
    }

    #[test]
    fn unit_scale_is_identity() {
        let t = MapImageTransformer::new(&header((10, 10), (0.0, 10.0), (0.0, 10.0))).unwrap();
        assert_eq!((t.scale_x, t.scale_y), (1.0, 1.0));
        assert_abs_diff_eq!(t.image_to_map_x(3.0), 3.0);
        assert_abs_diff_eq!(t.image_to_map_y(4.0), 4.0);
        assert_eq!(t.map_to_image(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn offset_extents() {
        // 800 px over 40 m centred on the origin: 20 px per metre.
        let t = MapImageTransformer::new(&header((800, 800), (-20.0, 20.0), (-20.0, 20.0)))
            .unwrap();
        let p = t.map_to_image(Point::new(1.5, -2.0));
        assert_abs_diff_eq!(p.x, 430.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 360.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.image_to_map_x(400.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn pixel_box_maps_each_corner() {
        let t = MapImageTransformer::new(&header((100, 50), (0.0, 10.0), (5.0, 10.0))).unwrap();
        let room = t.pixel_box_to_map(&PixelBox {
            min_x: 10,
            min_y: 0,
            max_x: 20,
            max_y: 50,
        });
        assert_abs_diff_eq!(room.left, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(room.top, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(room.right, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(room.bottom, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_extents_are_rejected() {
        let err = MapImageTransformer::new(&header((10, 10), (1.0, 1.0), (0.0, 10.0))).unwrap_err();
        assert!(matches!(
            err,
            CoordinateConfigError::DegenerateExtent { axis: Axis::X, .. }
        ));

        let err = MapImageTransformer::new(&header((10, 10), (0.0, 1.0), (3.0, -3.0))).unwrap_err();
        assert!(matches!(
            err,
            CoordinateConfigError::DegenerateExtent { axis: Axis::Y, .. }
        ));

        let err =
            MapImageTransformer::new(&header((10, 10), (0.0, f64::NAN), (0.0, 1.0))).unwrap_err();
        assert!(matches!(err, CoordinateConfigError::DegenerateExtent { .. }));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let err = MapImageTransformer::new(&header((0, 10), (0.0, 1.0), (0.0, 1.0))).unwrap_err();
        assert_eq!(
            err,
            CoordinateConfigError::EmptyGrid {
                size_x: 0,
                size_y: 10
            }
        );
    }

    proptest! {
        #[test]
        fn prop_image_to_map_inverts_map_to_image(
            size_x in 1u32..2000,
            size_y in 1u32..2000,
            min_x in -1e3..1e3f64,
            min_y in -1e3..1e3f64,
            span_x in 1e-2..1e3f64,
            span_y in 1e-2..1e3f64,
            px in -1e3..1e3f64,
            py in -1e3..1e3f64,
        ) {
            let t = MapImageTransformer::new(&header(
                (size_x, size_y),
                (min_x, min_x + span_x),
                (min_y, min_y + span_y),
            )).unwrap();
            let image = t.map_to_image(Point::new(px, py));
            let tolerance = 1e-9 * (px.abs() + min_x.abs() + min_y.abs() + py.abs()).max(1.0);
            prop_assert!((t.image_to_map_x(image.x) - px).abs() <= tolerance);
            prop_assert!((t.image_to_map_y(image.y) - py).abs() <= tolerance);
        }
    }
}
