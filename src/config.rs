use crate::Color;

/// Temperature range displayed on the gauge face
#[derive(Debug, Clone, Copy)]
pub struct RangeConfig {
    pub min_temp: f64,
    pub normal_low: f64,
    pub normal_high: f64,
    pub max_temp: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min_temp: 15.0,
            normal_low: 20.0,
            normal_high: 23.0,
            max_temp: 30.0,
        }
    }
}

impl RangeConfig {
    pub fn span(&self) -> f64 {
        self.max_temp - self.min_temp
    }

    /// Inclusive at both bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min_temp && value <= self.max_temp
    }
}

/// Geometry of the gauge face, in face-local units
#[derive(Debug, Clone, Copy)]
pub struct FaceConfig {
    pub size: i32,
    pub disc_margin: i32,
    pub arc_margin: i32,
    pub tick_inner_radius: f64,
    pub tick_outer_radius: f64,
    pub label_radius: f64,
    pub pointer_radius: f64,
    pub sweep_start_deg: f64,
    pub sweep_deg: f64,
    pub major_tick_every: i64,
    pub major_tick_width: f32,
    pub minor_tick_width: f32,
    pub pointer_width: f32,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            size: 220,
            disc_margin: 10,
            arc_margin: 20,
            tick_inner_radius: 80.0,
            tick_outer_radius: 90.0,
            label_radius: 100.0,
            pointer_radius: 80.0,
            sweep_start_deg: -150.0,
            sweep_deg: 300.0,
            major_tick_every: 3,
            major_tick_width: 2.0,
            minor_tick_width: 1.0,
            pointer_width: 2.0,
        }
    }
}

impl FaceConfig {
    pub fn disc_radius(&self) -> f64 {
        (self.size / 2 - self.disc_margin) as f64
    }

    pub fn band_radius(&self) -> f64 {
        (self.size / 2 - self.arc_margin) as f64
    }
}

/// Colors for the gauge face and the window chrome
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window_bg: Color,
    pub canvas_bg: Color,
    pub face: Color,
    pub normal_band: Color,
    pub pointer: Color,
    pub ink: Color,
    pub control_bg: Color,
    pub dialog_accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            window_bg: Color::new(0xd9, 0xd9, 0xd9),
            canvas_bg: Color::new(0xff, 0xff, 0xff),
            face: Color::new(0xd3, 0xd3, 0xd3),
            normal_band: Color::new(0x90, 0xee, 0x90),
            pointer: Color::new(0x00, 0x00, 0xff),
            ink: Color::new(0x00, 0x00, 0x00),
            control_bg: Color::new(0xe4, 0xe4, 0xe4),
            dialog_accent: Color::new(0xcc, 0x00, 0x00),
        }
    }
}

/// Axis-aligned rectangle in framebuffer coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Window layout, top to bottom: instruction, gauge face, entry, button, readout
#[derive(Debug, Clone, Copy)]
pub struct WindowLayout {
    pub width: usize,
    pub height: usize,
    pub max_framerate: f64,
    pub instruction_center: (i32, i32),
    pub face_origin: (i32, i32),
    pub entry_rect: Rect,
    pub update_rect: Rect,
    pub readout_center: (i32, i32),
    pub dialog_rect: Rect,
    pub dialog_ok_rect: Rect,
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self {
            width: 260,
            height: 400,
            max_framerate: 60.0,
            instruction_center: (130, 22),
            face_origin: (20, 40),
            entry_rect: Rect::new(30, 280, 200, 28),
            update_rect: Rect::new(85, 322, 90, 28),
            readout_center: (130, 374),
            dialog_rect: Rect::new(14, 130, 232, 120),
            dialog_ok_rect: Rect::new(105, 212, 50, 26),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_ordered() {
        let range = RangeConfig::default();
        assert!(range.min_temp < range.normal_low);
        assert!(range.normal_low < range.normal_high);
        assert!(range.normal_high < range.max_temp);
        assert_eq!(range.span(), 15.0);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = RangeConfig::default();
        assert!(range.contains(15.0));
        assert!(range.contains(30.0));
        assert!(!range.contains(14.999));
        assert!(!range.contains(30.001));
    }

    #[test]
    fn face_radii_follow_margins() {
        let face = FaceConfig::default();
        assert_eq!(face.disc_radius(), 100.0);
        assert_eq!(face.band_radius(), 90.0);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(10, 10, 20, 10);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(29, 19));
        assert!(!rect.contains(30, 19));
        assert!(!rect.contains(29, 20));
    }

    #[test]
    fn layout_fits_window() {
        let layout = WindowLayout::default();
        let face = FaceConfig::default();
        assert!(layout.face_origin.0 + face.size <= layout.width as i32);
        assert!(layout.face_origin.1 + face.size <= layout.readout_center.1);
        let ok = layout.dialog_ok_rect;
        let dialog = layout.dialog_rect;
        assert!(ok.x >= dialog.x && ok.x + ok.w <= dialog.x + dialog.w);
        assert!(ok.y >= dialog.y && ok.y + ok.h <= dialog.y + dialog.h);
    }
}
