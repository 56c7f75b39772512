// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

// External crate imports
use bon::Builder;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::mono_font::iso_8859_1::{FONT_10X20, FONT_6X10, FONT_8X13};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::{Drawable, Pixel};
use pixels::{Pixels, SurfaceTexture};
use profont::PROFONT_14_POINT;
use tracing::{debug, info, warn};

// Standard library imports
use std::convert::Infallible;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

pub mod config;
pub mod validate;

use config::{FaceConfig, Palette, RangeConfig, Rect, WindowLayout};
use validate::{parse_temperature, InputError};

// ============================================================================
// COLOR CONFIGURATION
// ============================================================================

/// Color representation for gauge elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgb888 {
    fn from(color: Color) -> Self {
        Rgb888::new(color.r, color.g, color.b)
    }
}

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Main gauge struct - the primary public interface
#[derive(Debug, Clone)]
pub struct Gauge {
    config: GaugeConfig,
    state: GaugeState,
}

#[derive(Debug, Clone, Builder)]
pub struct GaugeConfig {
    #[builder(default = "Room Temperature Gauge".to_string())]
    pub title: String,
    #[builder(default)]
    pub range: RangeConfig,
    #[builder(default)]
    pub face: FaceConfig,
    #[builder(default)]
    pub palette: Palette,
    #[builder(default)]
    pub window: WindowLayout,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone)]
struct GaugeState {
    temperature: f64,
}

impl Gauge {
    pub fn new(config: GaugeConfig) -> Self {
        let state = GaugeState {
            temperature: config.range.normal_low,
        };

        Self { config, state }
    }

    pub fn temperature(&self) -> f64 {
        self.state.temperature
    }

    /// Set the displayed temperature, clamped to the configured range.
    pub fn set_temperature(&mut self, value: f64) {
        self.state.temperature = value.clamp(self.config.range.min_temp, self.config.range.max_temp);
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Open the gauge window and run its event loop to completion.
    pub fn show(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let initial_temperature = self.state.temperature;
        self.run_window(initial_temperature)
    }

    fn run_window(&self, initial_temperature: f64) -> Result<(), Box<dyn std::error::Error>> {
        let layout = self.config.window;

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(layout.width as f64, layout.height as f64))
            .with_resizable(false)
            .build(&event_loop)?;

        let window = Arc::new(window);
        let window_clone = window.clone();

        // The frame keeps the fixed logical size; pixels scales it to the
        // surface, so the layout constants hold on any DPI.
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(layout.width as u32, layout.height as u32, surface_texture)?;

        let mut app = AppState::new(self.config.range, initial_temperature);
        let mut cursor = (0.0f32, 0.0f32);

        info!(title = %self.config.title, "opening gauge window");

        let frame_duration = Duration::from_secs_f64(1.0 / layout.max_framerate);
        let mut last_frame = Instant::now();

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        let _ = pixels.resize_surface(new_size.width, new_size.height);
                    }
                    WindowEvent::KeyboardInput { event: key, .. }
                        if key.state == ElementState::Pressed =>
                    {
                        match &key.logical_key {
                            Key::Named(NamedKey::Enter) => {
                                if app.dialog.is_some() {
                                    app.dismiss_dialog();
                                } else {
                                    app.submit();
                                }
                            }
                            Key::Named(NamedKey::Escape) => app.dismiss_dialog(),
                            Key::Named(NamedKey::Backspace) => app.backspace(),
                            Key::Character(text) => app.type_str(text.as_str()),
                            _ => {}
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = (position.x as f32, position.y as f32);
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } => {
                        let (px, py) = pixels
                            .window_pos_to_pixel(cursor)
                            .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));
                        app.click(px as i32, py as i32, &layout);
                    }
                    WindowEvent::RedrawRequested => {
                        let scene = compose_frame(&self.config, &app);
                        let mut canvas =
                            Canvas::new(pixels.frame_mut(), layout.width, layout.height);
                        scene.render(&mut canvas);
                        let _ = pixels.render();
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

// ============================================================================
// UI STATE
// ============================================================================

// Longest entry that fits the box at the body font's glyph width.
const ENTRY_MAX_CHARS: usize = 22;

struct AppState {
    range: RangeConfig,
    temperature: f64,
    entry: String,
    dialog: Option<InputError>,
}

impl AppState {
    fn new(range: RangeConfig, temperature: f64) -> Self {
        Self {
            range,
            temperature,
            entry: String::new(),
            dialog: None,
        }
    }

    fn type_str(&mut self, text: &str) {
        if self.dialog.is_some() {
            return;
        }
        for ch in text.chars() {
            if ch.is_ascii_graphic() && self.entry.len() < ENTRY_MAX_CHARS {
                self.entry.push(ch);
            }
        }
    }

    fn backspace(&mut self) {
        if self.dialog.is_none() {
            self.entry.pop();
        }
    }

    /// Validate the entry and either move the pointer or arm the error
    /// dialog. The entry is cleared on both paths.
    fn submit(&mut self) {
        if self.dialog.is_some() {
            return;
        }
        match parse_temperature(&self.entry, &self.range) {
            Ok(value) => {
                debug!(value, "gauge updated");
                self.temperature = value;
            }
            Err(err) => {
                warn!(entry = %self.entry, %err, "entry rejected");
                self.dialog = Some(err);
            }
        }
        self.entry.clear();
    }

    fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    fn click(&mut self, px: i32, py: i32, layout: &WindowLayout) {
        if self.dialog.is_some() {
            if layout.dialog_ok_rect.contains(px, py) {
                self.dismiss_dialog();
            }
        } else if layout.update_rect.contains(px, py) {
            self.submit();
        }
    }
}

// ============================================================================
// GAUGE GEOMETRY
// ============================================================================

/// Maps temperatures to angles on the gauge face and angles to frame points.
///
/// Angles are in degrees, counter-clockwise from the +x axis; the y axis is
/// flipped when projecting onto the frame.
#[derive(Debug, Clone, Copy)]
pub struct Dial {
    cx: f64,
    cy: f64,
    sweep_start: f64,
    sweep: f64,
    min: f64,
    max: f64,
}

impl Dial {
    pub fn new(face_origin: (i32, i32), face: &FaceConfig, range: &RangeConfig) -> Self {
        let half = f64::from(face.size) / 2.0;
        Self {
            cx: f64::from(face_origin.0) + half,
            cy: f64::from(face_origin.1) + half,
            sweep_start: face.sweep_start_deg,
            sweep: face.sweep_deg,
            min: range.min_temp,
            max: range.max_temp,
        }
    }

    pub fn angle_of(&self, value: f64) -> f64 {
        self.sweep_start + (value - self.min) / (self.max - self.min) * self.sweep
    }

    pub fn point_at(&self, radius: f64, angle_deg: f64) -> (f64, f64) {
        let rad = angle_deg.to_radians();
        (self.cx + radius * rad.cos(), self.cy - radius * rad.sin())
    }

    pub fn center(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }
}

// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
enum DrawCommand {
    Clear(Color),
    Rect {
        rect: Rect,
        fill: Option<Color>,
        border: Option<Color>,
    },
    Disc {
        cx: i32,
        cy: i32,
        radius: f64,
        color: Color,
    },
    Sector {
        cx: i32,
        cy: i32,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        color: Color,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: f32,
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        font: UiFont,
        align: Alignment,
        color: Color,
    },
}

#[derive(Debug, Default, PartialEq)]
struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn render(&self, canvas: &mut Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Rect { rect, fill, border } => {
                    if let Some(fill) = fill {
                        canvas.fill_rect(*rect, *fill);
                    }
                    if let Some(border) = border {
                        canvas.stroke_rect(*rect, *border);
                    }
                }
                DrawCommand::Disc {
                    cx,
                    cy,
                    radius,
                    color,
                } => canvas.fill_disc(*cx, *cy, *radius, *color),
                DrawCommand::Sector {
                    cx,
                    cy,
                    radius,
                    start_deg,
                    sweep_deg,
                    color,
                } => canvas.fill_sector(*cx, *cy, *radius, *start_deg, *sweep_deg, *color),
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                } => canvas.stroke_line(*x0, *y0, *x1, *y1, *thickness, *color),
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    font,
                    align,
                    color,
                } => canvas.draw_text(*x, *y, text, *font, *align, *color),
            }
        }
    }
}

// ============================================================================
// FRAME COMPOSITION
// ============================================================================

fn compose_frame(config: &GaugeConfig, app: &AppState) -> Scene {
    let mut scene = Scene::new();
    scene.push(DrawCommand::Clear(config.palette.window_bg));
    scene.push(DrawCommand::Rect {
        rect: Rect::new(
            config.window.face_origin.0,
            config.window.face_origin.1,
            config.face.size,
            config.face.size,
        ),
        fill: Some(config.palette.canvas_bg),
        border: None,
    });
    compose_face(&mut scene, config, app.temperature);
    compose_chrome(&mut scene, config, app);
    if let Some(ref err) = app.dialog {
        compose_dialog(&mut scene, config, err);
    }
    scene
}

fn compose_face(scene: &mut Scene, config: &GaugeConfig, temperature: f64) {
    let face = &config.face;
    let range = &config.range;
    let palette = &config.palette;
    let dial = Dial::new(config.window.face_origin, face, range);
    let (fx, fy) = dial.center();
    let (cx, cy) = (fx.round() as i32, fy.round() as i32);

    scene.push(DrawCommand::Disc {
        cx,
        cy,
        radius: face.disc_radius(),
        color: palette.face,
    });

    // Normal-range wedge, laid out with the same map as the ticks
    let band_start = dial.angle_of(range.normal_low);
    let band_sweep = (range.normal_high - range.normal_low) / range.span() * face.sweep_deg;
    scene.push(DrawCommand::Sector {
        cx,
        cy,
        radius: face.band_radius(),
        start_deg: band_start,
        sweep_deg: band_sweep,
        color: palette.normal_band,
    });

    let lo = range.min_temp.floor() as i64;
    let hi = range.max_temp.ceil() as i64;
    for t in lo..=hi {
        let angle = dial.angle_of(t as f64);
        let (x0, y0) = dial.point_at(face.tick_inner_radius, angle);
        let (x1, y1) = dial.point_at(face.tick_outer_radius, angle);
        let major = t.rem_euclid(face.major_tick_every) == 0;
        scene.push(DrawCommand::Line {
            x0: x0.round() as i32,
            y0: y0.round() as i32,
            x1: x1.round() as i32,
            y1: y1.round() as i32,
            thickness: if major {
                face.major_tick_width
            } else {
                face.minor_tick_width
            },
            color: palette.ink,
        });
        if major {
            let (lx, ly) = dial.point_at(face.label_radius, angle);
            scene.push(DrawCommand::Text {
                x: lx.round() as i32,
                y: ly.round() as i32,
                text: t.to_string(),
                font: UiFont::DialNumber,
                align: Alignment::Center,
                color: palette.ink,
            });
        }
    }

    let (px, py) = dial.point_at(face.pointer_radius, dial.angle_of(temperature));
    scene.push(DrawCommand::Line {
        x0: cx,
        y0: cy,
        x1: px.round() as i32,
        y1: py.round() as i32,
        thickness: face.pointer_width,
        color: palette.pointer,
    });
}

fn compose_chrome(scene: &mut Scene, config: &GaugeConfig, app: &AppState) {
    let layout = &config.window;
    let palette = &config.palette;

    scene.push(DrawCommand::Text {
        x: layout.instruction_center.0,
        y: layout.instruction_center.1,
        text: "Enter temperature value (°C):".to_string(),
        font: UiFont::Body,
        align: Alignment::Center,
        color: palette.ink,
    });

    scene.push(DrawCommand::Rect {
        rect: layout.entry_rect,
        fill: Some(palette.canvas_bg),
        border: Some(palette.ink),
    });
    let char_w = FONT_8X13.character_size.width as i32;
    let entry_x = layout.entry_rect.x + 7;
    let entry_y = layout.entry_rect.y + layout.entry_rect.h / 2;
    if !app.entry.is_empty() {
        scene.push(DrawCommand::Text {
            x: entry_x,
            y: entry_y,
            text: app.entry.clone(),
            font: UiFont::Body,
            align: Alignment::Left,
            color: palette.ink,
        });
    }
    let caret_x = entry_x + char_w * app.entry.chars().count() as i32;
    scene.push(DrawCommand::Line {
        x0: caret_x,
        y0: entry_y - 8,
        x1: caret_x,
        y1: entry_y + 8,
        thickness: 1.0,
        color: palette.ink,
    });

    scene.push(DrawCommand::Rect {
        rect: layout.update_rect,
        fill: Some(palette.control_bg),
        border: Some(palette.ink),
    });
    let (bx, by) = layout.update_rect.center();
    scene.push(DrawCommand::Text {
        x: bx,
        y: by,
        text: "Update".to_string(),
        font: UiFont::Body,
        align: Alignment::Center,
        color: palette.ink,
    });

    scene.push(DrawCommand::Text {
        x: layout.readout_center.0,
        y: layout.readout_center.1,
        text: format!("Gauge Value: {}°C", format_temperature(app.temperature)),
        font: UiFont::Heading,
        align: Alignment::Center,
        color: palette.ink,
    });
}

fn compose_dialog(scene: &mut Scene, config: &GaugeConfig, err: &InputError) {
    let layout = &config.window;
    let palette = &config.palette;
    let dialog = layout.dialog_rect;

    scene.push(DrawCommand::Rect {
        rect: Rect::new(dialog.x - 3, dialog.y - 3, dialog.w + 6, dialog.h + 6),
        fill: Some(palette.dialog_accent),
        border: None,
    });
    scene.push(DrawCommand::Rect {
        rect: dialog,
        fill: Some(palette.canvas_bg),
        border: Some(palette.ink),
    });
    scene.push(DrawCommand::Text {
        x: dialog.center().0,
        y: dialog.y + 22,
        text: "Input Error".to_string(),
        font: UiFont::Heading,
        align: Alignment::Center,
        color: palette.dialog_accent,
    });

    let wrap_width = ((dialog.w - 16) / FONT_6X10.character_size.width as i32) as usize;
    for (i, line) in wrap_message(&err.to_string(), wrap_width).into_iter().enumerate() {
        scene.push(DrawCommand::Text {
            x: dialog.center().0,
            y: dialog.y + 50 + i as i32 * 14,
            text: line,
            font: UiFont::Small,
            align: Alignment::Center,
            color: palette.ink,
        });
    }

    let ok = layout.dialog_ok_rect;
    scene.push(DrawCommand::Rect {
        rect: ok,
        fill: Some(palette.control_bg),
        border: Some(palette.ink),
    });
    let (ox, oy) = ok.center();
    scene.push(DrawCommand::Text {
        x: ox,
        y: oy,
        text: "OK".to_string(),
        font: UiFont::Body,
        align: Alignment::Center,
        color: palette.ink,
    });
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

// Whole values keep one decimal so 22 reads as 22.0 on the dial readout.
fn format_temperature(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn wrap_message(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ============================================================================
// CORE DATA TYPES
// ============================================================================

struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

/// Which mono font a text command renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiFont {
    Heading,
    Body,
    Small,
    DialNumber,
}

impl UiFont {
    fn character_style(self, color: Color) -> MonoTextStyle<'static, Rgb888> {
        let font: &'static MonoFont<'static> = match self {
            UiFont::Heading => &FONT_10X20,
            UiFont::Body => &FONT_8X13,
            UiFont::Small => &FONT_6X10,
            UiFont::DialNumber => &PROFONT_14_POINT,
        };
        MonoTextStyle::new(font, color.into())
    }
}

impl<'a> Canvas<'a> {
    fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, font: UiFont, align: Alignment, color: Color) {
        let character_style = font.character_style(color);
        let text_style = TextStyleBuilder::new()
            .alignment(align)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(text, Point::new(x, y), character_style, text_style)
            .draw(self)
            .ok();
    }
}

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for Canvas<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb888>>,
    {
        for Pixel(point, color) in pixels {
            self.blend_pixel(point.x, point.y, Color::new(color.r(), color.g(), color.b()), 1.0);
        }
        Ok(())
    }
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

impl Canvas<'_> {
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let src = [color.r as f32, color.g as f32, color.b as f32];
        let dst = [
            self.frame[idx] as f32,
            self.frame[idx + 1] as f32,
            self.frame[idx + 2] as f32,
        ];
        let a = alpha.clamp(0.0, 1.0);
        let out = [
            (src[0] * a + dst[0] * (1.0 - a)).round() as u8,
            (src[1] * a + dst[1] * (1.0 - a)).round() as u8,
            (src[2] * a + dst[2] * (1.0 - a)).round() as u8,
            0xff,
        ];
        self.frame[idx..idx + 4].copy_from_slice(&out);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                self.blend_pixel(x, y, color, 1.0);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.y + rect.h - 1, rect.w, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.h), color);
        self.fill_rect(Rect::new(rect.x + rect.w - 1, rect.y, 1, rect.h), color);
    }

    fn fill_disc(&mut self, cx: i32, cy: i32, radius: f64, color: Color) {
        let bound = radius.ceil() as i32 + 1;
        for dy in -bound..=bound {
            for dx in -bound..=bound {
                let dist = f64::from(dx * dx + dy * dy).sqrt();
                if dist > radius + 1.0 {
                    continue;
                }
                let aa = if dist > radius {
                    1.0 - (dist - radius).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    self.blend_pixel(cx + dx, cy + dy, color, aa as f32);
                }
            }
        }
    }

    /// Filled wedge from the center out to `radius`, covering `sweep_deg`
    /// degrees counter-clockwise from `start_deg`.
    fn fill_sector(
        &mut self,
        cx: i32,
        cy: i32,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        color: Color,
    ) {
        if sweep_deg <= 0.0 {
            return;
        }
        if sweep_deg >= 360.0 {
            self.fill_disc(cx, cy, radius, color);
            return;
        }
        let tau = std::f64::consts::TAU;
        let mut start = start_deg.to_radians() % tau;
        if start < 0.0 {
            start += tau;
        }
        let mut end = (start_deg + sweep_deg).to_radians() % tau;
        if end < 0.0 {
            end += tau;
        }

        let bound = radius.ceil() as i32 + 1;
        for dy in -bound..=bound {
            for dx in -bound..=bound {
                let dist = f64::from(dx * dx + dy * dy).sqrt();
                if dist > radius + 1.0 {
                    continue;
                }
                // Frame y grows downward, angles do not
                let mut angle = f64::from(-dy).atan2(f64::from(dx));
                if angle < 0.0 {
                    angle += tau;
                }
                let in_arc = if start <= end {
                    angle >= start && angle <= end
                } else {
                    angle >= start || angle <= end
                };
                if !in_arc {
                    continue;
                }
                let aa = if dist > radius {
                    1.0 - (dist - radius).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    self.blend_pixel(cx + dx, cy + dy, color, aa as f32);
                }
            }
        }
    }

    fn stroke_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, thickness: f32, color: Color) {
        let min_x = x0.min(x1) - thickness.ceil() as i32 - 1;
        let max_x = x0.max(x1) + thickness.ceil() as i32 + 1;
        let min_y = y0.min(y1) - thickness.ceil() as i32 - 1;
        let max_y = y0.max(y1) + thickness.ceil() as i32 + 1;
        let dx = (x1 - x0) as f32;
        let dy = (y1 - y0) as f32;
        let len_sq = dx * dx + dy * dy;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = (x - x0) as f32;
                let py = (y - y0) as f32;
                let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
                let lx = x0 as f32 + t * dx;
                let ly = y0 as f32 + t * dy;
                let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
                let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.blend_pixel(x, y, color, aa);
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
