// File: crates/chart-core/src/theme.rs
// Summary: Renderer-agnostic colours and light/dark themes for the chart scene.

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const STEELBLUE: Color = Color::from_rgb(70, 130, 180);
    pub const HOTPINK: Color = Color::from_rgb(255, 105, 180);
    pub const TOMATO: Color = Color::from_rgb(255, 99, 71);
    pub const SEAGREEN: Color = Color::from_rgb(46, 139, 87);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    /// `#rrggbb` when opaque, `rgba(..)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    /// One colour per series position.
    pub series: [Color; 3],
    /// Fill/stroke of brush-highlighted markers.
    pub selected: Color,
    /// Fill of the marker being dragged.
    pub active: Color,
    pub brush_fill: Color,
    pub brush_stroke: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: Color::BLACK,
            axis_label: Color::BLACK,
            series: [Color::STEELBLUE, Color::HOTPINK, Color::TOMATO],
            selected: Color::SEAGREEN,
            active: Color::RED,
            brush_fill: Color::from_argb(77, 119, 119, 119),
            brush_stroke: Color::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(235, 235, 245),
            series: [Color::STEELBLUE, Color::HOTPINK, Color::TOMATO],
            selected: Color::SEAGREEN,
            active: Color::RED,
            brush_fill: Color::from_argb(77, 200, 200, 210),
            brush_stroke: Color::from_rgb(40, 40, 45),
        }
    }

    pub fn series_color(&self, position: usize) -> Color {
        self.series[position % self.series.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
