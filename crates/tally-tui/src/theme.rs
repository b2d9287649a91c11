use ratatui::style::Color;

/// Runtime theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey2: Color,

    // Semantic colors
    pub tile_border: Color,
    pub rolling: Color,
    pub negative: Color,
    pub paused: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            tile_border: Color::Rgb(0x50, 0x49, 0x45),
            rolling: Color::Rgb(0xd8, 0xa6, 0x57),
            negative: Color::Rgb(0xea, 0x69, 0x62),
            paused: Color::Rgb(0xe7, 0x8a, 0x4e),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}

impl Theme {
    /// Blend from the background towards `color` as `t` goes from 0 to 1
    ///
    /// Non-RGB colors switch over halfway.
    pub fn fade_in(&self, color: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        match (self.bg0, color) {
            (Color::Rgb(br, bg, bb), Color::Rgb(r, g, b)) => {
                let mix = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t).round() as u8;
                Color::Rgb(mix(br, r), mix(bg, g), mix(bb, b))
            }
            _ if t < 0.5 => self.bg0,
            _ => color,
        }
    }
}
