///
/// Representation of a colour
///
/// Components are stored normalised (0-1) but are not clamped: blending operations can produce
/// channels outside of this range and these are passed on to the renderer unchanged.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    /// Red, green, blue and alpha components
    Rgba(f32, f32, f32, f32),

    /// Hue, saturation, brightness and alpha components (hue is a fraction of a full turn)
    Hsba(f32, f32, f32, f32)
}

impl Color {
    ///
    /// Returns this colour as RGBA components
    ///
    pub fn to_rgba(&self) -> (f32, f32, f32, f32) {
        match self {
            &Color::Rgba(r, g, b, a)    => (r, g, b, a),
            &Color::Hsba(h, s, v, a)    => {
                let (r, g, b) = hsb_to_rgb(h, s, v);
                (r, g, b, a)
            }
        }
    }

    ///
    /// Returns this colour as HSBA components
    ///
    pub fn to_hsba(&self) -> (f32, f32, f32, f32) {
        match self {
            &Color::Hsba(h, s, v, a)    => (h, s, v, a),
            &Color::Rgba(r, g, b, a)    => {
                let (h, s, v) = rgb_to_hsb(r, g, b);
                (h, s, v, a)
            }
        }
    }

    ///
    /// Converts this colour to the RGBA representation
    ///
    pub fn to_rgba_color(&self) -> Color {
        let (r, g, b, a) = self.to_rgba();
        Color::Rgba(r, g, b, a)
    }

    ///
    /// Returns the alpha component of this colour
    ///
    pub fn alpha_component(&self) -> f32 {
        match self {
            &Color::Rgba(_, _, _, a)    => a,
            &Color::Hsba(_, _, _, a)    => a
        }
    }

    ///
    /// Returns a new colour that's the same as this one except with a different alpha value
    ///
    pub fn with_alpha(&self, new_alpha: f32) -> Color {
        match self {
            &Color::Rgba(r, g, b, _) => Color::Rgba(r, g, b, new_alpha),
            &Color::Hsba(h, s, v, _) => Color::Hsba(h, s, v, new_alpha)
        }
    }
}

///
/// Converts hue/saturation/brightness to red/green/blue
///
fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (f32, f32, f32) {
    if saturation <= 0.0 {
        return (brightness, brightness, brightness);
    }

    // Hue wraps around, so 1.0 is the same as 0.0
    let hue     = hue - hue.floor();
    let sector  = hue * 6.0;
    let index   = sector.floor();
    let frac    = sector - index;

    let p       = brightness * (1.0 - saturation);
    let q       = brightness * (1.0 - saturation * frac);
    let t       = brightness * (1.0 - saturation * (1.0 - frac));

    match index as i32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q)
    }
}

///
/// Converts red/green/blue to hue/saturation/brightness
///
fn rgb_to_hsb(red: f32, green: f32, blue: f32) -> (f32, f32, f32) {
    let max     = red.max(green).max(blue);
    let min     = red.min(green).min(blue);
    let delta   = max - min;

    let saturation  = if max > 0.0 { delta / max } else { 0.0 };
    let hue         = if delta <= 0.0 {
        0.0
    } else if max == red {
        ((green - blue) / delta).rem_euclid(6.0) / 6.0
    } else if max == green {
        ((blue - red) / delta + 2.0) / 6.0
    } else {
        ((red - green) / delta + 4.0) / 6.0
    };

    (hue, saturation, max)
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: (f32, f32, f32, f32), b: (f32, f32, f32, f32)) -> bool {
        (a.0-b.0).abs() < 0.001 && (a.1-b.1).abs() < 0.001 && (a.2-b.2).abs() < 0.001 && (a.3-b.3).abs() < 0.001
    }

    #[test]
    fn primary_hues() {
        assert!(close(Color::Hsba(0.0, 1.0, 1.0, 1.0).to_rgba(), (1.0, 0.0, 0.0, 1.0)));
        assert!(close(Color::Hsba(1.0/3.0, 1.0, 1.0, 1.0).to_rgba(), (0.0, 1.0, 0.0, 1.0)));
        assert!(close(Color::Hsba(2.0/3.0, 1.0, 1.0, 0.5).to_rgba(), (0.0, 0.0, 1.0, 0.5)));
    }

    #[test]
    fn full_turn_hue_is_red() {
        assert!(close(Color::Hsba(1.0, 1.0, 1.0, 1.0).to_rgba(), (1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn gray_has_no_saturation() {
        let (_, s, v, _) = Color::Rgba(0.5, 0.5, 0.5, 1.0).to_hsba();

        assert!(s.abs() < 0.001);
        assert!((v-0.5).abs() < 0.001);
    }

    #[test]
    fn rgb_hsb_rgb() {
        let orange          = Color::Rgba(1.0, 0.6, 0.2, 1.0);
        let (h, s, v, a)    = orange.to_hsba();

        assert!(close(Color::Hsba(h, s, v, a).to_rgba(), orange.to_rgba()));
    }

    #[test]
    fn with_alpha_keeps_representation() {
        assert!(Color::Hsba(0.2, 0.3, 0.4, 1.0).with_alpha(0.5) == Color::Hsba(0.2, 0.3, 0.4, 0.5));
    }
}
