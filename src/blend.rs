use super::color::*;
use super::config::*;

use flo_sketch_canvas::*;

///
/// The ways that `blend_color` can combine two colours
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BlendColorMode {
    Blend,
    Add,
    Subtract,
    Darkest,
    Lightest,
    Difference,
    Exclusion,
    Multiply,
    Screen,
    Overlay,
    HardLight,
    SoftLight,
    Dodge,
    Burn
}

///
/// Options that change how colours are blended
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct BlendOptions {
    /// If true, the blue channel of `Overlay` is worked out using the red channel of the first colour to choose
    /// between multiplying and screening and as the multiplier, as Processing.js does
    pub overlay_compatibility: bool
}

impl Default for BlendOptions {
    fn default() -> BlendOptions {
        BlendOptions { overlay_compatibility: true }
    }
}

impl<'a> From<&'a SketchConfig> for BlendOptions {
    fn from(config: &'a SketchConfig) -> BlendOptions {
        BlendOptions { overlay_compatibility: config.overlay_compatibility }
    }
}

///
/// RGB channels on a 0-255 scale
///
#[derive(Clone, Copy)]
struct Channels {
    red: f64,
    green: f64,
    blue: f64
}

///
/// Removes the error introduced by storing a channel in a `Color`, so whole-number channels stay whole
///
fn stored_channel(value: f64) -> f64 {
    let nearest = value.round();

    if (value - nearest).abs() < 1e-3 { nearest } else { value }
}

///
/// Truncates towards zero, for the parts of the blend that use integer arithmetic
///
#[inline]
fn int(value: f64) -> i64 {
    value as i64
}

impl Channels {
    fn from_color(color: Color) -> (Channels, f64) {
        let channels = decompose(color);

        (Channels {
            red:    stored_channel(channels.red),
            green:  stored_channel(channels.green),
            blue:   stored_channel(channels.blue)
        }, stored_channel(channels.alpha))
    }

    ///
    /// Applies the same function to each pair of channels
    ///
    fn combine<TFn: Fn(f64, f64) -> f64>(&self, other: &Channels, combine: TFn) -> Channels {
        Channels {
            red:    combine(self.red, other.red),
            green:  combine(self.green, other.green),
            blue:   combine(self.blue, other.blue)
        }
    }

    ///
    /// Truncates both sets of channels to integers and combines them with integer arithmetic
    ///
    fn combine_int<TFn: Fn(i64, i64) -> i64>(&self, other: &Channels, combine: TFn) -> Channels {
        self.combine(other, |a, b| combine(int(a), int(b)) as f64)
    }

    fn to_color(&self) -> Color {
        color(self.red, self.green, self.blue)
    }
}

///
/// Blends two colours using the default options
///
pub fn blend_color(first: Color, second: Color, mode: BlendColorMode) -> Color {
    blend_color_with(first, second, mode, &BlendOptions::default())
}

///
/// Blends two colours together
///
/// Channels are on a 0-255 scale. Blend, add, subtract, darkest, lightest and difference keep fractional
/// channels. Exclusion, multiply, screen and overlay truncate the products before the fixed-point divisions
/// by 128 and 256. Hard light, soft light, dodge and burn truncate the channels themselves and work entirely
/// on integers. The result is always opaque. The alpha of the second colour is only used by
/// `BlendColorMode::Blend`.
///
pub fn blend_color_with(first: Color, second: Color, mode: BlendColorMode, options: &BlendOptions) -> Color {
    use self::BlendColorMode::*;

    let (a, _)              = Channels::from_color(first);
    let (b, second_alpha)   = Channels::from_color(second);

    match mode {
        Blend => {
            // Not clamped: channels can go past 255
            let factor = (255.0 - second_alpha) / 255.0;
            a.combine(&b, |a, b| a * factor + b).to_color()
        }

        Add         => a.combine(&b, |a, b| (a + b).min(255.0)).to_color(),
        Subtract    => a.combine(&b, |a, b| (a - b).max(0.0)).to_color(),
        Darkest     => a.combine(&b, |a, b| a.min(b)).to_color(),
        Lightest    => a.combine(&b, |a, b| a.max(b)).to_color(),
        Difference  => a.combine(&b, |a, b| (b - a).abs()).to_color(),
        Exclusion   => a.combine(&b, |a, b| b + a - ((int(b * a) >> 7) as f64)).to_color(),
        Multiply    => a.combine(&b, |a, b| (int(a * b) >> 8) as f64).to_color(),
        Screen      => a.combine(&b, |a, b| 255.0 - ((int((255.0 - a) * (255.0 - b)) >> 8) as f64)).to_color(),

        Overlay     => {
            let overlay     = |a: f64, b: f64| if a < 128.0 { int(a * b) >> 7 } else { 255 - (int((255.0 - a) * (255.0 - b)) >> 7) };
            let blue        = if options.overlay_compatibility {
                if a.red < 128.0 { int(a.red * b.blue) >> 7 } else { 255 - (int((255.0 - a.blue) * (255.0 - b.blue)) >> 7) }
            } else {
                overlay(a.blue, b.blue)
            };

            Channels { red: overlay(a.red, b.red) as f64, green: overlay(a.green, b.green) as f64, blue: blue as f64 }.to_color()
        }

        HardLight   => a.combine_int(&b, |a, b| if b < 128 { (a * b) >> 7 } else { 255 - (((255 - a) * (255 - b)) >> 7) }).to_color(),
        SoftLight   => a.combine_int(&b, |a, b| ((a * b) >> 7) + ((a * a) >> 8) - ((a * a * b) >> 15)).to_color(),

        Dodge       => a.combine_int(&b, |a, b| {
            if b == 255 {
                255
            } else {
                ((a << 8) / (255 - b)).max(0).min(255)
            }
        }).to_color(),

        Burn        => a.combine_int(&b, |a, b| {
            if b == 0 {
                0
            } else {
                255 - (((255 - a) << 8) / b).max(0).min(255)
            }
        }).to_color()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn channels(color: Color) -> (i32, i32, i32) {
        let channels = decompose(color);
        (channels.red.round() as i32, channels.green.round() as i32, channels.blue.round() as i32)
    }

    #[test]
    fn multiply_uses_fixed_point() {
        let gray = color(200.0, 200.0, 200.0);

        assert!(channels(blend_color(gray, gray, BlendColorMode::Multiply)) == (156, 156, 156));
    }

    #[test]
    fn add_and_subtract_clamp() {
        let light   = color(200.0, 100.0, 10.0);
        let dark    = color(100.0, 50.0, 20.0);

        assert!(channels(blend_color(light, dark, BlendColorMode::Add)) == (255, 150, 30));
        assert!(channels(blend_color(light, dark, BlendColorMode::Subtract)) == (100, 50, 0));
    }

    #[test]
    fn blend_with_opaque_second_color_is_not_clamped() {
        let result = decompose(blend_color(color(100.0, 0.0, 0.0), color(200.0, 0.0, 0.0), BlendColorMode::Blend));

        assert!((result.red - 200.0).abs() < 0.01);

        let result = decompose(blend_color(color(100.0, 0.0, 0.0), color_rgba(200.0, 0.0, 0.0, 0.0), BlendColorMode::Blend));

        assert!((result.red - 300.0).abs() < 0.01);
    }

    #[test]
    fn exclusion_and_screen() {
        let first   = color(100.0, 200.0, 0.0);
        let second  = color(50.0, 100.0, 255.0);

        // 50+100 - (5000>>7 = 39), 100+200 - (20000>>7 = 156), 255 + 0 - 0
        assert!(channels(blend_color(first, second, BlendColorMode::Exclusion)) == (111, 144, 255));

        // 255 - ((155*205)>>8 = 124), 255 - ((55*155)>>8 = 33), 255 - 0
        assert!(channels(blend_color(first, second, BlendColorMode::Screen)) == (131, 222, 255));
    }

    #[test]
    fn overlay_blue_channel_follows_red() {
        let first   = color(100.0, 0.0, 200.0);
        let second  = color(0.0, 0.0, 64.0);

        // Red is under 128 so blue is (100*64)>>7 = 50
        let compat  = blend_color(first, second, BlendColorMode::Overlay);
        assert!(channels(compat).2 == 50);

        // Corrected: blue is over 128 so it's screened: 255 - ((55*191)>>7 = 82)
        let fixed   = blend_color_with(first, second, BlendColorMode::Overlay, &BlendOptions { overlay_compatibility: false });
        assert!(channels(fixed).2 == 173);
    }

    #[test]
    fn dodge_and_burn_clamp() {
        let first   = color(200.0, 0.0, 128.0);
        let second  = color(200.0, 255.0, 0.0);

        // (200<<8)/55 = 930 -> 255, 255 stays 255, (128<<8)/255 = 128
        assert!(channels(blend_color(first, second, BlendColorMode::Dodge)) == (255, 255, 128));

        // 255 - ((55<<8)/200 = 70), 255 - ((255<<8)/255 -> 255), 0
        assert!(channels(blend_color(first, second, BlendColorMode::Burn)) == (185, 0, 0));
    }

    #[test]
    fn soft_and_hard_light() {
        let first   = color(100.0, 100.0, 100.0);
        let second  = color(50.0, 200.0, 100.0);

        // Hard light: (100*50)>>7 = 39; 255 - ((155*55)>>7 = 66) = 189; (100*100)>>7 = 78
        assert!(channels(blend_color(first, second, BlendColorMode::HardLight)) == (39, 189, 78));

        // Soft light: 39 + 39 - (500000>>15 = 15) = 63
        assert!(channels(blend_color(first, second, BlendColorMode::SoftLight)).0 == 63);
    }

    #[test]
    fn fractional_channels_are_kept_by_arithmetic_modes() {
        let result = decompose(blend_color(color(100.5, 0.0, 0.0), color(50.25, 0.0, 0.0), BlendColorMode::Add));

        assert!((result.red - 150.75).abs() < 0.01);
    }

    #[test]
    fn integer_modes_truncate_fractional_channels() {
        let first   = color(100.7, 0.0, 0.0);
        let second  = color(50.9, 0.0, 0.0);

        // (100*50)>>7 = 39, where rounding the channels first would give (101*51)>>7 = 40
        assert!(channels(blend_color(first, second, BlendColorMode::HardLight)).0 == 39);

        // Multiply truncates the product: 100.7*50.9 = 5125.63 -> 5125>>8 = 20
        assert!(channels(blend_color(first, second, BlendColorMode::Multiply)).0 == 20);
    }

    #[test]
    fn result_is_opaque() {
        let result = blend_color(color_rgba(10.0, 10.0, 10.0, 10.0), color_rgba(10.0, 10.0, 10.0, 10.0), BlendColorMode::Darkest);

        assert!((decompose(result).alpha - 255.0).abs() < 0.01);
    }
}
