use flo_sketch_canvas::*;

///
/// How the generic colour functions (`fill`, `stroke`, `background` with bare numbers) interpret their channels
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ColorMode {
    /// Red, green and blue
    Rgb,

    /// Hue, saturation and brightness
    Hsb
}

///
/// The arguments to a colour instruction, which may need the current colour mode to be understood
///
/// Channels are on a 0-255 scale, as in Processing.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum ColorArgs {
    /// Three channels and an alpha value, interpreted according to the colour mode
    Channels(f64, f64, f64, f64),

    /// Red, green, blue and alpha regardless of the colour mode
    Rgb(f64, f64, f64, f64),

    /// Hue, saturation, brightness and alpha regardless of the colour mode
    Hsb(f64, f64, f64, f64),

    /// A colour that has already been worked out
    Color(Color)
}

impl ColorArgs {
    ///
    /// Works out the colour these arguments describe in the specified colour mode
    ///
    pub fn resolve(&self, mode: ColorMode) -> Color {
        match (self, mode) {
            (ColorArgs::Channels(r, g, b, a), ColorMode::Rgb)   => color_rgba(*r, *g, *b, *a),
            (ColorArgs::Channels(h, s, b, a), ColorMode::Hsb)   => color_hsba(*h, *s, *b, *a),
            (ColorArgs::Rgb(r, g, b, a), _)                     => color_rgba(*r, *g, *b, *a),
            (ColorArgs::Hsb(h, s, b, a), _)                     => color_hsba(*h, *s, *b, *a),
            (ColorArgs::Color(color), _)                        => *color
        }
    }
}

impl From<f64> for ColorArgs {
    /// A shade of gray (the same value for all three channels)
    fn from(shade: f64) -> ColorArgs {
        ColorArgs::Channels(shade, shade, shade, 255.0)
    }
}

impl From<(f64, f64, f64)> for ColorArgs {
    fn from((a, b, c): (f64, f64, f64)) -> ColorArgs {
        ColorArgs::Channels(a, b, c, 255.0)
    }
}

impl From<(f64, f64, f64, f64)> for ColorArgs {
    fn from((a, b, c, alpha): (f64, f64, f64, f64)) -> ColorArgs {
        ColorArgs::Channels(a, b, c, alpha)
    }
}

impl From<Color> for ColorArgs {
    fn from(color: Color) -> ColorArgs {
        ColorArgs::Color(color)
    }
}

///
/// The channels of a colour on a 0-255 scale
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct DecomposedColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64
}

///
/// An opaque colour from red, green and blue channels (0-255)
///
pub fn color(red: f64, green: f64, blue: f64) -> Color {
    color_rgba(red, green, blue, 255.0)
}

///
/// A colour from red, green, blue and alpha channels (0-255)
///
pub fn color_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Color {
    Color::Rgba((red/255.0) as f32, (green/255.0) as f32, (blue/255.0) as f32, (alpha/255.0) as f32)
}

///
/// An opaque shade of gray (0 is black, 255 is white)
///
pub fn gray(shade: f64) -> Color {
    color(shade, shade, shade)
}

pub fn color_hsb(hue: f64, saturation: f64, brightness: f64) -> Color {
    color_hsba(hue, saturation, brightness, 255.0)
}

///
/// A colour from hue, saturation, brightness and alpha channels (all 0-255, so a hue of 255 is a full turn)
///
pub fn color_hsba(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Color {
    Color::Hsba((hue/255.0) as f32, (saturation/255.0) as f32, (brightness/255.0) as f32, (alpha/255.0) as f32)
}

///
/// Splits a colour into its channels
///
pub fn decompose(color: Color) -> DecomposedColor {
    let (r, g, b, a)    = color.to_rgba();
    let (h, s, v, _)    = color.to_hsba();

    DecomposedColor {
        red:        (r as f64) * 255.0,
        green:      (g as f64) * 255.0,
        blue:       (b as f64) * 255.0,
        alpha:      (a as f64) * 255.0,
        hue:        (h as f64) * 255.0,
        saturation: (s as f64) * 255.0,
        brightness: (v as f64) * 255.0
    }
}

pub fn red(color: Color) -> f64           { decompose(color).red }
pub fn green(color: Color) -> f64         { decompose(color).green }
pub fn blue(color: Color) -> f64          { decompose(color).blue }
pub fn alpha(color: Color) -> f64         { decompose(color).alpha }
pub fn hue(color: Color) -> f64           { decompose(color).hue }
pub fn saturation(color: Color) -> f64    { decompose(color).saturation }
pub fn brightness(color: Color) -> f64    { decompose(color).brightness }

///
/// Interpolates between two colours
///
/// All four RGBA channels are interpolated separately. `amount` is not clamped, so values outside 0-1
/// extrapolate past the two colours.
///
pub fn lerp_color(from: Color, to: Color, amount: f64) -> Color {
    let from    = decompose(from);
    let to      = decompose(to);
    let lerp    = |a: f64, b: f64| a + (b - a) * amount;

    color_rgba(lerp(from.red, to.red), lerp(from.green, to.green), lerp(from.blue, to.blue), lerp(from.alpha, to.alpha))
}
