use std::io::{Error, ErrorKind};

use serde::{Deserialize, Serialize};

/// A single palette entry. Devices expect colors in hue/saturation/brightness form where hue is in
/// degrees (`0..=360`) and both saturation and brightness are percentages (`0..=100`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
  /// Degrees around the color wheel.
  pub hue: u16,

  /// Percentage.
  pub saturation: u8,

  /// Percentage.
  pub brightness: u8,

  /// Only meaningful for effect types that pick palette entries at random; omitted otherwise.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub probability: Option<f32>,
}

impl Color {
  /// Creates a color directly from its hsb components. Values are stored as given.
  pub fn hsb(hue: u16, saturation: u8, brightness: u8) -> Self {
    Self {
      hue,
      saturation,
      brightness,
      probability: None,
    }
  }

  /// Converts an 8-bit rgb triple into the hsb form used by palettes.
  pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
    let (r, g, b) = (red as f32 / 255.0, green as f32 / 255.0, blue as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= f32::EPSILON {
      0.0
    } else if max == r {
      60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
      60.0 * ((b - r) / delta + 2.0)
    } else {
      60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max <= f32::EPSILON { 0.0 } else { delta / max };

    Self::hsb(
      (hue.round() as u16) % 360,
      (saturation * 100.0).round() as u8,
      (max * 100.0).round() as u8,
    )
  }

  /// Returns a copy of this color carrying the given selection probability.
  pub fn with_probability(mut self, probability: f32) -> Self {
    self.probability = Some(probability);
    self
  }
}

impl std::fmt::Display for Color {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "h[{}] s[{}] b[{}]", self.hue, self.saturation, self.brightness)
  }
}

impl std::str::FromStr for Color {
  type Err = Error;

  /// Parses `#rrggbb` (the leading `#` is optional).
  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let digits = input.trim().trim_start_matches('#');

    if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
      return Err(Error::new(
        ErrorKind::InvalidInput,
        format!("'{input}' is not a '#rrggbb' color"),
      ));
    }

    let channels = (0..digits.len())
      .step_by(2)
      .map(|i| u8::from_str_radix(&digits[i..i + 2], 16))
      .collect::<Result<Vec<u8>, _>>()
      .map_err(|error| {
        log::warn!("unable to parse hex color '{}' - {}", input, error);
        Error::new(ErrorKind::InvalidInput, error)
      })?;

    Ok(Self::from_rgb(channels[0], channels[1], channels[2]))
  }
}
