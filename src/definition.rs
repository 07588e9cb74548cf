use std::io::{Error, ErrorKind, Result};

use serde::Deserialize;

use crate::builder::FlowEffectBuilder;
use crate::color::Color;
use crate::effect::Direction;

/// Palette entries may be written either as `"#rrggbb"` strings or as hsb tables.
#[allow(clippy::missing_docs_in_private_items)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PaletteEntry {
  Hex(String),
  Hsb(Color),
}

impl PaletteEntry {
  /// Resolves the entry into a palette color.
  pub fn color(&self) -> Result<Color> {
    match self {
      PaletteEntry::Hex(hex) => hex.parse(),
      PaletteEntry::Hsb(color) => Ok(*color),
    }
  }
}

/// A flow effect as written in a toml file. Every key is optional; missing keys leave the
/// corresponding builder default in place.
///
/// ```toml
/// name = "Sunset"
/// palette = ["#ff6600", "#3366ff"]
/// direction = "right"
/// max_trans_time = 20
/// loop = true
/// ```
#[allow(clippy::missing_docs_in_private_items)]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowDefinition {
  pub name: Option<String>,
  pub version: Option<String>,
  pub color_type: Option<String>,
  pub palette: Option<Vec<PaletteEntry>>,
  pub max_trans_time: Option<i32>,
  pub min_trans_time: Option<i32>,
  pub max_delay_time: Option<i32>,
  pub min_delay_time: Option<i32>,
  pub flow_factor: Option<f32>,
  pub direction: Option<Direction>,

  #[serde(rename = "loop")]
  pub looping: Option<bool>,
}

impl FlowDefinition {
  /// Parses a definition from toml source.
  pub fn from_toml(source: &str) -> Result<Self> {
    toml::from_str(source).map_err(|error| {
      log::warn!("unable to parse flow definition - {}", error);
      Error::new(ErrorKind::InvalidData, error)
    })
  }

  /// Applies every present key to a default builder. Fails only if a hex palette entry is malformed.
  pub fn builder(&self) -> Result<FlowEffectBuilder> {
    let mut builder = FlowEffectBuilder::default();

    if let Some(name) = &self.name {
      builder = builder.name(name.as_str());
    }

    if let Some(version) = &self.version {
      builder = builder.version(version.as_str());
    }

    if let Some(color_type) = &self.color_type {
      builder = builder.color_type(color_type.as_str());
    }

    if let Some(entries) = &self.palette {
      let colors = entries
        .iter()
        .map(PaletteEntry::color)
        .collect::<Result<Vec<Color>>>()?;
      log::debug!("resolved {} palette colors", colors.len());
      builder = builder.palette(colors);
    }

    if let Some(time) = self.max_trans_time {
      builder = builder.max_trans_time(time);
    }

    if let Some(time) = self.min_trans_time {
      builder = builder.min_trans_time(time);
    }

    if let Some(delay) = self.max_delay_time {
      builder = builder.max_delay_time(delay);
    }

    if let Some(delay) = self.min_delay_time {
      builder = builder.min_delay_time(delay);
    }

    if let Some(factor) = self.flow_factor {
      builder = builder.flow_factor(factor);
    }

    if let Some(direction) = self.direction {
      builder = builder.direction(direction);
    }

    if let Some(looping) = self.looping {
      builder = builder.looping(looping);
    }

    Ok(builder)
  }
}

#[cfg(test)]
mod tests {
  use super::{FlowDefinition, PaletteEntry};
  use crate::{Color, Direction, EffectBuilder, FlowEffectBuilder};

  #[test]
  fn empty_definition_keeps_defaults() {
    let definition = FlowDefinition::from_toml("").unwrap();
    assert_eq!(definition, FlowDefinition::default());
    assert_eq!(definition.builder().unwrap(), FlowEffectBuilder::default());
  }

  #[test]
  fn applies_present_keys() {
    let definition = FlowDefinition::from_toml(
      r##"
        name = "Sunset"
        palette = ["#ff0000", "#0000ff"]
        direction = "right"
        max_trans_time = 20
        flow_factor = 1.5
        loop = true
      "##,
    )
    .unwrap();

    let effect = definition.builder().unwrap().build();
    assert_eq!(effect.name(), Some("Sunset"));
    assert_eq!(
      effect.palette(),
      Some(&[Color::hsb(0, 100, 100), Color::hsb(240, 100, 100)][..])
    );
    assert_eq!(effect.direction(), Some(Direction::Right));
    assert_eq!(effect.max_trans_time(), 20);
    assert_eq!(effect.min_trans_time(), 10);
    assert_eq!(effect.flow_factor(), 1.5);
    assert!(effect.looping());
    assert_eq!(effect.version(), "1.0");
  }

  #[test]
  fn palette_tables_carry_probability() {
    let definition = FlowDefinition::from_toml(
      r#"
        palette = [
          { hue = 330, saturation = 70, brightness = 80, probability = 0.25 },
          { hue = 30, saturation = 70, brightness = 80 },
        ]
      "#,
    )
    .unwrap();

    let effect = definition.builder().unwrap().build();
    assert_eq!(
      effect.palette(),
      Some(&[Color::hsb(330, 70, 80).with_probability(0.25), Color::hsb(30, 70, 80)][..])
    );
  }

  #[test]
  fn rejects_unknown_keys() {
    assert!(FlowDefinition::from_toml("nmae = \"typo\"").is_err());
  }

  #[test]
  fn malformed_hex_fails_builder() {
    let definition = FlowDefinition {
      palette: Some(vec![PaletteEntry::Hex("#12".into())]),
      ..FlowDefinition::default()
    };
    assert!(definition.builder().is_err());
  }
}
