use std::io::{Error, ErrorKind, Result};

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// The animation families understood by panel devices. Builders in this crate only produce `Flow`,
/// but decoded effects may carry any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimType {
  Random,
  Flow,
  Wheel,
  Fade,
  Highlight,
  Custom,
  Static,
  Explode,
  Plugin,
}

impl std::fmt::Display for AnimType {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      AnimType::Random => write!(formatter, "random"),
      AnimType::Flow => write!(formatter, "flow"),
      AnimType::Wheel => write!(formatter, "wheel"),
      AnimType::Fade => write!(formatter, "fade"),
      AnimType::Highlight => write!(formatter, "highlight"),
      AnimType::Custom => write!(formatter, "custom"),
      AnimType::Static => write!(formatter, "static"),
      AnimType::Explode => write!(formatter, "explode"),
      AnimType::Plugin => write!(formatter, "plugin"),
    }
  }
}

/// The direction colors travel across the panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Left,
  Right,
  Up,
  Down,
  Outwards,
}

/// A finished effect definition. Values are produced by a builder (or decoded from json) and are
/// not modified afterwards; every field is exposed through a read accessor.
///
/// Equality compares `flow_factor` by bit pattern, so an effect always equals a copy of itself even
/// when the factor is NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "EffectSchema", from = "EffectSchema")]
pub struct Effect {
  pub(crate) name: Option<String>,
  pub(crate) version: String,
  pub(crate) anim_type: AnimType,
  pub(crate) color_type: String,
  pub(crate) palette: Option<Vec<Color>>,
  pub(crate) max_trans_time: i32,
  pub(crate) min_trans_time: i32,
  pub(crate) max_delay_time: i32,
  pub(crate) min_delay_time: i32,
  pub(crate) flow_factor: f32,
  pub(crate) direction: Option<Direction>,
  pub(crate) looping: bool,
}

impl PartialEq for Effect {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
      && self.version == other.version
      && self.anim_type == other.anim_type
      && self.color_type == other.color_type
      && self.palette == other.palette
      && self.max_trans_time == other.max_trans_time
      && self.min_trans_time == other.min_trans_time
      && self.max_delay_time == other.max_delay_time
      && self.min_delay_time == other.min_delay_time
      && self.flow_factor.to_bits() == other.flow_factor.to_bits()
      && self.direction == other.direction
      && self.looping == other.looping
  }
}

impl Effect {
  #[allow(clippy::missing_docs_in_private_items)]
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn version(&self) -> &str {
    &self.version
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn anim_type(&self) -> AnimType {
    self.anim_type
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn color_type(&self) -> &str {
    &self.color_type
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn palette(&self) -> Option<&[Color]> {
    self.palette.as_deref()
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn max_trans_time(&self) -> i32 {
    self.max_trans_time
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn min_trans_time(&self) -> i32 {
    self.min_trans_time
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn max_delay_time(&self) -> i32 {
    self.max_delay_time
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn min_delay_time(&self) -> i32 {
    self.min_delay_time
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn flow_factor(&self) -> f32 {
    self.flow_factor
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn direction(&self) -> Option<Direction> {
    self.direction
  }

  /// Whether the animation restarts after reaching the end of its palette.
  pub fn looping(&self) -> bool {
    self.looping
  }

  /// Builders never check their input; this is the opt-in completeness check for callers about to
  /// send an effect somewhere. It requires a non-blank name, a non-empty palette and timing ranges
  /// whose maximum is not below their minimum.
  pub fn validate(&self) -> Result<()> {
    let name = self.name.as_deref().map(str::trim).unwrap_or_default();

    if name.is_empty() {
      log::warn!("effect is missing a name");
      return Err(Error::new(ErrorKind::InvalidData, "effect is missing a name"));
    }

    if self.palette.as_ref().map(|colors| colors.is_empty()).unwrap_or(true) {
      log::warn!("effect '{}' has no palette", name);
      return Err(Error::new(ErrorKind::InvalidData, format!("effect '{name}' has no palette")));
    }

    if self.max_trans_time < self.min_trans_time {
      let message = format!(
        "effect '{}' has max transition time {} below min {}",
        name, self.max_trans_time, self.min_trans_time
      );
      log::warn!("{}", message);
      return Err(Error::new(ErrorKind::InvalidData, message));
    }

    if self.max_delay_time < self.min_delay_time {
      let message = format!(
        "effect '{}' has max delay time {} below min {}",
        name, self.max_delay_time, self.min_delay_time
      );
      log::warn!("{}", message);
      return Err(Error::new(ErrorKind::InvalidData, message));
    }

    Ok(())
  }

  /// Wraps the effect in the envelope used by the device's effect write api.
  pub fn write_request(&self, command: WriteCommand) -> WriteRequest<'_> {
    WriteRequest {
      write: WriteBody { command, effect: self },
    }
  }
}

/// What the device should do with a written effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteCommand {
  /// Store the effect on the device.
  Add,

  /// Play the effect without storing it.
  Display,
}

impl std::str::FromStr for WriteCommand {
  type Err = Error;

  fn from_str(input: &str) -> Result<Self> {
    match input {
      "add" | "Add" | "ADD" => Ok(Self::Add),
      "display" | "Display" | "DISPLAY" => Ok(Self::Display),
      other => Err(Error::new(
        ErrorKind::InvalidInput,
        format!("unrecognized write command '{other}'"),
      )),
    }
  }
}

/// The serializable `{"write": {...}}` body.
#[derive(Debug, Serialize)]
pub struct WriteRequest<'a> {
  /// The command and the effect fields share a single object.
  write: WriteBody<'a>,
}

#[allow(clippy::missing_docs_in_private_items)]
#[derive(Debug, Serialize)]
struct WriteBody<'a> {
  command: WriteCommand,

  #[serde(flatten)]
  effect: &'a Effect,
}

/// Timing values are nested as `{ "maxValue": .., "minValue": .. }` on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeRange {
  #[allow(clippy::missing_docs_in_private_items)]
  max_value: i32,

  #[allow(clippy::missing_docs_in_private_items)]
  min_value: i32,
}

/// The vendor's effect-definition json layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EffectSchema {
  #[allow(clippy::missing_docs_in_private_items)]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  anim_name: Option<String>,

  #[allow(clippy::missing_docs_in_private_items)]
  version: String,

  #[allow(clippy::missing_docs_in_private_items)]
  anim_type: AnimType,

  #[allow(clippy::missing_docs_in_private_items)]
  color_type: String,

  #[allow(clippy::missing_docs_in_private_items)]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  palette: Option<Vec<Color>>,

  #[allow(clippy::missing_docs_in_private_items)]
  trans_time: TimeRange,

  #[allow(clippy::missing_docs_in_private_items)]
  delay_time: TimeRange,

  #[allow(clippy::missing_docs_in_private_items)]
  #[serde(default)]
  flow_factor: f32,

  #[allow(clippy::missing_docs_in_private_items)]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  direction: Option<Direction>,

  #[allow(clippy::missing_docs_in_private_items)]
  #[serde(default, rename = "loop")]
  looping: bool,
}

impl From<Effect> for EffectSchema {
  fn from(effect: Effect) -> Self {
    let Effect {
      name,
      version,
      anim_type,
      color_type,
      palette,
      max_trans_time,
      min_trans_time,
      max_delay_time,
      min_delay_time,
      flow_factor,
      direction,
      looping,
    } = effect;

    Self {
      anim_name: name,
      version,
      anim_type,
      color_type,
      palette,
      trans_time: TimeRange {
        max_value: max_trans_time,
        min_value: min_trans_time,
      },
      delay_time: TimeRange {
        max_value: max_delay_time,
        min_value: min_delay_time,
      },
      flow_factor,
      direction,
      looping,
    }
  }
}

impl From<EffectSchema> for Effect {
  fn from(schema: EffectSchema) -> Self {
    Self {
      name: schema.anim_name,
      version: schema.version,
      anim_type: schema.anim_type,
      color_type: schema.color_type,
      palette: schema.palette,
      max_trans_time: schema.trans_time.max_value,
      min_trans_time: schema.trans_time.min_value,
      max_delay_time: schema.delay_time.max_value,
      min_delay_time: schema.delay_time.min_value,
      flow_factor: schema.flow_factor,
      direction: schema.direction,
      looping: schema.looping,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{AnimType, Direction, WriteCommand};
  use crate::{Color, EffectBuilder, FlowEffectBuilder};

  fn sunset() -> FlowEffectBuilder {
    FlowEffectBuilder::default()
      .name("Sunset")
      .palette(vec![Color::hsb(10, 90, 100), Color::hsb(40, 80, 90)])
  }

  #[test]
  fn encodes_vendor_schema() {
    let effect = sunset()
      .max_trans_time(30)
      .min_trans_time(5)
      .flow_factor(1.5)
      .direction(Direction::Outwards)
      .looping(true)
      .build();

    assert_eq!(
      serde_json::to_value(&effect).unwrap(),
      serde_json::json!({
        "animName": "Sunset",
        "version": "1.0",
        "animType": "flow",
        "colorType": "HSB",
        "palette": [
          { "hue": 10, "saturation": 90, "brightness": 100 },
          { "hue": 40, "saturation": 80, "brightness": 90 }
        ],
        "transTime": { "maxValue": 30, "minValue": 5 },
        "delayTime": { "maxValue": 10, "minValue": 10 },
        "flowFactor": 1.5,
        "direction": "outwards",
        "loop": true
      })
    );
  }

  #[test]
  fn omits_unset_optional_fields() {
    let value = serde_json::to_value(FlowEffectBuilder::default().build()).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("animName"));
    assert!(!object.contains_key("palette"));
    assert!(!object.contains_key("direction"));
    assert_eq!(value["loop"], serde_json::json!(false));
  }

  #[test]
  fn decodes_what_it_encodes() {
    let effect = sunset().direction(Direction::Left).build();
    let text = serde_json::to_string(&effect).unwrap();
    let decoded = serde_json::from_str::<super::Effect>(&text).unwrap();
    assert_eq!(decoded, effect);
  }

  #[test]
  fn decodes_other_anim_types() {
    let decoded = serde_json::from_value::<super::Effect>(serde_json::json!({
      "animName": "Blink",
      "version": "1.0",
      "animType": "random",
      "colorType": "HSB",
      "transTime": { "maxValue": 4, "minValue": 2 },
      "delayTime": { "maxValue": 8, "minValue": 6 }
    }))
    .unwrap();

    assert_eq!(decoded.anim_type(), AnimType::Random);
    assert_eq!(decoded.max_delay_time(), 8);
    assert_eq!(decoded.flow_factor(), 0.0);
    assert!(!decoded.looping());
  }

  #[test]
  fn write_request_wraps_effect() {
    let effect = sunset().build();
    let value = serde_json::to_value(effect.write_request(WriteCommand::Display)).unwrap();
    assert_eq!(value["write"]["command"], serde_json::json!("display"));
    assert_eq!(value["write"]["animName"], serde_json::json!("Sunset"));
    assert_eq!(value["write"]["transTime"]["maxValue"], serde_json::json!(10));
  }

  #[test]
  fn write_command_parsing() {
    assert_eq!("add".parse::<WriteCommand>().ok(), Some(WriteCommand::Add));
    assert_eq!("DISPLAY".parse::<WriteCommand>().ok(), Some(WriteCommand::Display));
    assert!("delete".parse::<WriteCommand>().is_err());
  }

  #[test]
  fn validate_accepts_complete_effect() {
    assert!(sunset().build().validate().is_ok());
  }

  #[test]
  fn validate_rejects_incomplete_effects() {
    assert!(FlowEffectBuilder::default().palette(vec![Color::hsb(0, 0, 0)]).build().validate().is_err());
    assert!(FlowEffectBuilder::default().name("   ").palette(vec![Color::hsb(0, 0, 0)]).build().validate().is_err());
    assert!(FlowEffectBuilder::default().name("Empty").build().validate().is_err());
    assert!(FlowEffectBuilder::default().name("Empty").palette(vec![]).build().validate().is_err());
  }

  #[test]
  fn validate_rejects_inverted_ranges() {
    assert!(sunset().max_trans_time(1).min_trans_time(2).build().validate().is_err());
    assert!(sunset().max_delay_time(1).min_delay_time(2).build().validate().is_err());
    assert!(sunset().max_delay_time(2).min_delay_time(2).build().validate().is_ok());
  }
}
