use crate::color::Color;
use crate::effect::{AnimType, Direction, Effect};

/// Anything that can produce a finished effect. Building never consumes the builder, so the same
/// builder can be used to stamp out several effects.
pub trait EffectBuilder {
  /// Returns a new, independently owned effect from the builder's current state.
  fn build(&self) -> Effect;
}

/// Collects the settings of a "flow" effect, where palette colors move gradually across the panels.
///
/// ```
/// use petalflow::{Color, Direction, EffectBuilder, FlowEffectBuilder};
///
/// let effect = FlowEffectBuilder::default()
///   .name("Sunset")
///   .palette(vec![Color::hsb(10, 90, 100), Color::hsb(40, 80, 90)])
///   .direction(Direction::Right)
///   .flow_factor(2.5)
///   .looping(true)
///   .build();
///
/// assert_eq!(effect.name(), Some("Sunset"));
/// assert_eq!(effect.version(), "1.0");
/// ```
///
/// No setter validates its input; see `Effect::validate`. Like `Effect`, equality compares the flow
/// factor by bit pattern.
#[derive(Debug, Clone)]
pub struct FlowEffectBuilder {
  #[allow(clippy::missing_docs_in_private_items)]
  name: Option<String>,

  /// Devices only understand "1.0".
  version: String,

  #[allow(clippy::missing_docs_in_private_items)]
  color_type: String,

  #[allow(clippy::missing_docs_in_private_items)]
  palette: Option<Vec<Color>>,

  #[allow(clippy::missing_docs_in_private_items)]
  max_trans_time: i32,

  #[allow(clippy::missing_docs_in_private_items)]
  min_trans_time: i32,

  #[allow(clippy::missing_docs_in_private_items)]
  max_delay_time: i32,

  #[allow(clippy::missing_docs_in_private_items)]
  min_delay_time: i32,

  #[allow(clippy::missing_docs_in_private_items)]
  flow_factor: f32,

  #[allow(clippy::missing_docs_in_private_items)]
  direction: Option<Direction>,

  #[allow(clippy::missing_docs_in_private_items)]
  looping: bool,
}

impl Default for FlowEffectBuilder {
  fn default() -> Self {
    Self {
      name: None,
      version: "1.0".into(),
      color_type: "HSB".into(),
      palette: None,
      max_trans_time: 10,
      min_trans_time: 10,
      max_delay_time: 10,
      min_delay_time: 10,
      flow_factor: 0.0,
      direction: None,
      looping: false,
    }
  }
}

impl PartialEq for FlowEffectBuilder {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
      && self.version == other.version
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

impl FlowEffectBuilder {
  #[allow(clippy::missing_docs_in_private_items)]
  pub fn name<S>(mut self, name: S) -> Self
  where
    S: Into<String>,
  {
    self.name = Some(name.into());
    self
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn color_type<S>(mut self, color_type: S) -> Self
  where
    S: Into<String>,
  {
    self.color_type = color_type.into();
    self
  }

  /// Replaces the palette; colors are used as transition stops in the given order.
  pub fn palette<I>(mut self, colors: I) -> Self
  where
    I: IntoIterator<Item = Color>,
  {
    self.palette = Some(colors.into_iter().collect());
    self
  }

  /// Sets the maximum transition time, in tenths of a second.
  pub fn max_trans_time(mut self, time: i32) -> Self {
    self.max_trans_time = time;
    self
  }

  /// Sets the minimum transition time, in tenths of a second.
  pub fn min_trans_time(mut self, time: i32) -> Self {
    self.min_trans_time = time;
    self
  }

  /// Sets the maximum delay between transitions, in tenths of a second.
  pub fn max_delay_time(mut self, delay: i32) -> Self {
    self.max_delay_time = delay;
    self
  }

  /// Sets the minimum delay between transitions, in tenths of a second.
  pub fn min_delay_time(mut self, delay: i32) -> Self {
    self.min_delay_time = delay;
    self
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn flow_factor(mut self, factor: f32) -> Self {
    self.flow_factor = factor;
    self
  }

  /// Sets the overall direction of movement.
  pub fn direction(mut self, direction: Direction) -> Self {
    self.direction = Some(direction);
    self
  }

  #[allow(clippy::missing_docs_in_private_items)]
  pub fn looping(mut self, looping: bool) -> Self {
    self.looping = looping;
    self
  }

  /// Sets the effect version. This should almost always be left at "1.0".
  pub fn version<S>(mut self, version: S) -> Self
  where
    S: Into<String>,
  {
    self.version = version.into();
    self
  }
}

impl EffectBuilder for FlowEffectBuilder {
  fn build(&self) -> Effect {
    log::debug!(
      "building flow effect '{}' ({} colors)",
      self.name.as_deref().unwrap_or_default(),
      self.palette.as_ref().map(Vec::len).unwrap_or_default()
    );

    Effect {
      name: self.name.clone(),
      version: self.version.clone(),
      anim_type: AnimType::Flow,
      color_type: self.color_type.clone(),
      palette: self.palette.clone(),
      max_trans_time: self.max_trans_time,
      min_trans_time: self.min_trans_time,
      max_delay_time: self.max_delay_time,
      min_delay_time: self.min_delay_time,
      flow_factor: self.flow_factor,
      direction: self.direction,
      looping: self.looping,
    }
  }
}
