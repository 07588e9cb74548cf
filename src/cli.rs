use std::io::Result;

use crate::builder::EffectBuilder;
use crate::definition::FlowDefinition;
use crate::effect::WriteCommand;

/// The things the command line tool can do with a loaded definition.
#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
  /// Print the `{"write": ...}` json body for the effect.
  Render {
    #[arg(long, default_value = "add")]
    command: WriteCommand,

    #[arg(long)]
    pretty: bool,
  },

  /// Check the effect for a name, a palette and sane timing ranges.
  Validate,
}

/// Builds the effect described by `definition` and returns the text the tool should print.
pub fn execute(action: &Action, definition: &FlowDefinition) -> Result<String> {
  let effect = definition.builder()?.build();

  match action {
    Action::Render { command, pretty } => {
      let request = effect.write_request(*command);
      let output = if *pretty {
        serde_json::to_string_pretty(&request)?
      } else {
        serde_json::to_string(&request)?
      };
      Ok(output)
    }
    Action::Validate => {
      effect.validate()?;
      let message = format!("effect '{}' is valid", effect.name().unwrap_or_default());
      log::info!("{}", message);
      Ok(message)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{execute, Action};
  use crate::definition::FlowDefinition;
  use crate::WriteCommand;

  #[test]
  fn pretty_and_compact_render_the_same_json() {
    let definition = FlowDefinition::from_toml("name = \"Glow\"\npalette = [\"#ffffff\"]").unwrap();
    let compact = execute(
      &Action::Render {
        command: WriteCommand::Add,
        pretty: false,
      },
      &definition,
    )
    .unwrap();
    let pretty = execute(
      &Action::Render {
        command: WriteCommand::Add,
        pretty: true,
      },
      &definition,
    )
    .unwrap();

    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    assert_eq!(
      serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
      serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
    );
  }
}
