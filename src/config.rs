use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::force::Force;
use crate::piece::PlacedPiece;
use crate::starter::{layout_from_diagram, starting_layout};


// Game setup, typically read from a YAML file. All fields are optional:
//
//   first_to_move: Black
//   diagram: |
//     . . . . k . . .
//     ...
//
// `layout` and `diagram` are mutually exclusive. Without either the standard layout is used.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub first_to_move: Force,
    pub layout: Option<Vec<PlacedPiece>>,
    pub diagram: Option<String>,
}

impl GameConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> { serde_yaml::from_str(yaml) }

    pub fn layout(&self) -> Result<Vec<PlacedPiece>, SetupError> {
        match (&self.layout, &self.diagram) {
            (Some(_), Some(_)) => Err(SetupError::ConflictingLayout),
            (Some(layout), None) => Ok(layout.clone()),
            (None, Some(diagram)) => layout_from_diagram(diagram),
            (None, None) => Ok(starting_layout()),
        }
    }
}
