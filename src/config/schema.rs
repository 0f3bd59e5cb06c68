use serde::{Deserialize, Serialize};

use crate::calories::CaloriesConfig;
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub strategy: ScoringConfig,
    #[serde(default)]
    pub calories: CaloriesConfig,
}
