use anyhow::{Context, Result};
use cubes::rules::{DEFAULT_CUBES, DEFAULT_K, RuleSet};

pub mod analyze;
pub mod play;
pub mod simulate;

/// Parameters of the `{1, 2, K}` game
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct RulesArgs {
    /// Largest move size, the move set is {1, 2, K}
    #[arg(long, default_value_t = DEFAULT_K)]
    k: u32,

    /// Number of cubes on the table at the start
    #[arg(long, default_value_t = DEFAULT_CUBES)]
    cubes: u32,
}

impl Default for RulesArgs {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            cubes: DEFAULT_CUBES,
        }
    }
}

impl RulesArgs {
    pub fn rules(&self) -> Result<RuleSet> {
        RuleSet::classic(self.k, self.cubes)
            .with_context(|| format!("Invalid value --k {}", self.k))
    }
}
