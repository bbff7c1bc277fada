//! Agent implementations of the [`crate::ports::Agent`] port.

pub mod optimal_agent;
pub mod random_agent;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use optimal_agent::OptimalAgent;
pub use random_agent::RandomAgent;

use crate::ports::Agent;

/// Which agent implementation to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    #[default]
    Optimal,
    Random,
}

impl AgentKind {
    /// Creates a boxed agent from the kind, seeding it when a seed is given
    pub fn into_agent(self, name: String, seed: Option<u64>) -> Box<dyn Agent> {
        let mut agent: Box<dyn Agent> = match self {
            AgentKind::Optimal => Box::new(OptimalAgent::new(name)),
            AgentKind::Random => Box::new(RandomAgent::new(name)),
        };
        if let Some(seed) = seed {
            agent.set_seed(seed);
        }
        agent
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Optimal => "optimal",
            AgentKind::Random => "random",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimal" | "minimax" => Ok(AgentKind::Optimal),
            "random" => Ok(AgentKind::Random),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown agent '{other}' (expected optimal or random)"),
            }),
        }
    }
}
