use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
pub enum Model {
    #[value(name = "gpt2")]
    #[serde(rename = "gpt2")]
    Gpt2,
    #[value(name = "gpt2-xl")]
    #[serde(rename = "gpt2-xl")]
    Gpt2Xl,
    #[value(name = "gptj")]
    #[serde(rename = "gptj")]
    GptJ,
}

impl Model {
    /// Directory and file-name key.
    pub fn key(self) -> &'static str {
        match self {
            Model::Gpt2 => "gpt2",
            Model::Gpt2Xl => "gpt2-xl",
            Model::GptJ => "gptj",
        }
    }

    pub fn default_display_name(self) -> &'static str {
        match self {
            Model::Gpt2 => "GPT-2",
            Model::Gpt2Xl => "GPT-2 XL",
            Model::GptJ => "GPT-J",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Counterfact,
    Biosbias,
    Mcrae,
}

impl Dataset {
    pub fn key(self) -> &'static str {
        match self {
            Dataset::Counterfact => "counterfact",
            Dataset::Biosbias => "biosbias",
            Dataset::Mcrae => "mcrae",
        }
    }

    pub fn default_display_name(self) -> &'static str {
        match self {
            Dataset::Counterfact => "CounterFact",
            Dataset::Biosbias => "Bias in Bios",
            Dataset::Mcrae => "McRae",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Gen,
    Class,
    Ent,
}

impl TaskKind {
    pub fn key(self) -> &'static str {
        match self {
            TaskKind::Gen => "gen",
            TaskKind::Class => "class",
            TaskKind::Ent => "ent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskKind::Gen => "generation",
            TaskKind::Class => "classification",
            TaskKind::Ent => "entailment",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
