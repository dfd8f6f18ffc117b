use crate::model::Dataset;

/// Where one table column comes from: a file in the layer directory and a
/// key path inside it.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub column: &'static str,
    pub file: &'static str,
    pub key_path: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct GenerationProfile {
    pub dataset: Dataset,
    /// Path segments between the results directory and `linear/`.
    pub segments: &'static [&'static str],
    /// Every file that must load for a layer, including ones no column reads.
    pub files: &'static [&'static str],
    pub fields: &'static [FieldSpec],
    /// Columns combined into `score`.
    pub score_inputs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ClassificationProfile {
    pub dataset: Dataset,
    pub f1: &'static [&'static str],
    pub mcc: &'static [&'static str],
}

pub const EFFICACY_FILE: &str = "efficacy_metrics.json";
pub const PARAPHRASE_FILE: &str = "paraphrase_metrics.json";
pub const GENERATION_FILE: &str = "generation_metrics.json";
pub const ESSENCE_FILE: &str = "essence_metrics.json";
pub const ERROR_CORRECTION_FILE: &str = "error_correction_metrics.json";
pub const ENTAILMENT_FILE: &str = "entailment_metrics.json";

pub const SCORE_COLUMN: &str = "score";
pub const F1_COLUMN: &str = "f1";
pub const MCC_COLUMN: &str = "mcc";

const GENERATION_PROFILES: &[GenerationProfile] = &[
    GenerationProfile {
        dataset: Dataset::Counterfact,
        segments: &[],
        files: &[EFFICACY_FILE, PARAPHRASE_FILE, GENERATION_FILE, ESSENCE_FILE],
        fields: &[
            FieldSpec {
                column: "efficacy",
                file: PARAPHRASE_FILE,
                key_path: &["score", "mean"],
            },
            FieldSpec {
                column: "consistency",
                file: GENERATION_FILE,
                key_path: &["consistency", "mean"],
            },
            FieldSpec {
                column: "fluency",
                file: GENERATION_FILE,
                key_path: &["fluency", "mean"],
            },
            FieldSpec {
                column: "essence",
                file: ESSENCE_FILE,
                key_path: &["essence", "mean"],
            },
        ],
        score_inputs: &["efficacy", "consistency", "fluency", "essence"],
    },
    GenerationProfile {
        dataset: Dataset::Biosbias,
        segments: &["decontextual"],
        files: &[ERROR_CORRECTION_FILE],
        fields: &[
            FieldSpec {
                column: "accuracy",
                file: ERROR_CORRECTION_FILE,
                key_path: &["top1_accuracy"],
            },
            FieldSpec {
                column: "consistency",
                file: ERROR_CORRECTION_FILE,
                key_path: &["consistency", "mean"],
            },
            FieldSpec {
                column: "fluency",
                file: ERROR_CORRECTION_FILE,
                key_path: &["fluency", "mean"],
            },
        ],
        // consistency is reported but left out of the composite
        score_inputs: &["accuracy", "fluency"],
    },
];

const CLASSIFICATION_PROFILES: &[ClassificationProfile] = &[
    ClassificationProfile {
        dataset: Dataset::Counterfact,
        f1: &["contextual", "f1"],
        mcc: &["contextual", "mcc"],
    },
    ClassificationProfile {
        dataset: Dataset::Biosbias,
        f1: &["f1"],
        mcc: &["mcc"],
    },
];

pub fn generation_profile(dataset: Dataset) -> Option<&'static GenerationProfile> {
    GENERATION_PROFILES.iter().find(|p| p.dataset == dataset)
}

pub fn classification_profile(dataset: Dataset) -> Option<&'static ClassificationProfile> {
    CLASSIFICATION_PROFILES.iter().find(|p| p.dataset == dataset)
}

/// Datasets with a generation or classification profile.
pub fn edit_datasets() -> &'static [Dataset] {
    &[Dataset::Counterfact, Dataset::Biosbias]
}

impl GenerationProfile {
    pub fn columns(&self) -> Vec<String> {
        let mut out: Vec<String> = self.fields.iter().map(|f| f.column.to_string()).collect();
        out.push(SCORE_COLUMN.to_string());
        out
    }
}
