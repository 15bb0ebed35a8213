//! Loading of the serialized model artifacts.
//!
//! Five JSON files under the resources directory back the two classifier
//! paths. Any file missing, unreadable, or dimensionally inconsistent is a
//! fatal startup error; nothing is reloaded after startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::ensemble::TreeEnsemble;
use crate::vectorizer::{CountVectorizer, TfidfTransformer};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model artifact {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("inconsistent artifacts: {0}")]
    Inconsistent(String),
}

/// The liability-apportionment model pair.
#[derive(Debug)]
pub struct LiabilityModel {
    pub vectorizer: CountVectorizer,
    pub classifier: TreeEnsemble,
}

impl LiabilityModel {
    /// Vectorize a token string and echo the predicted class label.
    pub fn predict(&self, tokens: &str) -> String {
        let features = self.vectorizer.transform(tokens);
        self.classifier.predict(&features).to_string()
    }
}

/// The multiple-vehicle-injury model triple (counts → tf-idf → binary trees).
#[derive(Debug)]
pub struct MultiVehicleModel {
    pub vectorizer: CountVectorizer,
    pub tfidf: TfidfTransformer,
    pub classifier: TreeEnsemble,
}

impl MultiVehicleModel {
    /// True when the positive class (multiple vehicles caused injury) wins.
    pub fn predict_positive(&self, tokens: &str) -> bool {
        let counts = self.vectorizer.transform(tokens);
        let features = self.tfidf.transform(&counts);
        self.classifier.predict_positive(&features)
    }
}

/// All model artifacts, loaded once at startup.
#[derive(Debug)]
pub struct ModelBundle {
    pub liability: LiabilityModel,
    pub multi_vehicle: MultiVehicleModel,
}

impl ModelBundle {
    /// Load the five artifacts from `models_dir`.
    pub fn load(models_dir: &Path) -> Result<Self, ModelError> {
        let liability_vocab: HashMap<String, usize> =
            read_json(&models_dir.join("liability_vocabulary.json"))?;
        let liability_trees: TreeEnsemble = read_json(&models_dir.join("liability_model.json"))?;

        let mv_vocab: HashMap<String, usize> =
            read_json(&models_dir.join("multi_vehicle_vocabulary.json"))?;
        let mv_idf: Vec<f32> = read_json(&models_dir.join("multi_vehicle_tfidf.json"))?;
        let mv_trees: TreeEnsemble = read_json(&models_dir.join("multi_vehicle_model.json"))?;

        let bundle = Self {
            liability: LiabilityModel {
                vectorizer: CountVectorizer::new(liability_vocab),
                classifier: liability_trees,
            },
            multi_vehicle: MultiVehicleModel {
                vectorizer: CountVectorizer::new(mv_vocab),
                tfidf: TfidfTransformer::new(mv_idf),
                classifier: mv_trees,
            },
        };
        bundle.validate()?;

        tracing::info!(
            liability_dim = bundle.liability.vectorizer.dim(),
            multi_vehicle_dim = bundle.multi_vehicle.vectorizer.dim(),
            "model artifacts loaded"
        );
        Ok(bundle)
    }

    fn validate(&self) -> Result<(), ModelError> {
        let counts = self.multi_vehicle.vectorizer.dim();
        let idf = self.multi_vehicle.tfidf.dim();
        if counts != idf {
            return Err(ModelError::Inconsistent(format!(
                "multi_vehicle vocabulary has {counts} columns but tfidf table has {idf}"
            )));
        }
        if self.multi_vehicle.classifier.groups.len() != 1 {
            return Err(ModelError::Inconsistent(
                "multi_vehicle model must be binary (one tree group)".to_string(),
            ));
        }
        if self.liability.classifier.classes.is_empty() {
            return Err(ModelError::Inconsistent(
                "liability model carries no class labels".to_string(),
            ));
        }
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ModelError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
