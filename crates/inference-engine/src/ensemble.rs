//! Gradient-boosted decision-tree scoring over serialized artifacts.
//!
//! The classifiers are trained externally; at serving time an artifact is a
//! flat list of trees grouped per class. Binary models carry a single tree
//! group and are scored through a sigmoid; multiclass models take the argmax
//! over per-class margins.

use serde::{Deserialize, Serialize};

/// One node of a decision tree, indexed within its tree's node array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: usize,
        threshold: f32,
        /// Node index taken when `features[feature] < threshold`.
        left: usize,
        right: usize,
    },
    Leaf {
        value: f32,
    },
}

/// A single regression tree; node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Walk from the root to a leaf. Features beyond the vector's length
    /// read as 0.0; a malformed child index terminates the walk at 0.0.
    pub fn score(&self, features: &[f32]) -> f32 {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(Node::Leaf { value }) => return *value,
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().unwrap_or(0.0);
                    index = if value < *threshold { *left } else { *right };
                }
                None => return 0.0,
            }
        }
    }
}

/// A serialized boosted ensemble with its class labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsemble {
    /// One tree group per class; a single group means a binary model whose
    /// positive class is `classes[1]`.
    pub groups: Vec<Vec<Tree>>,
    pub base_score: f32,
    pub classes: Vec<String>,
}

impl TreeEnsemble {
    /// Raw margin per tree group.
    fn margins(&self, features: &[f32]) -> Vec<f32> {
        self.groups
            .iter()
            .map(|trees| self.base_score + trees.iter().map(|t| t.score(features)).sum::<f32>())
            .collect()
    }

    /// Index of the predicted class.
    pub fn predict_index(&self, features: &[f32]) -> usize {
        let margins = self.margins(features);
        if self.groups.len() == 1 {
            let p = sigmoid(margins[0]);
            usize::from(p > 0.5)
        } else {
            margins
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(i, _)| i)
                .unwrap_or(0)
        }
    }

    /// Predicted class label, echoed as carried in the artifact.
    pub fn predict(&self, features: &[f32]) -> &str {
        self.classes
            .get(self.predict_index(features))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// True when a binary model predicts its positive class.
    pub fn predict_positive(&self, features: &[f32]) -> bool {
        self.predict_index(features) == 1
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
