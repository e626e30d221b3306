//! Declaration registry collecting resource descriptors for the engine

use crate::error::{ConfigurationError, Result};
use oke_api::ResourceRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// One declared resource: a stable logical name, a provider type token and
/// the fully resolved argument payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub logical_name: String,
    pub kind: String,
    pub args: Value,
}

/// Serializable whole-plan record handed to the reconciliation engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackPlan {
    pub resources: Vec<ResourceDescriptor>,
    pub outputs: BTreeMap<String, ResourceRef>,
}

/// Stack collects resource declarations and exported outputs.
///
/// Declarations are append-only and strictly ordered: a resource may only
/// reference logical names that were declared before it, so the dependency
/// graph is acyclic by construction and creation order is a checked
/// invariant rather than a convention.
#[derive(Debug, Default)]
pub struct Stack {
    descriptors: Vec<ResourceDescriptor>,
    names: BTreeSet<String>,
    outputs: BTreeMap<String, ResourceRef>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a resource and return the handle to its identifier.
    ///
    /// Rejects a duplicate logical name and any reference to a resource
    /// that has not been declared yet.
    pub fn declare<T: Serialize>(&mut self, kind: &str, name: &str, args: &T) -> Result<ResourceRef> {
        if self.names.contains(name) {
            return Err(ConfigurationError::DuplicateResource(name.to_string()).into());
        }

        let args = serde_json::to_value(args)?;
        let mut referenced = BTreeSet::new();
        collect_references(&args, &mut referenced);
        for reference in referenced {
            if !self.names.contains(&reference) {
                return Err(ConfigurationError::UnknownReference {
                    resource: name.to_string(),
                    referenced: reference,
                }
                .into());
            }
        }

        debug!(kind, name, "declared resource");
        self.names.insert(name.to_string());
        self.descriptors.push(ResourceDescriptor {
            logical_name: name.to_string(),
            kind: kind.to_string(),
            args,
        });
        Ok(ResourceRef::id(name))
    }

    /// Publish a resource identifier under a stable output name
    pub fn export(&mut self, output_name: &str, id: &ResourceRef) {
        self.outputs.insert(output_name.to_string(), id.clone());
    }

    pub fn descriptors(&self) -> &[ResourceDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, logical_name: &str) -> Option<&ResourceDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.logical_name == logical_name)
    }

    pub fn outputs(&self) -> &BTreeMap<String, ResourceRef> {
        &self.outputs
    }

    /// Snapshot the declarations and outputs into a serializable plan
    pub fn plan(&self) -> StackPlan {
        StackPlan {
            resources: self.descriptors.clone(),
            outputs: self.outputs.clone(),
        }
    }
}

/// Collect the logical names of every reference token in an argument payload
fn collect_references(value: &Value, out: &mut BTreeSet<String>) {
    match value {
        Value::String(s) => {
            if let Some(name) = ResourceRef::referenced_name(s) {
                out.insert(name.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_references(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_references(item, out);
            }
        }
        _ => {}
    }
}
