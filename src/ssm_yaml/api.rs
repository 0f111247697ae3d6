//! # API Facade
//!
//! A thin facade over the command layer, generic over the storage backend:
//! production wires `SsmYamlApi<SsmStore>`, tests use
//! `SsmYamlApi<InMemoryStore>`. No business logic, no I/O — it only
//! dispatches and returns structured results.

use crate::commands::{self, CmdResult};
use crate::commands::delete::DeletePlan;
use crate::commands::load::LoadOptions;
use crate::commands::save::SaveOptions;
use crate::commands::tree::TreeOptions;
use crate::error::Result;
use crate::store::ParamStore;
use serde_yaml::Value;

pub struct SsmYamlApi<S: ParamStore> {
    store: S,
}

impl<S: ParamStore> SsmYamlApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// YAML → store.
    pub fn load(&mut self, doc: &Value, opts: &LoadOptions) -> Result<CmdResult> {
        commands::load::run(&mut self.store, doc, opts)
    }

    /// Store → YAML.
    pub fn save(&self, opts: &SaveOptions) -> Result<CmdResult> {
        commands::save::run(&self.store, opts)
    }

    /// Derive the key set a delete would remove, without removing anything.
    pub fn delete_plan(&self, doc: &Value, prefix: &str) -> DeletePlan {
        commands::delete::plan(&self.store, doc, prefix)
    }

    /// Carry out a previously shown plan.
    pub fn delete_execute(&mut self, plan: &DeletePlan) -> Result<CmdResult> {
        commands::delete::execute(&mut self.store, plan)
    }

    /// Render the store namespace as a tree.
    pub fn tree(&self, opts: &TreeOptions) -> Result<CmdResult> {
        commands::tree::run(&self.store, opts)
    }
}
