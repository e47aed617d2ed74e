//! Per-agent evaluation records.
//!
//! Bookkeeping for an external search process: where each candidate agent
//! ended up and how it scored, by generation. The simulation core never
//! touches these; callers fill them in from evaluation outcomes.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to access record store file")]
    Io(#[from] io::Error),
    #[error("malformed record store contents")]
    Format(#[from] serde_json::Error),
}

/// Outcome of evaluating one agent in one generation. The `-1` sentinels of
/// the unevaluated state are kept for compatibility with existing tooling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub generation: u32,
    pub agent_id: u64,
    pub x: f64,
    pub y: f64,
    pub fitness: f64,
    pub hit_exit: bool,
    pub species_id: i64,
    pub species_age: i64,
}

impl AgentRecord {
    pub fn new(generation: u32, agent_id: u64) -> Self {
        Self {
            generation,
            agent_id,
            x: -1.0,
            y: -1.0,
            fitness: -1.0,
            hit_exit: false,
            species_id: -1,
            species_age: -1,
        }
    }
}

/// Append-only collection of [`AgentRecord`]s with JSON persistence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentRecordStore {
    records: Vec<AgentRecord>,
}

impl AgentRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: AgentRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let contents = fs::read_to_string(path)?;
        let records = serde_json::from_str(&contents)?;
        Ok(Self { records })
    }

    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<(), RecordError> {
        let contents = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
