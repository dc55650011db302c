//! Request and response payload shapes exchanged with the web client
//!
//! Shapes only: routing, persistence, and the agent loop itself live in the
//! backend service. Field names are snake_case on the wire apart from
//! `newTasks`, which the client expects camelCased.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::settings::ModelSettings;

/// Phase of the agent loop a request belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopStep {
    Start,
    Analyze,
    Execute,
    Create,
}

impl LoopStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Analyze => "analyze",
            Self::Execute => "execute",
            Self::Create => "create",
        }
    }
}

/// Function the analyze step selected for a task
///
/// The closed set mirrors the function list in the analyze prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisAction {
    Reason,
    Conclude,
    Search,
    Code,
}

/// Outcome of analyzing a single task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub action: AnalysisAction,
    pub arg: String,
}

/// Payload that starts a new agent run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentRunCreate {
    pub goal: String,
    #[serde(default)]
    pub model_settings: ModelSettings,
}

/// A run the backend has assigned an identifier to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentRun {
    #[serde(flatten)]
    pub create: AgentRunCreate,
    pub run_id: String,
}

/// Ask the backend to analyze one task of a run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentTaskAnalyze {
    #[serde(flatten)]
    pub run: AgentRun,
    pub task: String,
    #[serde(default)]
    pub tool_names: Vec<String>,
}

/// Ask the backend to execute one analyzed task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentTaskExecute {
    #[serde(flatten)]
    pub run: AgentRun,
    pub task: String,
    // TODO: make analysis required once the client always sends it
    #[serde(default)]
    pub analysis: Option<Analysis>,
}

/// Ask the backend to derive follow-up tasks from the last result
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentTaskCreate {
    #[serde(flatten)]
    pub run: AgentRun,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub last_task: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub completed_tasks: Vec<String>,
}

/// Follow-up tasks returned to the client
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTasksResponse {
    pub run_id: String,
    #[serde(rename = "newTasks")]
    pub new_tasks: Vec<String>,
}

/// Aggregate run statistics for one user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunCount {
    pub count: u64,
    pub first_run: Option<DateTime<Utc>>,
    pub last_run: Option<DateTime<Utc>>,
}

/// Minimal user identity attached to run queries
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserBase {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}
