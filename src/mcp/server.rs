//! Step Tracker MCP Server Implementation
//!
//! Exposes the activity pipelines as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::tools::activity;
use crate::tools::status::StatusTracker;

/// Step Tracker MCP Service
#[derive(Clone)]
pub struct TrackerService {
    config: TrackerConfig,
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<TrackerService>,
}

impl TrackerService {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config))),
            tool_router: Self::tool_router(),
        }
    }

    async fn count_record(&self) {
        self.status_tracker.lock().await.record_processed();
    }
}

fn tracker_error(e: TrackerError) -> McpError {
    McpError::invalid_params(
        e.to_string(),
        Some(serde_json::json!({ "kind": e.kind() })),
    )
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecordParams {
    /// Activity record: "steps,duration" or "steps,activity,duration" (e.g. "1000,running,30m")
    pub data: String,
    /// Body weight in kilograms (defaults to the configured profile)
    pub weight_kg: Option<f64>,
    /// Body height in meters (defaults to the configured profile)
    pub height_m: Option<f64>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl TrackerService {
    // --- Status ---

    #[tool(description = "Get the current status of the steptrack service including build info, default body profile, and process information")]
    async fn tracker_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for the record formats, supported activities and formulas. Call this when unsure how to write an activity record.")]
    fn tracker_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::TRACKER_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(TRACKER_INSTRUCTIONS)]))
    }

    // --- Activity ---

    #[tool(description = "Summarize a day of walking from a 'steps,duration' record: step count, distance in km and calories burned")]
    async fn day_action_info(&self, Parameters(p): Parameters<RecordParams>) -> Result<CallToolResult, McpError> {
        self.count_record().await;
        let profile = self.config.profile_or_default(p.weight_kg, p.height_m);
        let report = activity::day_action_info(&p.data, profile.weight_kg, profile.height_m)
            .map_err(tracker_error)?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Summarize a training session from a 'steps,activity,duration' record (activity: running/бег or walking/ходьба): duration, distance, mean speed and calories burned")]
    async fn training_info(&self, Parameters(p): Parameters<RecordParams>) -> Result<CallToolResult, McpError> {
        self.count_record().await;
        let profile = self.config.profile_or_default(p.weight_kg, p.height_m);
        let report = activity::training_info(&p.data, profile.weight_kg, profile.height_m)
            .map_err(tracker_error)?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Compute activity metrics as JSON (activity, steps, duration_hours, distance_km, mean_speed_kmh, calories_burned) from a record in either layout")]
    async fn compute_metrics(&self, Parameters(p): Parameters<RecordParams>) -> Result<CallToolResult, McpError> {
        self.count_record().await;
        let profile = self.config.profile_or_default(p.weight_kg, p.height_m);
        let result = activity::metrics_info(&p.data, &profile).map_err(tracker_error)?;
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for TrackerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "steptrack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Step Tracker".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Step Tracker - distance, speed and calorie estimates from step records. \
                 IMPORTANT: Call tracker_instructions for record formats. \
                 Day steps ('steps,duration'): day_action_info. \
                 Training ('steps,activity,duration'): training_info. \
                 JSON metrics for either layout: compute_metrics. \
                 weight_kg/height_m are optional and default to the configured profile. \
                 Status: tracker_status."
                    .into(),
            ),
        }
    }
}
