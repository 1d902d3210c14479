use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::error::CitySummaryError;
use crate::formatters::format_temperature_sentence;
use crate::models::{CityName, CityRequest};
use crate::provider::{SummaryProvider, WeatherProvider};
use crate::writer::SummaryFileWriter;

/// MCP front end exposing the summary lookups as tools
#[derive(Clone)]
pub struct CitySummaryServer {
    weather: Arc<dyn WeatherProvider>,
    summaries: Arc<dyn SummaryProvider>,
    writer: SummaryFileWriter,
    tool_router: ToolRouter<Self>,
}

impl CitySummaryServer {
    /// Creates a new server writing summary files below `writer`'s root
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        summaries: Arc<dyn SummaryProvider>,
        writer: SummaryFileWriter,
    ) -> Self {
        Self {
            weather,
            summaries,
            writer,
            tool_router: Self::tool_router(),
        }
    }
}

/// Maps a lookup failure onto an MCP error
fn to_mcp_error(err: CitySummaryError) -> McpError {
    if err.is_caller_error() {
        McpError::invalid_params(err.to_string(), None)
    } else {
        McpError::internal_error(err.to_string(), None)
    }
}

#[tool_handler]
impl ServerHandler for CitySummaryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "city-summary".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "City summaries powered by OpenWeatherMap and Wikipedia. \
                Looks up current temperatures and article summaries and writes \
                them to local summary files."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl CitySummaryServer {
    #[tool(description = "Create a summary file for a city containing its Wikipedia summary and current temperature. Returns the path of the written file.")]
    async fn create_city_summary(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Creating summary file for city: {}", request.city);

        let path = self
            .writer
            .create_summary_file(&request.city)
            .await
            .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Summary created, path: {}",
            path.display()
        ))]))
    }

    #[tool(description = "Get the current temperature of a city in degrees Celsius.")]
    async fn get_city_temperature(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting temperature for city: {}", request.city);

        let city = CityName::parse(&request.city).map_err(to_mcp_error)?;
        let temperature = self
            .weather
            .fetch_temperature(&city)
            .await
            .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            format_temperature_sentence(&city, temperature),
        )]))
    }

    #[tool(description = "Get the Wikipedia summary of a city.")]
    async fn get_city_summary(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting summary for city: {}", request.city);

        let city = CityName::parse(&request.city).map_err(to_mcp_error)?;
        let summary = self
            .summaries
            .fetch_summary(&city)
            .await
            .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(summary)]))
    }
}
