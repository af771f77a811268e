use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{LayoutTuning, ViewConfig, ViewType, Viewport};
use crate::error::{GanttError, GanttResult};
use crate::interaction::InteractionTuning;

use super::RenderStyle;
use super::validation::{validate_initial_viewport, validate_render_style};

pub const GANTT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist and reload chart setup.
/// A zero viewport width means "not measured yet"; layout waits for the first
/// resize request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GanttEngineConfig {
    pub viewport: Viewport,
    pub view: ViewConfig,
    #[serde(default)]
    pub layout_tuning: LayoutTuning,
    #[serde(default)]
    pub interaction_tuning: InteractionTuning,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl GanttEngineConfig {
    /// Creates a config with default tunings.
    #[must_use]
    pub fn new(viewport: Viewport, view: ViewConfig) -> Self {
        Self {
            viewport,
            view,
            layout_tuning: LayoutTuning::default(),
            interaction_tuning: InteractionTuning::default(),
            render_style: RenderStyle::default(),
        }
    }

    /// Full-day hour view of `date`.
    #[must_use]
    pub fn hour_view(viewport: Viewport, date: NaiveDate) -> Self {
        Self::new(viewport, ViewConfig::new(ViewType::Hour, date))
    }

    #[must_use]
    pub fn with_layout_tuning(mut self, tuning: LayoutTuning) -> Self {
        self.layout_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_interaction_tuning(mut self, tuning: InteractionTuning) -> Self {
        self.interaction_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn validate(self) -> GanttResult<Self> {
        validate_initial_viewport(self.viewport)?;
        self.layout_tuning.validate()?;
        self.interaction_tuning.validate()?;
        validate_render_style(self.render_style)?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> GanttResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GanttError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> GanttResult<String> {
        let payload = GanttEngineConfigJsonContractV1 {
            schema_version: GANTT_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GanttError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> GanttResult<Self> {
        if let Ok(config) = serde_json::from_str::<Self>(input) {
            return config.validate();
        }
        let payload: GanttEngineConfigJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| GanttError::InvalidData(format!("failed to parse config json: {e}")))?;
        if payload.schema_version != GANTT_CONFIG_JSON_SCHEMA_V1 {
            return Err(GanttError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        payload.config.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GanttEngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: GanttEngineConfig,
}
