use log::LevelFilter;
use std::str::FromStr;

pub const DEFAULT_LOOKAHEAD_MARGIN: f64 = 100.0;
pub const DEFAULT_WELCOME_DELAY_MS: u32 = 4_000;
pub const DEFAULT_TORCH_SIZE: i32 = 300;
pub const DEFAULT_TOOLTIP_OFFSET_X: i32 = 10;
pub const DEFAULT_TOOLTIP_OFFSET_Y: i32 = -40;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const LOOKAHEAD_MARGIN_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const WELCOME_DELAY_MS_BOUNDS: (u32, u32) = (0, 60_000);
const TORCH_SIZE_BOUNDS: (i32, i32) = (16, 2_048);
const TOOLTIP_OFFSET_BOUNDS: (i32, i32) = (-200, 200);

/// Tunables for the interaction layer.
///
/// Every field can be overridden through a `data-*` attribute on the mount
/// element. Values that are missing, unparsable or out of bounds fall back
/// to the default.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub lookahead_margin: f64,
    pub welcome_delay_ms: u32,
    pub torch_size: i32,
    pub tooltip_offset_x: i32,
    pub tooltip_offset_y: i32,
    pub log_level: LevelFilter,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            lookahead_margin: DEFAULT_LOOKAHEAD_MARGIN,
            welcome_delay_ms: DEFAULT_WELCOME_DELAY_MS,
            torch_size: DEFAULT_TORCH_SIZE,
            tooltip_offset_x: DEFAULT_TOOLTIP_OFFSET_X,
            tooltip_offset_y: DEFAULT_TOOLTIP_OFFSET_Y,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl InteractionConfig {
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            lookahead_margin: parse_with_bounds(
                lookup("data-lookahead-margin"),
                DEFAULT_LOOKAHEAD_MARGIN,
                LOOKAHEAD_MARGIN_BOUNDS,
            ),
            welcome_delay_ms: parse_with_bounds(
                lookup("data-welcome-delay-ms"),
                DEFAULT_WELCOME_DELAY_MS,
                WELCOME_DELAY_MS_BOUNDS,
            ),
            torch_size: parse_with_bounds(
                lookup("data-torch-size"),
                DEFAULT_TORCH_SIZE,
                TORCH_SIZE_BOUNDS,
            ),
            tooltip_offset_x: parse_with_bounds(
                lookup("data-tooltip-offset-x"),
                DEFAULT_TOOLTIP_OFFSET_X,
                TOOLTIP_OFFSET_BOUNDS,
            ),
            tooltip_offset_y: parse_with_bounds(
                lookup("data-tooltip-offset-y"),
                DEFAULT_TOOLTIP_OFFSET_Y,
                TOOLTIP_OFFSET_BOUNDS,
            ),
            log_level: parse_log_level(lookup("data-log-level"), DEFAULT_LOG_LEVEL),
        }
    }

    pub fn tooltip_offset(&self) -> (i32, i32) {
        (self.tooltip_offset_x, self.tooltip_offset_y)
    }
}

fn parse_with_bounds<T>(value: Option<String>, default: T, bounds: (T, T)) -> T
where
    T: FromStr + PartialOrd,
{
    value
        .and_then(|value| value.trim().parse::<T>().ok())
        .filter(|value| *value >= bounds.0 && *value <= bounds.1)
        .unwrap_or(default)
}

fn parse_log_level(value: Option<String>, default: LevelFilter) -> LevelFilter {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> InteractionConfig {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        InteractionConfig::from_attributes(|name| attributes.get(name).cloned())
    }

    #[test]
    fn missing_attributes_use_defaults() {
        assert_eq!(config_from(&[]), InteractionConfig::default());
    }

    #[test]
    fn valid_overrides_are_applied() {
        let config = config_from(&[
            ("data-lookahead-margin", " 64 "),
            ("data-welcome-delay-ms", "2500"),
            ("data-torch-size", "320"),
            ("data-tooltip-offset-y", "-24"),
            ("data-log-level", "debug"),
        ]);

        assert_eq!(config.lookahead_margin, 64.0);
        assert_eq!(config.welcome_delay_ms, 2_500);
        assert_eq!(config.torch_size, 320);
        assert_eq!(config.tooltip_offset(), (DEFAULT_TOOLTIP_OFFSET_X, -24));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back() {
        let config = config_from(&[
            ("data-lookahead-margin", "NaN"),
            ("data-welcome-delay-ms", "-1"),
            ("data-torch-size", "4"),
            ("data-tooltip-offset-x", "ten"),
            ("data-log-level", "loud"),
        ]);

        assert_eq!(config, InteractionConfig::default());
    }
}
