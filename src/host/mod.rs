//! Host loop: owns the mutable UI state and re-runs the pipeline on every change.

use crate::core::dashboard::{Dashboard, DashboardInput, DashboardView};
use crate::core::slider::SliderValue;
use crate::core::{Catalog, QuantityEntry, QuantityMap, RenderSink};
use crate::utils::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// A single widget change as reported by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    Slider { value: i64 },
    Quantity { item: String, value: i64 },
    Text { value: String },
    Reset,
}

/// Widget state. Every catalog item always has a quantity, zero by default.
#[derive(Debug, Clone, PartialEq)]
pub struct HostState {
    slider: SliderValue,
    quantities: QuantityMap,
    text: String,
}

impl HostState {
    pub fn new(catalog: &Catalog, slider_default: u8) -> Self {
        Self {
            slider: SliderValue::clamped(slider_default as i64),
            quantities: catalog.iter().map(|name| (name.to_string(), 0)).collect(),
            text: String::new(),
        }
    }

    pub fn input(&self) -> DashboardInput {
        DashboardInput {
            slider: self.slider,
            quantities: self.quantities.clone(),
            text: self.text.clone(),
        }
    }

    pub fn slider(&self) -> SliderValue {
        self.slider
    }

    pub fn quantity(&self, item: &str) -> Option<u64> {
        self.quantities.get(item).copied()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// One entry per catalog item, in catalog order.
    pub fn entries(&self, catalog: &Catalog) -> Vec<QuantityEntry> {
        catalog
            .iter()
            .map(|name| QuantityEntry {
                name: name.to_string(),
                quantity: self.quantity(name).unwrap_or(0),
            })
            .collect()
    }
}

pub struct Session {
    dashboard: Dashboard,
    slider_default: u8,
    state: HostState,
    events_applied: usize,
}

impl Session {
    pub fn new(dashboard: Dashboard, slider_default: u8) -> Self {
        let state = HostState::new(dashboard.catalog(), slider_default);
        Self {
            dashboard,
            slider_default,
            state,
            events_applied: 0,
        }
    }

    pub fn state(&self) -> &HostState {
        &self.state
    }

    pub fn events_applied(&self) -> usize {
        self.events_applied
    }

    pub fn view(&self) -> DashboardView {
        self.dashboard.build(&self.state.input())
    }

    pub fn set_quantity(&mut self, item: &str, value: i64) -> Result<()> {
        let slot = self
            .state
            .quantities
            .get_mut(item)
            .ok_or_else(|| DashboardError::UnknownItemError {
                name: item.to_string(),
            })?;
        // 輸入端保證非負
        *slot = value.max(0) as u64;
        Ok(())
    }

    pub fn apply(&mut self, event: ChangeEvent) -> Result<()> {
        tracing::debug!("Applying change event: {:?}", event);

        match event {
            ChangeEvent::Slider { value } => self.state.slider = SliderValue::clamped(value),
            ChangeEvent::Quantity { item, value } => self.set_quantity(&item, value)?,
            ChangeEvent::Text { value } => self.state.text = value,
            ChangeEvent::Reset => {
                self.state = HostState::new(self.dashboard.catalog(), self.slider_default)
            }
        }

        self.events_applied += 1;
        Ok(())
    }

    /// Applies the event, then renders the fresh page into `sink`.
    pub fn handle<S: RenderSink>(
        &mut self,
        event: ChangeEvent,
        sink: &mut S,
    ) -> Result<DashboardView> {
        self.apply(event)?;
        self.dashboard.render(&self.state.input(), sink)
    }

    /// Reads one JSON change event per line and re-renders after each one.
    /// Blank lines are skipped.
    pub fn replay<R: BufRead, S: RenderSink>(
        &mut self,
        reader: R,
        sink: &mut S,
    ) -> Result<usize> {
        let mut rendered = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let event: ChangeEvent = serde_json::from_str(&line).map_err(|e| {
                tracing::error!("❌ Invalid change event on line {}: {}", index + 1, e);
                DashboardError::SerializationError(e)
            })?;

            self.handle(event, sink)?;
            rendered += 1;
        }

        tracing::info!("✅ Replayed {} change events", rendered);
        Ok(rendered)
    }
}

/// Parses a `NAME=N` quantity argument. Negative quantities clamp to zero.
pub fn parse_quantity_arg(arg: &str) -> Result<(String, i64)> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| DashboardError::InvalidInputError {
            input: arg.to_string(),
            reason: "expected NAME=N".to_string(),
        })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(DashboardError::InvalidInputError {
            input: arg.to_string(),
            reason: "item name is empty".to_string(),
        });
    }

    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|e| DashboardError::InvalidInputError {
            input: arg.to_string(),
            reason: format!("quantity is not a whole number: {}", e),
        })?;

    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dashboard::ChartSection;

    fn session() -> Session {
        Session::new(
            Dashboard::new("Demo", Catalog::new(["Apple", "Banana", "Orange"])),
            50,
        )
    }

    #[test]
    fn test_initial_state_defaults() {
        let session = session();
        assert_eq!(session.state().slider().get(), 50);
        assert_eq!(session.state().quantity("Banana"), Some(0));
        assert_eq!(session.state().text(), "");
    }

    #[test]
    fn test_entries_cover_whole_catalog() {
        let mut session = session();
        session
            .apply(ChangeEvent::Quantity {
                item: "Banana".to_string(),
                value: 2,
            })
            .unwrap();

        let catalog = Catalog::new(["Apple", "Banana", "Orange"]);
        let entries = session.state().entries(&catalog);
        let pairs: Vec<(&str, u64)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.quantity))
            .collect();
        assert_eq!(pairs, vec![("Apple", 0), ("Banana", 2), ("Orange", 0)]);
    }

    #[test]
    fn test_negative_quantity_is_clamped() {
        let mut session = session();
        session
            .apply(ChangeEvent::Quantity {
                item: "Apple".to_string(),
                value: -3,
            })
            .unwrap();
        assert_eq!(session.state().quantity("Apple"), Some(0));
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let mut session = session();
        let err = session
            .apply(ChangeEvent::Quantity {
                item: "Kiwi".to_string(),
                value: 2,
            })
            .unwrap_err();
        assert!(matches!(err, DashboardError::UnknownItemError { .. }));
        assert_eq!(session.events_applied(), 0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = session();
        session.apply(ChangeEvent::Slider { value: 90 }).unwrap();
        session
            .apply(ChangeEvent::Text {
                value: "hello".to_string(),
            })
            .unwrap();
        session.apply(ChangeEvent::Reset).unwrap();

        assert_eq!(session.state().slider().get(), 50);
        assert_eq!(session.state().text(), "");
        assert_eq!(session.events_applied(), 3);
    }

    #[test]
    fn test_view_follows_state() {
        let mut session = session();
        assert!(matches!(session.view().charts, ChartSection::Advisory { .. }));

        session
            .apply(ChangeEvent::Quantity {
                item: "Orange".to_string(),
                value: 5,
            })
            .unwrap();
        match session.view().charts {
            ChartSection::Charts { bar, .. } => assert_eq!(bar.points[0].category, "Orange"),
            other => panic!("expected charts, got {:?}", other),
        }
    }

    #[test]
    fn test_event_json_shape() {
        let event: ChangeEvent =
            serde_json::from_str(r#"{"type":"quantity","item":"Apple","value":3}"#).unwrap();
        assert_eq!(
            event,
            ChangeEvent::Quantity {
                item: "Apple".to_string(),
                value: 3
            }
        );
        let reset: ChangeEvent = serde_json::from_str(r#"{"type":"reset"}"#).unwrap();
        assert_eq!(reset, ChangeEvent::Reset);
    }

    #[test]
    fn test_parse_quantity_arg() {
        assert_eq!(
            parse_quantity_arg("Apple=3").unwrap(),
            ("Apple".to_string(), 3)
        );
        assert_eq!(
            parse_quantity_arg(" Pear = -2 ").unwrap(),
            ("Pear".to_string(), -2)
        );
        assert!(parse_quantity_arg("Apple").is_err());
        assert!(parse_quantity_arg("=3").is_err());
        assert!(parse_quantity_arg("Apple=three").is_err());
    }
}
