//! Lane registry with x-coordinate lookup

use std::collections::HashMap;

use crate::error::BuildError;
use crate::model::Lane;

/// Ordered registry of the diagram's lanes.
///
/// Lanes must be registered before any step references them; identities are
/// unique. Registration order is preserved for the guide-line drawing pass.
#[derive(Debug, Clone, Default)]
pub struct LaneModel {
    lanes: Vec<Lane>,
    x_by_id: HashMap<String, f64>,
}

impl LaneModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lane, failing with [`BuildError::DuplicateLane`] on a reused id.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        x: f64,
    ) -> Result<(), BuildError> {
        let id = id.into();
        if self.x_by_id.contains_key(&id) {
            return Err(BuildError::DuplicateLane(id));
        }
        self.x_by_id.insert(id.clone(), x);
        self.lanes.push(Lane::new(id, name, x));
        Ok(())
    }

    /// Normalized x position of a lane, or [`BuildError::UnknownLane`].
    pub fn x_of(&self, id: &str) -> Result<f64, BuildError> {
        self.x_by_id
            .get(id)
            .copied()
            .ok_or_else(|| BuildError::UnknownLane(id.to_string()))
    }

    /// Lanes in registration order
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registers_and_resolves_lanes() {
        let mut lanes = LaneModel::new();
        lanes.register("frontend", "Frontend", 0.10).unwrap();
        lanes.register("edge", "Cloudflare Edge", 0.37).unwrap();
        assert_eq!(lanes.x_of("frontend"), Ok(0.10));
        assert_eq!(lanes.x_of("edge"), Ok(0.37));
        assert_eq!(lanes.len(), 2);
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let mut lanes = LaneModel::new();
        lanes.register("edge", "Cloudflare Edge", 0.37).unwrap();
        assert_eq!(
            lanes.register("edge", "Edge Again", 0.5),
            Err(BuildError::DuplicateLane("edge".to_string()))
        );
        // The first registration is untouched.
        assert_eq!(lanes.x_of("edge"), Ok(0.37));
        assert_eq!(lanes.len(), 1);
    }

    #[test]
    fn unknown_lane_is_an_error() {
        let lanes = LaneModel::new();
        assert_eq!(
            lanes.x_of("gateway"),
            Err(BuildError::UnknownLane("gateway".to_string()))
        );
    }
}
