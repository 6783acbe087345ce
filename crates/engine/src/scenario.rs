//! Scripted scenarios for the runner binary.
//!
//! A scenario is a JSON file describing a small map, the docks standing on
//! it, the actor's order configuration and transforms, and a list of steps
//! to play against a single actor:
//!
//! ```json
//! {
//!   "map": { "width": 16, "height": 16, "revealAll": true },
//!   "config": { "dockActors": ["hpad"] },
//!   "transforms": [{ "intoType": "tran" }],
//!   "docks": [{ "name": "pad", "typeName": "hpad", "cell": { "x": 3, "y": 4 } }],
//!   "steps": [
//!     { "step": "click", "target": { "type": "cell", "x": 9, "y": 2 } },
//!     { "step": "click", "target": { "type": "dock", "name": "pad" }, "forceQueue": true },
//!     { "step": "completeActivity" }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use airlift_domain::{
    ActorId, ActorRef, CellPos, DomainError, LineColor, Order, Target, TargetModifiers,
    TransformOrdersConfig,
};

use crate::infrastructure::ports::{TransformCapability, WorldServices};
use crate::infrastructure::{
    ActivityQueue, DeployTransform, GridMap, RecordedLines, StaticWorld, LOCAL_PLAYER,
};
use crate::orders::{Resolution, TransformOrders};

// =============================================================================
// Scenario File
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub map: MapSetup,
    #[serde(default)]
    pub config: TransformOrdersConfig,
    #[serde(default)]
    pub transforms: Vec<TransformSetup>,
    #[serde(default)]
    pub docks: Vec<DockSetup>,
    /// Players hostile to everyone else
    #[serde(default)]
    pub hostile_players: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSetup {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub reveal_all: bool,
    #[serde(default)]
    pub explored: Vec<CellPos>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformSetup {
    pub into_type: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub paused: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockSetup {
    /// Handle used by steps to refer to this dock
    pub name: String,
    pub type_name: String,
    pub cell: CellPos,
    /// Owning player (default: the local player)
    #[serde(default)]
    pub owner: Option<String>,
    /// Reserved by some other actor
    #[serde(default)]
    pub reserved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StepTarget {
    None,
    Cell { x: i32, y: i32 },
    Dock { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum Step {
    /// Point at a target and issue whatever the best targeter offers
    Click {
        target: StepTarget,
        #[serde(default, rename = "forceMove")]
        force_move: bool,
        #[serde(default, rename = "forceQueue")]
        force_queue: bool,
    },
    /// Deliver an order directly, bypassing targeting
    Issue {
        order: String,
        target: StepTarget,
        #[serde(default)]
        queued: bool,
    },
    /// Finish the actor's current activity
    CompleteActivity,
    Grant { condition: String },
    Revoke { condition: String },
}

/// Errors that can occur while loading or running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid scenario: {0}")]
    Invalid(#[from] DomainError),
    #[error("Unknown dock: {0}")]
    UnknownDock(String),
}

/// Read and validate a scenario file.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    scenario.validate()?;
    Ok(scenario)
}

impl Scenario {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.map.width <= 0 || self.map.height <= 0 {
            return Err(DomainError::validation(format!(
                "map must have a positive size, got {}x{}",
                self.map.width, self.map.height
            )));
        }
        self.config.validate()
    }
}

// =============================================================================
// Report
// =============================================================================

/// What one step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A click no targeter accepted
    NoTargeter,
    Resolved {
        order: Order,
        /// Cursor shown for the click, if the order came from one
        cursor: Option<String>,
        resolution: Resolution,
    },
    /// The current activity finished; these orders are re-issued to the
    /// transformed actor
    Completed { replayed: Vec<Order> },
    /// Nothing was running
    Idle,
    Gate { active: bool },
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioReport {
    pub outcomes: Vec<StepOutcome>,
    pub lines: Vec<(Target, LineColor)>,
}

impl ScenarioReport {
    pub fn replayed(&self) -> impl Iterator<Item = &Order> {
        self.outcomes.iter().flat_map(|outcome| match outcome {
            StepOutcome::Completed { replayed } => replayed.as_slice(),
            _ => &[],
        })
    }
}

// =============================================================================
// Runner
// =============================================================================

/// One actor in a scripted world.
struct ScenarioWorld {
    map: GridMap,
    world: StaticWorld,
    lines: RecordedLines,
    activity: ActivityQueue,
    orders: TransformOrders,
    docks: HashMap<String, Target>,
}

impl ScenarioWorld {
    fn new(scenario: &Scenario) -> Self {
        let mut map = GridMap::new(scenario.map.width, scenario.map.height);
        if scenario.map.reveal_all {
            map.reveal_all();
        }
        for cell in &scenario.map.explored {
            map.explore(*cell);
        }

        let mut world = StaticWorld::new();
        for player in &scenario.hostile_players {
            world.declare_hostile(player.as_str());
        }

        let mut docks = HashMap::new();
        for dock in &scenario.docks {
            let id = ActorId::new();
            world.set_owner(id, dock.owner.as_deref().unwrap_or(LOCAL_PLAYER));
            if dock.reserved {
                world.reserve(id, ActorId::new());
            }
            let actor = ActorRef::new(id, dock.type_name.as_str(), GridMap::center_of(dock.cell));
            docks.insert(dock.name.clone(), Target::actor(actor));
        }

        let transforms = scenario
            .transforms
            .iter()
            .map(|setup| {
                let transform = DeployTransform::new(setup.into_type.as_str());
                transform.set_disabled(setup.disabled);
                transform.set_paused(setup.paused);
                Arc::new(transform) as Arc<dyn TransformCapability>
            })
            .collect();

        let orders = TransformOrders::new(
            ActorId::new(),
            Arc::new(scenario.config.clone()),
            transforms,
        );

        Self {
            map,
            world,
            lines: RecordedLines::new(),
            activity: ActivityQueue::new(),
            orders,
            docks,
        }
    }

    fn target(&self, target: &StepTarget) -> Result<Target, ScenarioError> {
        match target {
            StepTarget::None => Ok(Target::None),
            StepTarget::Cell { x, y } => {
                let cell = CellPos::new(*x, *y);
                Ok(Target::terrain(cell, GridMap::center_of(cell)))
            }
            StepTarget::Dock { name } => self
                .docks
                .get(name)
                .cloned()
                .ok_or_else(|| ScenarioError::UnknownDock(name.clone())),
        }
    }

    fn play(&mut self, step: &Step) -> Result<StepOutcome, ScenarioError> {
        let services = WorldServices {
            map: &self.map,
            shroud: &self.map,
            world: &self.world,
            reservations: &self.world,
            target_lines: &self.lines,
        };

        let outcome = match step {
            Step::Click {
                target,
                force_move,
                force_queue,
            } => {
                let target = self.target(target)?;
                let mut modifiers = TargetModifiers::empty();
                if *force_move {
                    modifiers = modifiers | TargetModifiers::FORCE_MOVE;
                }
                if *force_queue {
                    modifiers = modifiers | TargetModifiers::FORCE_QUEUE;
                }

                let legal = self
                    .orders
                    .legal_targeters(services, &self.activity, &target, modifiers);
                let chosen = legal.first().and_then(|best| {
                    self.orders
                        .issue_evaluated(best, target)
                        .map(|order| (best, order))
                });
                match chosen {
                    Some((best, order)) => {
                        let resolution =
                            self.orders
                                .resolve_order(services, &mut self.activity, &order);
                        StepOutcome::Resolved {
                            cursor: Some(best.cursor.clone()),
                            order,
                            resolution,
                        }
                    }
                    None => StepOutcome::NoTargeter,
                }
            }
            Step::Issue {
                order,
                target,
                queued,
            } => {
                let order = Order::foreign(order.as_str(), self.target(target)?, *queued);
                let resolution = self
                    .orders
                    .resolve_order(services, &mut self.activity, &order);
                StepOutcome::Resolved {
                    order,
                    cursor: None,
                    resolution,
                }
            }
            Step::CompleteActivity => match self.activity.complete_current() {
                Some(activity) => StepOutcome::Completed {
                    replayed: activity.into_replay(),
                },
                None => StepOutcome::Idle,
            },
            Step::Grant { condition } => {
                self.orders.grant_condition(condition);
                StepOutcome::Gate {
                    active: self.orders.is_active(),
                }
            }
            Step::Revoke { condition } => {
                self.orders.revoke_condition(condition);
                StepOutcome::Gate {
                    active: self.orders.is_active(),
                }
            }
        };
        Ok(outcome)
    }
}

/// Play every step of a scenario against a fresh world.
pub fn run_scenario(scenario: &Scenario) -> Result<ScenarioReport, ScenarioError> {
    let mut world = ScenarioWorld::new(scenario);
    let mut report = ScenarioReport::default();

    for (index, step) in scenario.steps.iter().enumerate() {
        let outcome = world.play(step)?;
        tracing::debug!(step = index, outcome = ?outcome, "Scenario step played");
        report.outcomes.push(outcome);
    }

    report.lines = world.lines.lines();
    Ok(report)
}
