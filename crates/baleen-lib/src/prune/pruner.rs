//! Chain pruning over a [`TentailmentGraph`].
//!
//! One run is: drop duplicate edges, then alternate two drains until neither
//! changes the graph:
//! - dead ends: unreferenced variables with no outgoing edge
//! - pass-throughs: unreferenced variables with exactly one incoming and one
//!   outgoing edge, spliced out and replaced by an edge between the neighbors
//!
//! Every store round trip is a batch of at most `batch_size` rewrites followed
//! by [`TentailmentGraph::commit`]. Batches are paid for with fuel; running dry
//! means the graph never settled, which a well-formed graph cannot do.

use tracing::{debug, info};

use super::Error;
use super::store::{TentailmentGraph, VarId};

/// Separator for [`CollapseLabel::Join`].
pub const LABEL_SEPARATOR: &str = "+";

/// Transform name given to the edge that replaces a collapsed pass-through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollapseLabel {
    /// Incoming and outgoing names joined with `+`, skipping absent ones.
    #[default]
    Join,
    /// No name.
    Drop,
}

impl CollapseLabel {
    fn label(self, incoming: Option<&str>, outgoing: Option<&str>) -> Option<String> {
        match self {
            CollapseLabel::Drop => None,
            CollapseLabel::Join => match (incoming, outgoing) {
                (Some(a), Some(b)) => Some(format!("{a}{LABEL_SEPARATOR}{b}")),
                (Some(a), None) | (None, Some(a)) => Some(a.to_owned()),
                (None, None) => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PruneOptions {
    /// Maximum rewrites per committed batch (default: 25,000).
    pub batch_size: usize,
    /// Maximum batches for the whole run (default: 100,000).
    pub fuel: u32,
    pub collapse_label: CollapseLabel,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            batch_size: 25_000,
            fuel: 100_000,
            collapse_label: CollapseLabel::Join,
        }
    }
}

impl PruneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch size. Zero is treated as one.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    pub fn fuel(mut self, fuel: u32) -> Self {
        self.fuel = fuel;
        self
    }

    pub fn collapse_label(mut self, policy: CollapseLabel) -> Self {
        self.collapse_label = policy;
        self
    }
}

/// Statistics from one pruning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct PruneStats {
    pub variables_before: usize,
    pub variables_after: usize,
    pub duplicate_edges: usize,
    pub dead_ends: usize,
    pub pass_throughs: usize,
    /// Edges added while collapsing; fewer than `pass_throughs` when the
    /// neighbors were already connected.
    pub edges_created: usize,
    pub rounds: usize,
    pub batches: usize,
}

impl PruneStats {
    pub fn variables_removed(&self) -> usize {
        self.dead_ends + self.pass_throughs
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    DeadEnd,
    PassThrough,
}

impl Step {
    fn name(self) -> &'static str {
        match self {
            Step::DeadEnd => "dead-end",
            Step::PassThrough => "pass-through",
        }
    }
}

/// Runs the pruning loop against any [`TentailmentGraph`] backend.
#[derive(Debug, Clone, Default)]
pub struct ChainPruner {
    options: PruneOptions,
}

impl ChainPruner {
    pub fn new(options: PruneOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PruneOptions {
        &self.options
    }

    pub fn run<G: TentailmentGraph>(&self, graph: &mut G) -> Result<PruneStats, Error<G::Error>> {
        let mut run = Run {
            graph,
            options: &self.options,
            fuel: self.options.fuel,
            stats: PruneStats::default(),
        };
        run.execute()?;
        Ok(run.stats)
    }
}

/// Prunes `graph` with `options`.
pub fn prune_tentails<G: TentailmentGraph>(
    graph: &mut G,
    options: &PruneOptions,
) -> Result<PruneStats, Error<G::Error>> {
    ChainPruner::new(options.clone()).run(graph)
}

struct Run<'a, G> {
    graph: &'a mut G,
    options: &'a PruneOptions,
    fuel: u32,
    stats: PruneStats,
}

impl<G: TentailmentGraph> Run<'_, G> {
    fn execute(&mut self) -> Result<(), Error<G::Error>> {
        self.stats.variables_before = self.graph.variable_count().map_err(Error::Store)?;
        info!(variables = self.stats.variables_before, "start pruning of tentailed variables");

        self.consume_fuel()?;
        self.stats.duplicate_edges = self.graph.remove_duplicate_edges().map_err(Error::Store)?;
        self.graph.commit().map_err(Error::Store)?;
        debug!(removed = self.stats.duplicate_edges, "deleted duplicate tentails edges");

        loop {
            self.stats.rounds += 1;
            let dead_ends = self.drain(Step::DeadEnd)?;
            let pass_throughs = self.drain(Step::PassThrough)?;
            debug!(round = self.stats.rounds, dead_ends, pass_throughs, "pruning round");
            if dead_ends + pass_throughs == 0 {
                break;
            }
        }

        self.stats.variables_after = self.graph.variable_count().map_err(Error::Store)?;
        info!(
            before = self.stats.variables_before,
            after = self.stats.variables_after,
            removed = self.stats.variables_removed(),
            duplicate_edges = self.stats.duplicate_edges,
            batches = self.stats.batches,
            "finished pruning of tentailed variables"
        );
        Ok(())
    }

    fn consume_fuel(&mut self) -> Result<(), Error<G::Error>> {
        if self.fuel == 0 {
            return Err(Error::GraphInvariant {
                fuel: self.options.fuel,
            });
        }
        self.fuel -= 1;
        self.stats.batches += 1;
        Ok(())
    }

    /// Applies `step` batch by batch until a batch finds nothing to do.
    fn drain(&mut self, step: Step) -> Result<usize, Error<G::Error>> {
        let mut total = 0;
        loop {
            self.consume_fuel()?;
            let applied = self.batch(step).map_err(Error::Store)?;
            self.graph.commit().map_err(Error::Store)?;
            if applied == 0 {
                return Ok(total);
            }
            debug!(step = step.name(), applied, "committed batch");
            total += applied;
        }
    }

    fn batch(&mut self, step: Step) -> Result<usize, G::Error> {
        let limit = self.options.batch_size.max(1);
        let mut candidates = Vec::new();
        for var in self.graph.variables()? {
            if candidates.len() == limit {
                break;
            }
            if self.matches(step, var)? {
                candidates.push(var);
            }
        }

        let mut applied = 0;
        for var in candidates {
            // Earlier rewrites in this batch may have changed the neighborhood.
            if !self.matches(step, var)? {
                continue;
            }
            match step {
                Step::DeadEnd => {
                    self.graph.delete_variable(var)?;
                    self.stats.dead_ends += 1;
                }
                Step::PassThrough => self.collapse(var)?,
            }
            applied += 1;
        }
        Ok(applied)
    }

    fn matches(&self, step: Step, var: VarId) -> Result<bool, G::Error> {
        if self.graph.is_referenced(var)? {
            return Ok(false);
        }
        Ok(match step {
            Step::DeadEnd => self.graph.out_degree(var)? == 0,
            Step::PassThrough => self.graph.in_degree(var)? == 1 && self.graph.out_degree(var)? == 1,
        })
    }

    fn collapse(&mut self, var: VarId) -> Result<(), G::Error> {
        let incoming = self.graph.incoming(var)?;
        let outgoing = self.graph.outgoing(var)?;
        let (Some(inc), Some(out)) = (incoming.first(), outgoing.first()) else {
            return Ok(());
        };
        let (source, target) = (inc.source, out.target);
        let label = self
            .options
            .collapse_label
            .label(inc.transform.as_deref(), out.transform.as_deref());

        self.graph.delete_variable(var)?;
        self.stats.pass_throughs += 1;

        // A self-loop on `var` leaves nothing to reconnect; `source == target`
        // keeps the cycle as a loop on the survivor.
        if source != var && target != var && self.graph.add_edge(source, target, label)?
        {
            self.stats.edges_created += 1;
        }
        Ok(())
    }
}
