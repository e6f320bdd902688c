//! Visualization sessions
//!
//! A [`Session`] owns one generator, the dataset it currently runs on and
//! the [`Player`] replaying its steps. Drawing a new dataset or changing the
//! parameters regenerates the whole sequence and reloads the player from the
//! first step. A failed regeneration leaves the previous state in place.

use std::borrow::Borrow;
use std::fmt;

use log::debug;

use crate::algorithm::step::StepSequence;
use crate::algorithm::traits::{AlgorithmError, NodeId, StepGenerator, TraversalOrder};
use crate::algorithm::{BstSearch, GraphAlgorithm, Knapsack, SearchAlgorithm, SortingAlgorithm, TreeTraversal};
use crate::config::VisualizerConfig;
use crate::dataset::{canonical_graph, DatasetProvider};
use crate::execution::player::Player;

/// Owned form of a generator's input
pub type OwnedInput<G> = <<G as StepGenerator>::Input as ToOwned>::Owned;

/// Freshly drawn input, optionally with parameters drawn alongside it
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<I, P> {
    pub input: I,
    pub params: Option<P>,
}

impl<I, P> Dataset<I, P> {
    /// Input only; the session keeps its current parameters
    pub fn new(input: I) -> Self {
        Self { input, params: None }
    }

    pub fn with_params(input: I, params: P) -> Self {
        Self {
            input,
            params: Some(params),
        }
    }
}

type Factory<G> = Box<
    dyn FnMut(
            &mut DatasetProvider,
            &G,
        ) -> Result<Dataset<OwnedInput<G>, <G as StepGenerator>::Params>, AlgorithmError>
        + Send,
>;

pub struct Session<G: StepGenerator> {
    generator: G,
    input: OwnedInput<G>,
    params: G::Params,
    provider: DatasetProvider,
    factory: Factory<G>,
    player: Player<G::Step>,
}

impl<G: StepGenerator> Session<G> {
    /// Draws a first dataset and generates its steps
    pub fn new<F>(
        generator: G,
        params: G::Params,
        mut provider: DatasetProvider,
        config: &VisualizerConfig,
        mut factory: F,
    ) -> Result<Self, AlgorithmError>
    where
        F: FnMut(&mut DatasetProvider, &G) -> Result<Dataset<OwnedInput<G>, G::Params>, AlgorithmError>
            + Send
            + 'static,
    {
        let Dataset { input, params: drawn } = factory(&mut provider, &generator)?;
        let params = drawn.unwrap_or(params);
        let steps = generator.generate(Borrow::<G::Input>::borrow(&input), &params)?;
        debug!("session for {} starts with {} steps", generator.info().id, steps.len());

        Ok(Self {
            generator,
            input,
            params,
            provider,
            factory: Box::new(factory),
            player: Player::with_steps(config.playback.clone(), steps),
        })
    }

    /// Draws fresh input, regenerates and rewinds the player
    pub fn generate_new_dataset(&mut self) -> Result<(), AlgorithmError> {
        let Dataset { input, params } = (self.factory)(&mut self.provider, &self.generator)?;
        let params = params.unwrap_or_else(|| self.params.clone());
        let steps = self.generator.generate(Borrow::<G::Input>::borrow(&input), &params)?;
        debug!("new dataset for {}: {} steps", self.generator.info().id, steps.len());

        self.input = input;
        self.params = params;
        self.player.load(steps);
        Ok(())
    }

    /// Regenerates on the current input with new parameters
    pub fn set_params(&mut self, params: G::Params) -> Result<(), AlgorithmError> {
        let steps = self.generate(&params)?;
        self.params = params;
        self.player.load(steps);
        Ok(())
    }

    /// Switches algorithm and draws a dataset suited to it
    pub fn set_generator(&mut self, generator: G) -> Result<(), AlgorithmError> {
        let previous = std::mem::replace(&mut self.generator, generator);
        if let Err(err) = self.generate_new_dataset() {
            self.generator = previous;
            return Err(err);
        }
        Ok(())
    }

    fn generate(&self, params: &G::Params) -> Result<StepSequence<G::Step>, AlgorithmError> {
        self.generator.generate(Borrow::<G::Input>::borrow(&self.input), params)
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn input(&self) -> &G::Input {
        Borrow::<G::Input>::borrow(&self.input)
    }

    pub fn params(&self) -> &G::Params {
        &self.params
    }

    pub fn player(&self) -> &Player<G::Step> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player<G::Step> {
        &mut self.player
    }
}

impl<G: StepGenerator + fmt::Debug> fmt::Debug for Session<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("generator", &self.generator)
            .field("params", &self.params)
            .field("player", &self.player)
            .finish_non_exhaustive()
    }
}

impl Session<SortingAlgorithm> {
    pub fn sorting(
        algorithm: SortingAlgorithm,
        provider: DatasetProvider,
        config: &VisualizerConfig,
    ) -> Result<Self, AlgorithmError> {
        Self::new(algorithm, (), provider, config, |provider, _| {
            Ok(Dataset::new(provider.sorting_array()))
        })
    }
}

impl Session<SearchAlgorithm> {
    /// Every dataset comes with its own target; the array is sorted whenever
    /// the current algorithm needs it
    pub fn searching(
        algorithm: SearchAlgorithm,
        provider: DatasetProvider,
        config: &VisualizerConfig,
    ) -> Result<Self, AlgorithmError> {
        Self::new(algorithm, 0, provider, config, |provider, algorithm| {
            let (array, target) = provider.search_dataset(algorithm.requires_sorted_input());
            Ok(Dataset::with_params(array, target))
        })
    }
}

impl Session<GraphAlgorithm> {
    /// Runs on the canonical graph from node 0
    pub fn graph(
        algorithm: GraphAlgorithm,
        provider: DatasetProvider,
        config: &VisualizerConfig,
    ) -> Result<Self, AlgorithmError> {
        Self::new(algorithm, NodeId(0), provider, config, |_, _| {
            Ok(Dataset::new(canonical_graph()?))
        })
    }
}

impl Session<TreeTraversal> {
    pub fn tree_traversal(
        order: TraversalOrder,
        provider: DatasetProvider,
        config: &VisualizerConfig,
    ) -> Result<Self, AlgorithmError> {
        Self::new(TreeTraversal, order, provider, config, |provider, _| {
            Ok(Dataset::new(provider.random_bst()))
        })
    }
}

impl Session<BstSearch> {
    pub fn bst_search(
        target: i64,
        provider: DatasetProvider,
        config: &VisualizerConfig,
    ) -> Result<Self, AlgorithmError> {
        Self::new(BstSearch, target, provider, config, |provider, _| {
            Ok(Dataset::new(provider.random_bst()))
        })
    }
}

impl Session<Knapsack> {
    pub fn knapsack(provider: DatasetProvider, config: &VisualizerConfig) -> Result<Self, AlgorithmError> {
        Self::new(Knapsack, (), provider, config, |provider, _| {
            Ok(Dataset::new(provider.knapsack()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(seed: u64) -> DatasetProvider {
        let _ = env_logger::builder().is_test(true).try_init();
        DatasetProvider::seeded(seed, &VisualizerConfig::default())
    }

    #[test]
    fn test_sorting_session_regenerates_on_new_dataset() {
        let config = VisualizerConfig::default();
        let mut session = Session::sorting(SortingAlgorithm::Bubble, provider(1), &config).unwrap();
        let first = session.input().to_vec();
        assert_eq!(first.len(), 10);
        assert_eq!(session.player().frame().view.array, first);

        assert!(session.player_mut().step_forward());
        session.generate_new_dataset().unwrap();
        let second = session.input().to_vec();
        assert_ne!(first, second);
        assert_eq!(session.player().cursor(), 0);
        assert_eq!(session.player().frame().view.array, second);
    }

    #[test]
    fn test_search_target_is_replaced_in_place() {
        let config = VisualizerConfig::default();
        let mut session = Session::searching(SearchAlgorithm::Linear, provider(2), &config).unwrap();
        let array = session.input().to_vec();

        let target = array[4];
        session.set_params(target).unwrap();
        assert_eq!(session.params(), &target);
        assert_eq!(session.input(), array.as_slice());

        let player = session.player_mut();
        while player.step_forward() {}
        let found = player.frame().view.sorted;
        assert_eq!(found.len(), 1);
        assert_eq!(array[found[0]], target);
    }

    #[test]
    fn test_switching_to_binary_search_sorts_the_dataset() {
        let config = VisualizerConfig::default();
        let mut session = Session::searching(SearchAlgorithm::Linear, provider(3), &config).unwrap();
        session.set_generator(SearchAlgorithm::Binary).unwrap();
        assert_eq!(session.generator(), &SearchAlgorithm::Binary);
        assert!(session.input().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_graph_session_rejects_unknown_start() {
        let config = VisualizerConfig::default();
        let mut session = Session::graph(GraphAlgorithm::Bfs, provider(4), &config).unwrap();
        let len = session.player().frame().len;

        assert_eq!(
            session.set_params(NodeId(42)),
            Err(AlgorithmError::InvalidNode(NodeId(42)))
        );
        assert_eq!(session.params(), &NodeId(0));
        assert_eq!(session.player().frame().len, len);

        session.set_generator(GraphAlgorithm::Dijkstra).unwrap();
        assert_eq!(session.input().node_count(), 7);
    }

    #[test]
    fn test_tree_sessions_draw_random_trees() {
        let config = VisualizerConfig::default();
        let traversal =
            Session::tree_traversal(TraversalOrder::Inorder, provider(5), &config).unwrap();
        assert_eq!(traversal.input().len(), 10);
        // One step per visit plus the closing step
        assert_eq!(traversal.player().frame().len, 11);

        let mut search = Session::bst_search(1000, provider(5), &config).unwrap();
        let root = search.input().root().unwrap().value;
        search.set_params(root).unwrap();
        let player = search.player_mut();
        while player.step_forward() {}
        assert_eq!(player.frame().view.description, format!("Found {root}!"));
    }

    #[test]
    fn test_knapsack_session() {
        let config = VisualizerConfig::default();
        let session = Session::knapsack(provider(6), &config).unwrap();
        assert_eq!(session.input(), &crate::algorithm::KnapsackProblem::classic());
        assert_eq!(session.player().frame().len, 4 * 7 + 4 + 1);
    }
}
