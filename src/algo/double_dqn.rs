use burn::{
    grad_clipping::GradientClippingConfig,
    module::AutodiffModule,
    optim::{adaptor::OptimizerAdaptor, Adam, AdamConfig, GradientsParams, Optimizer},
    prelude::*,
    tensor::{backend::AutodiffBackend, ElementConversion},
};
use log::trace;
use nn::loss::{MseLoss, Reduction};

use crate::{
    assert_interval, decay,
    env::Environment,
    exploration::{Choice, EpsilonGreedy},
    memory::{Exp, ReplayMemory},
    traits::ToTensor,
};

/// A burn module used as the policy and target networks of a [`DoubleDQNAgent`]
///
/// ### Generics
/// - `B`: A burn backend
/// - `D`: The dimension of the input tensor
pub trait QNetwork<B: AutodiffBackend, const D: usize>: AutodiffModule<B> {
    /// Forward pass through the model, producing one Q value per action
    fn forward(&self, input: Tensor<B, D>) -> Tensor<B, 2>;
}

/// Configuration for the [`DoubleDQNAgent`] (see for information on generic types)
pub struct DoubleDQNAgentConfig<E, const D: usize, O>
where
    E: Environment,
{
    /// A [`ReplayMemory`] to store and sample the agent's past experiences
    pub memory: ReplayMemory<E>,
    /// The [`Optimizer`] to train the policy network with
    pub optimizer: O,
    /// The exploration policy, currently limited to epsilon greedy
    pub exploration: EpsilonGreedy<decay::Exponential>,
    /// The discount factor
    pub gamma: f32,
    /// The number of episodes between hard copies of the policy network into the target network
    pub sync_interval: u32,
    /// The maximum number of steps per episode before truncation
    pub max_steps: u32,
    /// The learning rate for the optimizer
    pub lr: f32,
}

type AdamOptimizer<M, B> = OptimizerAdaptor<Adam<<B as AutodiffBackend>::InnerBackend>, M, B>;

impl<B, M, E, const D: usize> Default for DoubleDQNAgentConfig<E, D, AdamOptimizer<M, B>>
where
    B: AutodiffBackend,
    M: QNetwork<B, D>,
    E: Environment,
{
    fn default() -> Self {
        Self {
            memory: ReplayMemory::new(100_000, 64),
            optimizer: AdamConfig::new()
                .with_grad_clipping(Some(GradientClippingConfig::Value(1.0)))
                .init(),
            exploration: EpsilonGreedy::new(decay::Exponential::new(1e-3, 0.9, 0.05).unwrap()),
            gamma: 0.99,
            sync_interval: 4,
            max_steps: 500,
            lr: 1e-3,
        }
    }
}

/// A Double Deep Q Network agent
///
/// Double DQN decouples action selection from action evaluation in the
/// bootstrap target: the policy network picks the best next action, and the
/// target network scores it. A plain DQN would let the target network do both,
/// which systematically overestimates Q values.
///
/// ### Generics
/// - `B`: A burn backend
/// - `M`: The [`QNetwork`] used for the policy and target networks
/// - `E`: The [`Environment`] in which the agent will learn
///     - The environment's action space must be discrete, since the policy network produces a Q value for each action.
/// - `D`: The dimension of the input
/// - `O`: An [`Optimizer`]
pub struct DoubleDQNAgent<B, M, E, const D: usize, O>
where
    B: AutodiffBackend,
    E: Environment,
{
    policy_net: Option<M>,
    target_net: Option<M>,
    device: &'static B::Device,
    memory: ReplayMemory<E>,
    optimizer: O,
    loss: MseLoss,
    exploration: EpsilonGreedy<decay::Exponential>,
    gamma: f32,
    sync_interval: u32,
    max_steps: u32,
    lr: f32,
    total_steps: u32,
    episode: u32,
}

impl<B, M, E, const D: usize, O> DoubleDQNAgent<B, M, E, D, O>
where
    B: AutodiffBackend,
    M: QNetwork<B, D>,
    E: Environment,
    E::State: Default,
    O: Optimizer<M, B>,
    Vec<E::State>: ToTensor<B, D, Float>,
    Vec<E::Action>: ToTensor<B, 2, Int>,
    E::Action: From<usize>,
{
    /// Initialize a new `DoubleDQNAgent`
    ///
    /// The target network starts as a copy of `model`.
    ///
    /// ### Arguments
    /// - `model` A [`QNetwork`] to be used as the policy and target networks
    /// - `config` A [`DoubleDQNAgentConfig`] containing components and hyperparameters for the agent
    /// - `device` A static reference to the device used for the `model`
    pub fn new(model: M, config: DoubleDQNAgentConfig<E, D, O>, device: &'static B::Device) -> Self {
        assert_interval!(config.gamma, 0.0, 1.0);
        let model_clone = model.clone();
        Self {
            policy_net: Some(model),
            target_net: Some(model_clone),
            device,
            memory: config.memory,
            optimizer: config.optimizer,
            loss: MseLoss::new(),
            exploration: config.exploration,
            gamma: config.gamma,
            sync_interval: config.sync_interval,
            max_steps: config.max_steps,
            lr: config.lr,
            total_steps: 0,
            episode: 0,
        }
    }

    /// Choose the highest-value action for the given state according to the policy network
    fn policy_action(&self, state: E::State) -> E::Action {
        let input = vec![state].to_tensor(self.device);
        let best = self
            .policy_net
            .as_ref()
            .unwrap()
            .forward(input)
            .argmax(1)
            .into_scalar();
        E::Action::from(best.elem::<i64>() as usize)
    }

    /// Invoke the exploration strategy to choose an action from the given state
    fn act(&self, env: &E, state: E::State) -> E::Action {
        match self.exploration.choose(self.total_steps) {
            Choice::Explore => env.random_action(),
            Choice::Exploit => self.policy_action(state),
        }
    }

    /// Perform one Double DQN learning step
    fn learn(&mut self) {
        // Skip until the replay memory can fill a batch
        let Some(batch) = self.memory.sample_zipped() else {
            return;
        };
        let batch_size = self.memory.batch_size;

        // Boolean mask for non-terminal next states, so terminal transitions
        // bootstrap from zero
        let non_terminal_mask = Tensor::<B, 1, Bool>::from_bool(
            batch
                .next_states
                .iter()
                .map(Option::is_some)
                .collect::<Vec<_>>()
                .as_slice()
                .into(),
            self.device,
        )
        .unsqueeze_dim(1);

        // Tensor conversions; terminal rows get a placeholder next state that
        // the mask zeroes out below
        let states = batch.states.to_tensor(self.device);
        let actions = batch.actions.to_tensor(self.device);
        let next_states = batch
            .next_states
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect::<Vec<_>>()
            .to_tensor(self.device);
        let rewards =
            Tensor::<B, 1>::from_floats(batch.rewards.as_slice(), self.device).unsqueeze_dim(1);

        let policy_net = self.policy_net.take().unwrap();
        let target_net = self.target_net.take().unwrap();

        // Q values of the chosen actions in each state
        let q_values = policy_net.forward(states).gather(1, actions);

        // Double DQN target: the policy net selects the best next action, the
        // target net evaluates it
        let next_actions = policy_net.forward(next_states.clone()).argmax(1);
        let next_q_values = target_net
            .forward(next_states)
            .gather(1, next_actions)
            .detach();
        let expected_q_values = Tensor::<B, 2>::zeros([batch_size, 1], self.device)
            .mask_where(non_terminal_mask, next_q_values);

        let discounted_expected_return = rewards + (expected_q_values * self.gamma);

        // Regress the actual Q values onto the expected return
        let loss = self
            .loss
            .forward(q_values, discounted_expected_return, Reduction::Mean);
        trace!("loss: {}", loss.clone().into_scalar().elem::<f32>());

        // Backpropagation on the policy net only; gradient clipping is applied
        // by the optimizer
        let grads = GradientsParams::from_grads(loss.backward(), &policy_net);
        self.policy_net = Some(self.optimizer.step(self.lr.into(), policy_net, grads));
        self.target_net = Some(target_net);
    }

    /// Deploy the agent into the environment for one training episode
    ///
    /// Runs until a terminal state or `max_steps`, learning at every step.
    /// Every `sync_interval` episodes the target network is replaced with a
    /// hard copy of the policy network.
    pub fn go(&mut self, env: &mut E) {
        let mut next_state = Some(env.reset());
        let mut steps = 0;

        while let Some(state) = next_state {
            if steps >= self.max_steps {
                break;
            }

            let action = self.act(env, state.clone());
            let (next, reward) = env.step(action.clone());
            next_state = next;

            self.memory.push(Exp {
                state,
                action,
                next_state: next_state.clone(),
                reward,
            });

            self.learn();
            self.total_steps += 1;
            steps += 1;
        }

        self.episode += 1;
        if self.episode % self.sync_interval == 0 {
            self.target_net = self.policy_net.clone();
        }
    }

    /// Deploy the agent greedily for one episode, without exploring or learning
    pub fn evaluate(&self, env: &mut E) {
        let mut next_state = Some(env.reset());
        let mut steps = 0;

        while let Some(state) = next_state {
            if steps >= self.max_steps {
                break;
            }

            let action = self.policy_action(state);
            let (next, _) = env.step(action);
            next_state = next;
            steps += 1;
        }
    }
}
