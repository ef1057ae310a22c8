use burn::backend::{ndarray::NdArrayDevice, Autodiff, NdArray};
use burn::tensor::backend::Backend;
use ddqn::{
    algo::double_dqn::{DoubleDQNAgent, DoubleDQNAgentConfig},
    gym::CartPole,
    viz,
};
use gym_rs::utils::renderer::RenderMode;
use log::info;
use model::ModelConfig;
use once_cell::sync::Lazy;

mod model;

type DQNBackend = Autodiff<NdArray>;

static DEVICE: Lazy<NdArrayDevice> = Lazy::new(NdArrayDevice::default);

const SEED: u64 = 42;
const TRAIN_EPISODES: u16 = 256;
const EVAL_EPISODES: u16 = 32;

/// Exponential moving average over episode rewards, seeded with the first value
struct MovingAvg(Option<f64>);

impl MovingAvg {
    fn new() -> Self {
        Self(None)
    }

    fn update(&mut self, value: f64) -> f64 {
        let avg = match self.0 {
            Some(avg) => 0.9 * avg + 0.1 * value,
            None => value,
        };
        self.0 = Some(avg);
        avg
    }
}

fn write_curve(path: &str, curve: &[(u16, f64, f64)]) {
    let mut writer = csv::Writer::from_path(path).unwrap();
    writer
        .write_record(["episode", "reward", "avg_reward"])
        .unwrap();
    for row in curve {
        writer.serialize(row).unwrap();
    }
    writer.flush().unwrap();
}

fn main() {
    DQNBackend::seed(SEED);

    let mut env = CartPole::new(RenderMode::None);

    let model = ModelConfig::new(128).init::<DQNBackend>(&DEVICE);
    let agent_config = DoubleDQNAgentConfig::default();
    let mut agent = DoubleDQNAgent::new(model, agent_config, &*DEVICE);

    let mut metrics = env.report.keys();
    metrics.push("avg reward");
    let (handle, tx) = viz::init(metrics, TRAIN_EPISODES + EVAL_EPISODES);

    let mut train_curve = Vec::with_capacity(TRAIN_EPISODES as usize);
    let mut avg = MovingAvg::new();
    for episode in 0..TRAIN_EPISODES {
        agent.go(&mut env);
        let report = env.report.take();
        let reward = report["reward"];
        let avg_reward = avg.update(reward);
        train_curve.push((episode, reward, avg_reward));

        info!("train episode {episode}: reward {reward:.1}, avg {avg_reward:.1}");
        tx.send(viz::Update {
            episode,
            data: vec![reward, avg_reward],
        })
        .unwrap();
    }

    let mut eval_curve = Vec::with_capacity(EVAL_EPISODES as usize);
    let mut avg = MovingAvg::new();
    for episode in 0..EVAL_EPISODES {
        agent.evaluate(&mut env);
        let report = env.report.take();
        let reward = report["reward"];
        let avg_reward = avg.update(reward);
        eval_curve.push((episode, reward, avg_reward));

        info!("eval episode {episode}: reward {reward:.1}, avg {avg_reward:.1}");
        tx.send(viz::Update {
            episode: TRAIN_EPISODES + episode,
            data: vec![reward, avg_reward],
        })
        .unwrap();
    }

    write_curve("train_curve.csv", &train_curve);
    write_curve("eval_curve.csv", &eval_curve);

    drop(tx);
    let _ = handle.join();
}
