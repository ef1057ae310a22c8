use burn::{
    prelude::*,
    tensor::{activation::relu, backend::AutodiffBackend},
};
use ddqn::algo::double_dqn::QNetwork;
use nn::{Linear, LinearConfig};

/// A 2-hidden-layer ReLU MLP mapping the 4 CartPole observations to 2 Q values
#[derive(Module, Debug)]
pub struct Model<B: Backend> {
    fc1: Linear<B>,
    fc2: Linear<B>,
    fc3: Linear<B>,
}

#[derive(Config, Debug)]
pub struct ModelConfig {
    hidden: usize,
    #[config(default = true)]
    bias: bool,
}

impl ModelConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> Model<B> {
        let linear = |d_in, d_out| LinearConfig::new(d_in, d_out).with_bias(self.bias).init(device);
        Model {
            fc1: linear(4, self.hidden),
            fc2: linear(self.hidden, self.hidden),
            fc3: linear(self.hidden, 2),
        }
    }
}

impl<B: AutodiffBackend> QNetwork<B, 2> for Model<B> {
    fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = relu(self.fc1.forward(input));
        let x = relu(self.fc2.forward(x));
        self.fc3.forward(x)
    }
}
