use burn::{
    prelude::*,
    tensor::{BasicOps, Element},
};

/// A trait for converting items to tensors
///
/// Commonly implemented for `Vec<T>` to convert batches of `T` to a tensor of
/// dimension `D`. Data is converted to the backend's element type, so the
/// implementations below work on any backend.
///
/// See the implementation for `Vec<CPAction>` in `gym::cart_pole` as an
/// example of implementing this trait for a custom action type.
pub trait ToTensor<B: Backend, const D: usize, K: BasicOps<B>> {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, D, K>;
}

impl<B, E, K> ToTensor<B, 1, K> for Vec<E>
where
    B: Backend,
    E: Element,
    K: BasicOps<B>,
{
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1, K> {
        let len = self.len();
        Tensor::from_data(TensorData::new(self, [len]).convert::<K::Elem>(), device)
    }
}

/// Each `[E; A]` becomes one row of the resulting rank 2 tensor
impl<B, E, K, const A: usize> ToTensor<B, 2, K> for Vec<[E; A]>
where
    B: Backend,
    E: Element,
    K: BasicOps<B>,
{
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 2, K> {
        let len = self.len();
        let data = TensorData::new(
            self.into_iter().flatten().collect::<Vec<_>>(),
            [len * A],
        );
        Tensor::<B, 1, K>::from_data(data.convert::<K::Elem>(), device).reshape([-1, A as i32])
    }
}
