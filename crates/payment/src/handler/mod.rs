mod order;
mod payment;
mod sub_order;

pub use self::order::{OrderCommandGrpcServiceImpl, OrderQueryGrpcServiceImpl};
pub use self::payment::PaymentCallbackGrpcServiceImpl;
pub use self::sub_order::SubOrderQueryGrpcServiceImpl;
