mod repository;
mod service;

pub use self::repository::{
    DynPaymentCommandRepository, DynPaymentQueryRepository, PaymentCommandRepositoryTrait,
    PaymentQueryRepositoryTrait,
};
pub use self::service::{
    DynPaymentCallbackService, DynPaymentMethodStrategy, PaymentCallbackServiceTrait,
    PaymentMethodStrategyTrait,
};
