mod callback;
mod strategy;

pub use self::callback::PaymentCallbackService;
pub use self::strategy::{CodPaymentStrategy, PayosPaymentStrategy};
