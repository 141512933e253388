mod command;
mod query;

pub use self::command::SubOrderCommandRepository;
pub use self::query::SubOrderQueryRepository;
