pub use notifier::Notifier;
pub use pair_created_message::PairCreatedMessage;
pub use telegram_notifier::TelegramNotifier;

mod notifier;
mod pair_created_message;
mod telegram_notifier;
