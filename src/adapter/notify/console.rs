use tracing::{info, warn};

use crate::application::interface::notifier::Notifier;

#[derive(Debug, Default, Clone)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        info!("Notify success: {}", message);
        println!("[ok] {}", message);
    }

    fn error(&self, message: &str) {
        warn!("Notify error: {}", message);
        eprintln!("[error] {}", message);
    }
}
