use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn now_rfc3339(&self) -> String {
        self.now().to_rfc3339()
    }
}
