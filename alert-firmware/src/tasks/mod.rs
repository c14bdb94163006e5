// Task-Modul: Enthält alle Embassy Tasks
//
// Die Alarm-Poll-Loop ist der einzige Task, der den Alarm-Zustand verändert.
// HTTP ↔ Poll-Loop kommunizieren über Channel + Signal (siehe boundary.rs).

pub mod alert;
pub mod http;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use alert::alert_task;
pub use http::http_server_task;
pub use wifi::{connection_task, net_task};
