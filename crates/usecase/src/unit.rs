use std::thread;

/// Numeric id of the current OS thread, e.g. `"1"` for the main thread.
///
/// Display only; it never takes part in ordering.
pub fn current_unit_id() -> String {
    let id = format!("{:?}", thread::current().id());
    id.strip_prefix("ThreadId(")
        .and_then(|rest| rest.strip_suffix(')'))
        .map_or_else(|| id.clone(), str::to_owned)
}
