use bard_lines_domain::{ResultRecord, count_lines};
use bard_lines_shared_kernel::DocumentTitle;

/// Count the lines of one document and render its result record.
pub fn process(title: &DocumentTitle, content: &str) -> ResultRecord {
    let count = count_lines(content);
    log::debug!("{title}: {count} lines ({} bytes)", content.len());
    ResultRecord::new(title.clone(), count)
}
