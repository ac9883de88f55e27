use std::fmt::Debug;

use qsort::TraceEvent;

/// Depth-indented one-line rendering of a trace event, for printing the
/// recursion narration. Presentation only; the sorter never formats.
pub fn render_trace_event<T: Debug>(event: &TraceEvent<T>) -> String {
    match event {
        TraceEvent::Leaf { depth, values } => {
            format!("{}base case reached: {values:?}", "  ".repeat(*depth))
        }
        TraceEvent::Frame(frame) => format!(
            "{}pivot {:?} -> less: {:?}, greater_or_equal: {:?}",
            "  ".repeat(frame.depth),
            frame.pivot,
            frame.less,
            frame.greater_or_equal,
        ),
    }
}
