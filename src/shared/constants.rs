/// Message returned when a report is submitted without text
pub const REPORT_INFO_EMPTY: &str = "Report_info is empty";

/// Exclusive upper bound for placeholder model ids handed out when a
/// submission does not name its model
pub const PLACEHOLDER_MODEL_ID_RANGE: i64 = 100;

/// Format used for the `request_time` field of the request log
pub const REQUEST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
